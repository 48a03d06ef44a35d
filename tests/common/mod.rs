use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use shop_catalog::migrator::Migrator;
use shop_catalog::repositories::order_repository::NewOrder;
use shop_catalog::repositories::product_repository::NewProduct;
use std::sync::Arc;

/// Fresh in-memory SQLite database with the full schema applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");

    Migrator::up(&db, None).await.expect("apply migrations");

    Arc::new(db)
}

#[allow(dead_code)]
pub fn sample_product(title: &str, year: i32) -> NewProduct {
    NewProduct {
        section_id: None,
        title: title.to_string(),
        image_path: format!("images/{}.jpg", title.to_lowercase().replace(' ', "-")),
        price: dec!(9.99),
        year,
        country: "Hong Kong".to_string(),
        director: "Benny Chan".to_string(),
        play: Some(6_480),
        cast: "Jackie Chan".to_string(),
        description: "An agent loses his memory.".to_string(),
    }
}

#[allow(dead_code)]
pub fn sample_order() -> NewOrder {
    NewOrder {
        need_delivery: true,
        discount_id: None,
        name: "Ivan".to_string(),
        phone: "+7 900 000-00-00".to_string(),
        email: "ivan@example.com".to_string(),
        address: "Main street 1".to_string(),
        notice: String::new(),
    }
}
