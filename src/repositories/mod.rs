use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod discount_repository;
pub mod order_line_repository;
pub mod order_repository;
pub mod product_repository;
pub mod section_repository;

pub use discount_repository::DiscountRepository;
pub use order_line_repository::OrderLineRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use section_repository::SectionRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
