mod common;

use chrono::{Datelike, Utc};
use rust_decimal_macros::dec;
use shop_catalog::errors::AppError;
use shop_catalog::repositories::discount_repository::NewDiscount;
use shop_catalog::repositories::product_repository::UpdateProduct;
use shop_catalog::repositories::section_repository::NewSection;
use shop_catalog::repositories::{DiscountRepository, ProductRepository, SectionRepository};

use common::{sample_product, setup_db};

#[tokio::test]
async fn duplicate_section_title_is_rejected() {
    let db = setup_db().await;
    let sections = SectionRepository::new(db);

    sections
        .create(NewSection {
            title: "Action".to_string(),
        })
        .await
        .expect("create first section");

    let err = sections
        .create(NewSection {
            title: "Action".to_string(),
        })
        .await
        .expect_err("duplicate title must be rejected");

    assert!(matches!(err, AppError::UniqueViolation(_)), "{err:?}");
}

#[tokio::test]
async fn sections_list_in_creation_order() {
    let db = setup_db().await;
    let sections = SectionRepository::new(db);

    for title in ["Drama", "Action", "Comedy"] {
        sections
            .create(NewSection {
                title: title.to_string(),
            })
            .await
            .expect("create section");
    }

    let listed = sections.list().await.expect("list sections");
    let ids: Vec<i32> = listed.iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();

    assert_eq!(ids, sorted);
    assert_eq!(listed[0].title, "Drama");
}

#[tokio::test]
async fn product_year_bounds_are_enforced_at_write_time() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let err = products
        .create(sample_product("Too Old", 1899))
        .await
        .expect_err("pre-1900 year must be rejected");
    assert!(matches!(err, AppError::ValidationError(_)));

    let next_year = Utc::now().year() + 1;
    let err = products
        .create(sample_product("Too New", next_year))
        .await
        .expect_err("future year must be rejected");
    assert!(matches!(err, AppError::ValidationError(_)));

    products
        .create(sample_product("Just Right", Utc::now().year()))
        .await
        .expect("current year is accepted");
}

#[tokio::test]
async fn product_date_added_is_set_on_insert() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let created = products
        .create(sample_product("Who Am I?", 1998))
        .await
        .expect("create product");

    assert_eq!(created.date_added, Utc::now().date_naive());
}

#[tokio::test]
async fn products_list_by_title_then_year_descending() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    // Same title twice to model a re-release.
    for (title, year) in [
        ("Solaris", 1972),
        ("Ballad of a Soldier", 1959),
        ("Solaris", 2002),
    ] {
        products
            .create(sample_product(title, year))
            .await
            .expect("create product");
    }

    let listed = products.list().await.expect("list products");
    let keys: Vec<(&str, i32)> = listed.iter().map(|p| (p.title.as_str(), p.year)).collect();

    assert_eq!(
        keys,
        vec![
            ("Ballad of a Soldier", 1959),
            ("Solaris", 2002),
            ("Solaris", 1972),
        ]
    );
}

#[tokio::test]
async fn deleting_a_section_detaches_its_products() {
    let db = setup_db().await;
    let sections = SectionRepository::new(db.clone());
    let products = ProductRepository::new(db);

    let section = sections
        .create(NewSection {
            title: "Action".to_string(),
        })
        .await
        .expect("create section");

    let mut input = sample_product("Who Am I?", 1998);
    input.section_id = Some(section.id);
    let product = products.create(input).await.expect("create product");
    assert_eq!(product.section_id, Some(section.id));

    sections.delete(section.id).await.expect("delete section");

    let survivor = products
        .find_by_id(product.id)
        .await
        .expect("find product")
        .expect("product still persisted");
    assert_eq!(survivor.section_id, None);
}

#[tokio::test]
async fn products_filter_by_section() {
    let db = setup_db().await;
    let sections = SectionRepository::new(db.clone());
    let products = ProductRepository::new(db);

    let action = sections
        .create(NewSection {
            title: "Action".to_string(),
        })
        .await
        .expect("create section");

    let mut inside = sample_product("Who Am I?", 1998);
    inside.section_id = Some(action.id);
    products.create(inside).await.expect("create product");
    products
        .create(sample_product("Solaris", 1972))
        .await
        .expect("create product");

    let listed = products
        .list_by_section(action.id)
        .await
        .expect("list by section");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Who Am I?");
}

#[tokio::test]
async fn product_updates_are_revalidated() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let product = products
        .create(sample_product("Who Am I?", 1998))
        .await
        .expect("create product");

    let err = products
        .update(
            product.id,
            UpdateProduct {
                year: Some(1899),
                ..Default::default()
            },
        )
        .await
        .expect_err("out-of-range year must be rejected");
    assert!(matches!(err, AppError::ValidationError(_)));

    let updated = products
        .update(
            product.id,
            UpdateProduct {
                price: Some(dec!(12.50)),
                ..Default::default()
            },
        )
        .await
        .expect("update price");
    assert_eq!(updated.price, dec!(12.50));
    assert_eq!(updated.year, 1998);
}

#[tokio::test]
async fn discount_value_bounds_are_inclusive() {
    let db = setup_db().await;
    let discounts = DiscountRepository::new(db);

    for value in [0, 101] {
        let err = discounts
            .create(NewDiscount {
                code: format!("BAD{value}"),
                value,
            })
            .await
            .expect_err("out-of-range value must be rejected");
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    for value in [1, 100] {
        discounts
            .create(NewDiscount {
                code: format!("OK{value}"),
                value,
            })
            .await
            .expect("boundary value accepted");
    }
}

#[tokio::test]
async fn discounts_list_largest_first() {
    let db = setup_db().await;
    let discounts = DiscountRepository::new(db);

    for (code, value) in [("TEN", 10), ("HALF", 50), ("QTR", 25)] {
        discounts
            .create(NewDiscount {
                code: code.to_string(),
                value,
            })
            .await
            .expect("create discount");
    }

    let listed = discounts.list().await.expect("list discounts");
    let values: Vec<i32> = listed.iter().map(|d| d.value).collect();
    assert_eq!(values, vec![50, 25, 10]);
}

#[tokio::test]
async fn duplicate_discount_codes_are_allowed() {
    // Coupon codes carry no unique constraint; the lookup resolves to the
    // oldest row.
    let db = setup_db().await;
    let discounts = DiscountRepository::new(db);

    let first = discounts
        .create(NewDiscount {
            code: "SPRING".to_string(),
            value: 10,
        })
        .await
        .expect("create first coupon");
    discounts
        .create(NewDiscount {
            code: "SPRING".to_string(),
            value: 20,
        })
        .await
        .expect("duplicate code accepted");

    let found = discounts
        .find_by_code("SPRING")
        .await
        .expect("lookup by code")
        .expect("coupon found");
    assert_eq!(found.id, first.id);
}
