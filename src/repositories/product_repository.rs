use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationError};

use crate::entities::product::{
    ActiveModel as ProductActiveModel, Column, Entity as Product, Model as ProductModel,
};
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

/// Oldest release year the catalog accepts.
const MIN_RELEASE_YEAR: i32 = 1900;

/// Checked against the calendar year at validation time, not creation time.
fn validate_release_year(value: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if value < MIN_RELEASE_YEAR || value > current_year {
        let mut err = ValidationError::new("range");
        err.message = Some(
            format!("Release year must be between {MIN_RELEASE_YEAR} and {current_year}").into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Input for creating a product.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewProduct {
    pub section_id: Option<i32>,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Product title must be between 1 and 70 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Image path is required"))]
    pub image_path: String,

    pub price: Decimal,

    #[validate(custom = "validate_release_year")]
    pub year: i32,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Country must be between 1 and 70 characters"
    ))]
    pub country: String,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Director must be between 1 and 70 characters"
    ))]
    pub director: String,

    /// Running time in seconds.
    #[validate(range(min = 1, message = "Running time must be at least one second"))]
    pub play: Option<i32>,

    #[validate(length(min = 1, message = "Cast is required"))]
    pub cast: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

/// Partial update for a product; absent fields are left untouched.
///
/// `section_id` is double-optional so a caller can distinguish "leave as is"
/// (outer `None`) from "detach from section" (`Some(None)`).
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    pub section_id: Option<Option<i32>>,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Product title must be between 1 and 70 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Image path is required"))]
    pub image_path: Option<String>,

    pub price: Option<Decimal>,

    #[validate(custom = "validate_release_year")]
    pub year: Option<i32>,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Country must be between 1 and 70 characters"
    ))]
    pub country: Option<String>,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Director must be between 1 and 70 characters"
    ))]
    pub director: Option<String>,

    #[validate(range(min = 1, message = "Running time must be at least one second"))]
    pub play: Option<i32>,

    #[validate(length(min = 1, message = "Cast is required"))]
    pub cast: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
}

/// Repository for catalog products.
#[derive(Debug)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Creates a product. `date_added` is assigned by the entity on insert.
    pub async fn create(&self, input: NewProduct) -> Result<ProductModel, AppError> {
        input.validate()?;

        let product = ProductActiveModel {
            section_id: Set(input.section_id),
            title: Set(input.title),
            image_path: Set(input.image_path),
            price: Set(input.price),
            year: Set(input.year),
            country: Set(input.country),
            director: Set(input.director),
            play: Set(input.play),
            cast: Set(input.cast),
            description: Set(input.description),
            ..Default::default()
        };

        product
            .insert(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, AppError> {
        Product::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// All products, title ascending then year descending, so re-releases of
    /// the same title list newest first.
    pub async fn list(&self) -> Result<Vec<ProductModel>, AppError> {
        Product::find()
            .order_by_asc(Column::Title)
            .order_by_desc(Column::Year)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn list_by_section(&self, section_id: i32) -> Result<Vec<ProductModel>, AppError> {
        Product::find()
            .filter(Column::SectionId.eq(section_id))
            .order_by_asc(Column::Title)
            .order_by_desc(Column::Year)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn update(&self, id: i32, input: UpdateProduct) -> Result<ProductModel, AppError> {
        input.validate()?;

        let product = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product", id))?;

        let mut active: ProductActiveModel = product.into();

        if let Some(section_id) = input.section_id {
            active.section_id = Set(section_id);
        }
        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(image_path) = input.image_path {
            active.image_path = Set(image_path);
        }
        if let Some(price) = input.price {
            active.price = Set(price);
        }
        if let Some(year) = input.year {
            active.year = Set(year);
        }
        if let Some(country) = input.country {
            active.country = Set(country);
        }
        if let Some(director) = input.director {
            active.director = Set(director);
        }
        if let Some(play) = input.play {
            active.play = Set(Some(play));
        }
        if let Some(cast) = input.cast {
            active.cast = Set(cast);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }

        active
            .update(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    /// Deletes a product. Order lines keep their captured price and count;
    /// only their product reference is nulled.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Product::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Product", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> NewProduct {
        NewProduct {
            section_id: None,
            title: "Who Am I?".to_string(),
            image_path: "images/who-am-i.jpg".to_string(),
            price: dec!(9.99),
            year: 1998,
            country: "Hong Kong".to_string(),
            director: "Benny Chan".to_string(),
            play: Some(6_480),
            cast: "Jackie Chan".to_string(),
            description: "An agent loses his memory.".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_product() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn year_below_floor_is_rejected() {
        let mut input = sample();
        input.year = 1899;
        assert!(input.validate().is_err());
    }

    #[test]
    fn year_in_the_future_is_rejected() {
        let mut input = sample();
        input.year = Utc::now().year() + 1;
        assert!(input.validate().is_err());
    }

    #[test]
    fn current_year_is_accepted() {
        let mut input = sample();
        input.year = Utc::now().year();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn zero_running_time_is_rejected() {
        let mut input = sample();
        input.play = Some(0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn missing_running_time_is_allowed() {
        let mut input = sample();
        input.play = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn partial_update_validates_only_supplied_fields() {
        let update = UpdateProduct {
            year: Some(1899),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateProduct {
            price: Some(dec!(12.50)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
