use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::entities::discount::{
    ActiveModel as DiscountActiveModel, Column, Entity as Discount, Model as DiscountModel,
};
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

/// Input for creating a coupon.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewDiscount {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Coupon code must be between 1 and 10 characters"
    ))]
    pub code: String,

    /// Whole-number percentage off.
    #[validate(range(
        min = 1,
        max = 100,
        message = "Discount value must be between 1 and 100 percent"
    ))]
    pub value: i32,
}

/// Repository for discount coupons.
#[derive(Debug)]
pub struct DiscountRepository {
    base: BaseRepository,
}

impl DiscountRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, input: NewDiscount) -> Result<DiscountModel, AppError> {
        input.validate()?;

        let discount = DiscountActiveModel {
            code: Set(input.code),
            value: Set(input.value),
            ..Default::default()
        };

        discount
            .insert(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DiscountModel>, AppError> {
        Discount::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// First coupon carrying `code`. Codes are not unique, so duplicates
    /// resolve to the oldest row.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<DiscountModel>, AppError> {
        Discount::find()
            .filter(Column::Code.eq(code))
            .order_by_asc(Column::Id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// All coupons, largest discount first.
    pub async fn list(&self) -> Result<Vec<DiscountModel>, AppError> {
        Discount::find()
            .order_by_desc(Column::Value)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Deletes a coupon. Orders referencing it keep existing with a nulled
    /// `discount_id`.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Discount::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Discount", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NewDiscount;
    use validator::Validate;

    fn coupon(value: i32) -> NewDiscount {
        NewDiscount {
            code: "SPRING".to_string(),
            value,
        }
    }

    #[test]
    fn value_bounds_are_inclusive() {
        assert!(coupon(0).validate().is_err());
        assert!(coupon(1).validate().is_ok());
        assert!(coupon(100).validate().is_ok());
        assert!(coupon(101).validate().is_err());
    }

    #[test]
    fn code_length_is_bounded() {
        let input = NewDiscount {
            code: "TOOLONGCODE".to_string(),
            value: 25,
        };
        assert!(input.validate().is_err());
    }
}
