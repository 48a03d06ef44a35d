use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::entities::order_line::{
    ActiveModel as OrderLineActiveModel, Column, Entity as OrderLine, Model as OrderLineModel,
};
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

fn default_count() -> i32 {
    1
}

/// Input for adding a line to an order.
///
/// `price` is the per-unit price effective at order time. It is copied here
/// and never resynchronized with the product's catalog price.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewOrderLine {
    pub order_id: i32,

    pub product_id: Option<i32>,

    #[serde(default)]
    pub price: Decimal,

    #[validate(range(min = 1, message = "Count must be at least 1"))]
    #[serde(default = "default_count")]
    pub count: i32,
}

/// Repository for order lines.
#[derive(Debug)]
pub struct OrderLineRepository {
    base: BaseRepository,
}

impl OrderLineRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Adds a line to an order. A dangling `order_id` or `product_id`
    /// surfaces as [`AppError::ForeignKeyViolation`].
    pub async fn create(&self, input: NewOrderLine) -> Result<OrderLineModel, AppError> {
        input.validate()?;

        let line = OrderLineActiveModel {
            order_id: Set(input.order_id),
            product_id: Set(input.product_id),
            price: Set(input.price),
            count: Set(input.count),
            ..Default::default()
        };

        line.insert(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineModel>, AppError> {
        OrderLine::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Lines of one order, in insertion order.
    pub async fn list_for_order(&self, order_id: i32) -> Result<Vec<OrderLineModel>, AppError> {
        OrderLine::find()
            .filter(Column::OrderId.eq(order_id))
            .order_by_asc(Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn update_count(&self, id: i32, count: i32) -> Result<OrderLineModel, AppError> {
        if count < 1 {
            return Err(AppError::ValidationError(
                "Count must be at least 1".to_string(),
            ));
        }

        let line = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order line", id))?;

        let mut active: OrderLineActiveModel = line.into();
        active.count = Set(count);

        active
            .update(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = OrderLine::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Order line", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NewOrderLine;
    use rust_decimal::Decimal;
    use validator::Validate;

    #[test]
    fn count_below_one_is_rejected() {
        let input = NewOrderLine {
            order_id: 1,
            product_id: None,
            price: Decimal::ZERO,
            count: 0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn defaults_capture_a_free_single_unit() {
        let input: NewOrderLine = serde_json::from_str(r#"{"order_id": 1}"#).unwrap();
        assert_eq!(input.count, 1);
        assert_eq!(input.price, Decimal::ZERO);
        assert!(input.product_id.is_none());
        assert!(input.validate().is_ok());
    }
}
