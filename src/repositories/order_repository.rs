use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::entities::order::{
    ActiveModel as OrderActiveModel, Column, Entity as Order, Model as OrderModel, OrderStatus,
};
use crate::entities::order_line::Model as OrderLineModel;
use crate::errors::AppError;
use crate::repositories::{BaseRepository, Repository};

/// Input for placing an order.
///
/// Status is not accepted here: every order starts as
/// [`OrderStatus::New`].
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewOrder {
    pub need_delivery: bool,

    pub discount_id: Option<i32>,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Customer name must be between 1 and 70 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 70,
        message = "Phone must be between 1 and 70 characters"
    ))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub notice: String,
}

/// Repository for orders.
#[derive(Debug)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Places an order. `date_order` and the NEW status are assigned by the
    /// entity on insert; a dangling `discount_id` surfaces as
    /// [`AppError::ForeignKeyViolation`].
    pub async fn create(&self, input: NewOrder) -> Result<OrderModel, AppError> {
        input.validate()?;

        let order = OrderActiveModel {
            need_delivery: Set(input.need_delivery),
            discount_id: Set(input.discount_id),
            name: Set(input.name),
            phone: Set(input.phone),
            email: Set(input.email),
            address: Set(input.address),
            notice: Set(input.notice),
            ..Default::default()
        };

        order
            .insert(self.base.get_db())
            .await
            .map_err(AppError::from_db_err)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, AppError> {
        Order::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// An order together with its lines, for display. Lines whose product
    /// has been deleted still appear, with `product_id` null.
    pub async fn find_with_lines(
        &self,
        id: i32,
    ) -> Result<Option<(OrderModel, Vec<OrderLineModel>)>, AppError> {
        let order = self.find_by_id(id).await?;

        match order {
            Some(order) => {
                let lines = order
                    .find_related(crate::entities::order_line::Entity)
                    .all(self.base.get_db())
                    .await
                    .map_err(AppError::DatabaseError)?;
                Ok(Some((order, lines)))
            }
            None => Ok(None),
        }
    }

    /// All orders, most recent first.
    pub async fn list(&self) -> Result<Vec<OrderModel>, AppError> {
        Order::find()
            .order_by_desc(Column::DateOrder)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<OrderModel>, AppError> {
        Order::find()
            .filter(Column::Status.eq(status))
            .order_by_desc(Column::DateOrder)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Writes a new status. Any status may follow any other; there is no
    /// transition checking.
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<OrderModel, AppError> {
        let order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order", id))?;

        let mut active: OrderActiveModel = order.into();
        active.status = Set(status);

        active
            .update(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Records the shipping timestamp.
    pub async fn mark_sent(
        &self,
        id: i32,
        sent_at: DateTime<Utc>,
    ) -> Result<OrderModel, AppError> {
        let order = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order", id))?;

        let mut active: OrderActiveModel = order.into();
        active.date_send = Set(Some(sent_at));

        active
            .update(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Deletes an order and, through the schema's cascade, all its lines.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = Order::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Order", id));
        }

        Ok(())
    }
}
