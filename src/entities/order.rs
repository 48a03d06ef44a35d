use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// Status codes an order can carry.
///
/// Stored as the 3-character code; no transition rules are enforced, any
/// status may follow any other.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "NEW")]
    #[strum(serialize = "NEW")]
    New,
    #[sea_orm(string_value = "APR")]
    #[strum(serialize = "APR")]
    Approved,
    #[sea_orm(string_value = "PAY")]
    #[strum(serialize = "PAY")]
    Paid,
    #[sea_orm(string_value = "CNL")]
    #[strum(serialize = "CNL")]
    Cancelled,
}

impl OrderStatus {
    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New order",
            OrderStatus::Approved => "Approved",
            OrderStatus::Paid => "Paid",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::New
    }
}

/// The `orders` table.
///
/// `date_order` is fixed at insert time; `date_send` stays unset until the
/// order ships. The discount reference is nulled when the coupon is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub need_delivery: bool,

    pub discount_id: Option<i32>,

    pub name: String,

    pub phone: String,

    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub address: String,

    #[sea_orm(column_type = "Text")]
    pub notice: String,

    pub date_order: DateTime<Utc>,

    pub date_send: Option<DateTime<Utc>>,

    pub status: OrderStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discount::Entity",
        from = "Column::DiscountId",
        to = "super::discount::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Discount,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,
}

impl Related<super::discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discount.def()
    }
}

impl Related<super::order_line::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLines.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.date_order {
                active_model.date_order = Set(Utc::now());
            }
            if let ActiveValue::NotSet = active_model.status {
                active_model.status = Set(OrderStatus::default());
            }
        }

        Ok(active_model)
    }
}
