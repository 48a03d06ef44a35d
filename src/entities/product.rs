use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// The `products` table.
///
/// `date_added` is set once at insert time. `price` is the current catalog
/// price; order lines copy it at order time and never read it back.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning section, nulled when the section is deleted.
    pub section_id: Option<i32>,

    pub title: String,

    /// Relative path of the stored image file.
    pub image_path: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,

    /// Release year, bounded to [1900, current year] at write time.
    pub year: i32,

    pub country: String,

    pub director: String,

    /// Running time in seconds, if known.
    pub play: Option<i32>,

    #[sea_orm(column_type = "Text")]
    pub cast: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub date_added: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Section,
    #[sea_orm(has_many = "super::order_line::Entity")]
    OrderLines,
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
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
            if let ActiveValue::NotSet = active_model.date_added {
                active_model.date_added = Set(Utc::now().date_naive());
            }
        }

        Ok(active_model)
    }
}
