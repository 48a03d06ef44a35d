// `MigrationTrait` elides the `SchemaManager` lifetime in its signature, and
// `#[async_trait]` impls must match it exactly, so the idiom lint cannot be
// satisfied here.
#![allow(elided_lifetimes_in_paths)]

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_sections_table::Migration),
            Box::new(m20240101_000002_create_discounts_table::Migration),
            Box::new(m20240101_000003_create_products_table::Migration),
            Box::new(m20240101_000004_create_orders_table::Migration),
            Box::new(m20240101_000005_create_order_lines_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_sections_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_sections_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Sections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Sections::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Sections::Title)
                                .string_len(70)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sections::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Sections {
        Table,
        Id,
        Title,
    }
}

mod m20240101_000002_create_discounts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_discounts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // Coupon codes carry no unique key on purpose; see DESIGN.md.
            manager
                .create_table(
                    Table::create()
                        .table(Discounts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Discounts::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Discounts::Code).string_len(10).not_null())
                        .col(ColumnDef::new(Discounts::Value).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Discounts::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Discounts {
        Table,
        Id,
        Code,
        Value,
    }
}

mod m20240101_000003_create_products_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Products::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Products::SectionId).integer().null())
                        .col(ColumnDef::new(Products::Title).string_len(70).not_null())
                        .col(
                            ColumnDef::new(Products::ImagePath)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::Price)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::Year).integer().not_null())
                        .col(ColumnDef::new(Products::Country).string_len(70).not_null())
                        .col(
                            ColumnDef::new(Products::Director)
                                .string_len(70)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Products::Play).integer().null())
                        .col(ColumnDef::new(Products::Cast).text().not_null())
                        .col(ColumnDef::new(Products::Description).text().not_null())
                        .col(ColumnDef::new(Products::DateAdded).date().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_section_id")
                                .from(Products::Table, Products::SectionId)
                                .to(
                                    super::m20240101_000001_create_sections_table::Sections::Table,
                                    super::m20240101_000001_create_sections_table::Sections::Id,
                                )
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_section_id")
                        .table(Products::Table)
                        .col(Products::SectionId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Products {
        Table,
        Id,
        SectionId,
        Title,
        ImagePath,
        Price,
        Year,
        Country,
        Director,
        Play,
        Cast,
        Description,
        DateAdded,
    }
}

mod m20240101_000004_create_orders_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Orders::NeedDelivery).boolean().not_null())
                        .col(ColumnDef::new(Orders::DiscountId).integer().null())
                        .col(ColumnDef::new(Orders::Name).string_len(70).not_null())
                        .col(ColumnDef::new(Orders::Phone).string_len(70).not_null())
                        .col(ColumnDef::new(Orders::Email).string_len(254).not_null())
                        .col(ColumnDef::new(Orders::Address).text().not_null())
                        .col(ColumnDef::new(Orders::Notice).text().not_null())
                        .col(ColumnDef::new(Orders::DateOrder).timestamp().not_null())
                        .col(ColumnDef::new(Orders::DateSend).timestamp().null())
                        .col(
                            ColumnDef::new(Orders::Status)
                                .string_len(3)
                                .not_null()
                                .default("NEW"),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_discount_id")
                                .from(Orders::Table, Orders::DiscountId)
                                .to(
                                    super::m20240101_000002_create_discounts_table::Discounts::Table,
                                    super::m20240101_000002_create_discounts_table::Discounts::Id,
                                )
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_date_order")
                        .table(Orders::Table)
                        .col(Orders::DateOrder)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Orders {
        Table,
        Id,
        NeedDelivery,
        DiscountId,
        Name,
        Phone,
        Email,
        Address,
        Notice,
        DateOrder,
        DateSend,
        Status,
    }
}

mod m20240101_000005_create_order_lines_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_order_lines_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OrderLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderLines::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderLines::OrderId).integer().not_null())
                        .col(ColumnDef::new(OrderLines::ProductId).integer().null())
                        .col(
                            ColumnDef::new(OrderLines::Price)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(OrderLines::Count)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_lines_order_id")
                                .from(OrderLines::Table, OrderLines::OrderId)
                                .to(
                                    super::m20240101_000004_create_orders_table::Orders::Table,
                                    super::m20240101_000004_create_orders_table::Orders::Id,
                                )
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_lines_product_id")
                                .from(OrderLines::Table, OrderLines::ProductId)
                                .to(
                                    super::m20240101_000003_create_products_table::Products::Table,
                                    super::m20240101_000003_create_products_table::Products::Id,
                                )
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_order_lines_order_id")
                        .table(OrderLines::Table)
                        .col(OrderLines::OrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderLines::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum OrderLines {
        Table,
        Id,
        OrderId,
        ProductId,
        Price,
        Count,
    }
}
