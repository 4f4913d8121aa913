//! Create `product_bakery` many-to-many table.
//!
//! The composite primary key keeps a product's bakery set duplicate-free.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductBakery::Table)
                    .if_not_exists()
                    .col(integer(ProductBakery::ProductId).not_null())
                    .col(integer(ProductBakery::BakeryId).not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_product_bakery")
                            .col(ProductBakery::ProductId)
                            .col(ProductBakery::BakeryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_bakery_product")
                            .from(ProductBakery::Table, ProductBakery::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_bakery_bakery")
                            .from(ProductBakery::Table, ProductBakery::BakeryId)
                            .to(Bakery::Table, Bakery::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductBakery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductBakery { Table, ProductId, BakeryId }

#[derive(DeriveIden)]
enum Product { Table, Id }

#[derive(DeriveIden)]
enum Bakery { Table, Id }
