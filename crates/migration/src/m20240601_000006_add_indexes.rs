use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ClientBakery: one link per (client, bakery)
        manager
            .create_index(
                Index::create()
                    .name("uniq_client_bakery_pair")
                    .table(ClientBakery::Table)
                    .col(ClientBakery::ClientId)
                    .col(ClientBakery::BakeryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ProductBakery: reverse lookup by bakery
        manager
            .create_index(
                Index::create()
                    .name("idx_product_bakery_bakery")
                    .table(ProductBakery::Table)
                    .col(ProductBakery::BakeryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_bakery_bakery").table(ProductBakery::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_client_bakery_pair").table(ClientBakery::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ClientBakery { Table, ClientId, BakeryId }

#[derive(DeriveIden)]
enum ProductBakery { Table, BakeryId }
