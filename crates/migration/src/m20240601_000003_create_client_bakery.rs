//! Create `client_bakery` join table.
//!
//! Links are owned by the client and go away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientBakery::Table)
                    .if_not_exists()
                    .col(pk_auto(ClientBakery::Id))
                    .col(integer(ClientBakery::ClientId).not_null())
                    .col(integer(ClientBakery::BakeryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_bakery_client")
                            .from(ClientBakery::Table, ClientBakery::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_bakery_bakery")
                            .from(ClientBakery::Table, ClientBakery::BakeryId)
                            .to(Bakery::Table, Bakery::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientBakery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientBakery { Table, Id, ClientId, BakeryId }

#[derive(DeriveIden)]
enum Client { Table, Id }

#[derive(DeriveIden)]
enum Bakery { Table, Id }
