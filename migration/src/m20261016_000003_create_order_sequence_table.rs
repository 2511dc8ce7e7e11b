use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderSequence::Table)
                    .if_not_exists()
                    .col(integer(OrderSequence::Id).primary_key())
                    .col(big_integer(OrderSequence::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderSequence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderSequence {
    Table,
    Id,
    Value,
}
