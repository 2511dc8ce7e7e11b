use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000001_create_customer_table::Customer,
    m20261016_000002_create_address_table::Address,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PilotesOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(PilotesOrder::Id))
                    .col(string_len_uniq(PilotesOrder::OrderNumber, 250))
                    .col(timestamp_with_time_zone(PilotesOrder::CreationDate))
                    .col(boolean(PilotesOrder::Notified).default(false))
                    .col(integer(PilotesOrder::AddressId))
                    .col(string_len(PilotesOrder::PilotesNumber, 16))
                    .col(double(PilotesOrder::Total))
                    .col(integer(PilotesOrder::CustomerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("order_address_id")
                            .from(PilotesOrder::Table, PilotesOrder::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("order_customer_id")
                            .from(PilotesOrder::Table, PilotesOrder::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The notifier scans by (notified, creation_date) every tick
        manager
            .create_index(
                Index::create()
                    .name("idx_pilotes_order_pending")
                    .table(PilotesOrder::Table)
                    .col(PilotesOrder::Notified)
                    .col(PilotesOrder::CreationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PilotesOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PilotesOrder {
    Table,
    Id,
    OrderNumber,
    CreationDate,
    Notified,
    AddressId,
    PilotesNumber,
    Total,
    CustomerId,
}
