use sea_orm_migration::prelude::*;

use super::m20261016_000001_create_customer_table::Customer;

/// Customers are never created through the API, so a fresh database gets the demo set.
const SEED_CUSTOMERS: [(&str, &str, &str, &str); 3] = [
    ("Leon", "Kennedy", "+1 7035555015", "leon.kennedy@rpd.com"),
    ("Clair", "Redfield", "+1 7577149738", "clair.redfield@terrasave.com"),
    ("Jill", "Valentine", "+1 2025550143", "jill.valentine@bsaa.org"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Customer::Table).columns([
            Customer::FirstName,
            Customer::LastName,
            Customer::Telephone,
            Customer::Email,
        ]);

        for (first_name, last_name, telephone, email) in SEED_CUSTOMERS {
            insert.values_panic([
                first_name.into(),
                last_name.into(),
                telephone.into(),
                email.into(),
            ]);
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let emails = SEED_CUSTOMERS.map(|(_, _, _, email)| email);

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Customer::Table)
                    .and_where(Expr::col(Customer::Email).is_in(emails))
                    .to_owned(),
            )
            .await
    }
}
