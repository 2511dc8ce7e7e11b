use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the customer whose email equals `email` exactly
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
