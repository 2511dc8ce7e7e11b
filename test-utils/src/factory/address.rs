//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addresses with customizable fields.
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    street: String,
    postcode: String,
    city: String,
    country: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - street: `"{id} Test Street"`
    /// - postcode: `"23219"`
    /// - city: `"Raccoon"`
    /// - country: `"USA"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            street: format!("{} Test Street", id),
            postcode: "23219".to_string(),
            city: "Raccoon".to_string(),
            country: "USA".to_string(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = postcode.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            street: ActiveValue::Set(self.street),
            postcode: ActiveValue::Set(self.postcode),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values.
pub async fn create_address(db: &DatabaseConnection) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db).build().await
}
