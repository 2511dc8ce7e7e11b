//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::customer::CustomerFactory;
///
/// let customer = CustomerFactory::new(&db)
///     .first_name("Leon")
///     .email("leon.kennedy@rpd.com")
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    telephone: String,
    email: String,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`
    /// - last_name: `"Last {id}"`
    /// - telephone: `"+1 555{id}"`
    /// - email: `"customer{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            telephone: format!("+1 555{:07}", id),
            email: format!("customer{}@example.com", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = telephone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            telephone: ActiveValue::Set(self.telephone),
            email: ActiveValue::Set(self.email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
///
/// Shorthand for `CustomerFactory::new(db).build().await`.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}

/// Creates a customer with a specific email.
///
/// Shorthand for `CustomerFactory::new(db).email(email).build().await`.
pub async fn create_customer_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).email(email).build().await
}
