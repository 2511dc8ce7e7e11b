use sea_orm::ConnectionTrait;

use crate::server::{
    data::customer::CustomerRepository,
    error::{pilotes::PilotesError, AppError},
    model::customer::Customer,
};

pub struct CustomerService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the customer with exactly the given email
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - Customer found
    /// - `Ok(None)` - No customer has this email
    /// - `Err(AppError::PilotesErr(CustomerEmailEmpty))` - Email missing or blank
    pub async fn get_by_email(&self, email: Option<&str>) -> Result<Option<Customer>, AppError> {
        let email = match email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(PilotesError::CustomerEmailEmpty.into()),
        };

        let repo = CustomerRepository::new(self.db);
        let customer = repo.find_by_email(email).await?;

        Ok(customer.map(Customer::from_entity))
    }
}
