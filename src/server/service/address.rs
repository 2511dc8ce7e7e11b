use sea_orm::ConnectionTrait;

use crate::server::{
    data::address::AddressRepository,
    error::{pilotes::PilotesError, AppError},
    model::address::{Address, AddressFilter, CreateAddressParams},
};

pub struct AddressService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the first stored address matching every field set in `filter`
    pub async fn find(&self, filter: Option<&AddressFilter>) -> Result<Option<Address>, AppError> {
        let filter = filter.ok_or(PilotesError::AddressNull)?;

        let repo = AddressRepository::new(self.db);
        let address = repo.find_first(filter).await?;

        Ok(address.map(Address::from_entity))
    }

    /// Persists a new address
    pub async fn save(&self, params: Option<CreateAddressParams>) -> Result<Address, AppError> {
        let params = params.ok_or(PilotesError::AddressNull)?;

        let repo = AddressRepository::new(self.db);
        let address = repo.create(params).await?;

        tracing::debug!("Saved a new address with id {}", address.id);

        Ok(Address::from_entity(address))
    }

    /// Returns the stored address equal to `params`, creating it when none exists
    pub async fn find_or_save(
        &self,
        params: Option<CreateAddressParams>,
    ) -> Result<Address, AppError> {
        let params = params.ok_or(PilotesError::AddressNull)?;

        match self.find(Some(&params.to_filter())).await? {
            Some(address) => Ok(address),
            None => self.save(Some(params)).await,
        }
    }
}
