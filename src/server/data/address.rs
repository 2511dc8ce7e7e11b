use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QueryTrait,
};

use crate::server::model::address::{AddressFilter, CreateAddressParams};

pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the first address, by id, whose fields equal every field set in `filter`
    pub async fn find_first(
        &self,
        filter: &AddressFilter,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        use entity::address::Column;

        entity::prelude::Address::find()
            .apply_if(filter.street.clone(), |q, v| q.filter(Column::Street.eq(v)))
            .apply_if(filter.postcode.clone(), |q, v| {
                q.filter(Column::Postcode.eq(v))
            })
            .apply_if(filter.city.clone(), |q, v| q.filter(Column::City.eq(v)))
            .apply_if(filter.country.clone(), |q, v| {
                q.filter(Column::Country.eq(v))
            })
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateAddressParams,
    ) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            street: ActiveValue::Set(params.street),
            postcode: ActiveValue::Set(params.postcode),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
