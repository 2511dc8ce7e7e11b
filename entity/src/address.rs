use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pilotes_order::Entity")]
    PilotesOrder,
}

impl Related<super::pilotes_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PilotesOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
