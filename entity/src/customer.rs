use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    #[sea_orm(unique)]
    pub email: String,
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
