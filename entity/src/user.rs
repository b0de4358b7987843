use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::club::Entity")]
    Club,
    #[sea_orm(has_many = "super::club_subscription::Entity")]
    ClubSubscription,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

impl Related<super::club_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubSubscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
