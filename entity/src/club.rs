use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Owning user; the only anchor for authorization on club mutations.
    pub created_by: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::club_meeting::Entity")]
    ClubMeeting,
    #[sea_orm(has_many = "super::club_notification::Entity")]
    ClubNotification,
    #[sea_orm(has_many = "super::club_subscription::Entity")]
    ClubSubscription,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::club_meeting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubMeeting.def()
    }
}

impl Related<super::club_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubNotification.def()
    }
}

impl Related<super::club_subscription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClubSubscription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
