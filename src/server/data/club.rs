//! Club data repository for database operations.
//!
//! Provides `ClubRepository` for creating clubs, reading them in the shapes the API
//! needs and answering the ownership question used by every owner-only mutation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::club::{Club, ClubDetails, CreateClubParams};

pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    /// Creates a new ClubRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or open transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a club owned by `params.created_by`.
    ///
    /// # Returns
    /// - `Ok(Club)` - The created club with its generated id
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   creator does not exist
    pub async fn create(&self, params: CreateClubParams) -> Result<Club, DbErr> {
        let entity = entity::club::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Club::from_entity(entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Club::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether `user_id` created the club `club_id`.
    ///
    /// True only when exactly one club row matches both the id and the creator.
    /// A missing club and a club owned by someone else both return false.
    ///
    /// # Returns
    /// - `Ok(true)` - Caller owns the club
    /// - `Ok(false)` - Club absent or owned by another user
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_owned_by(&self, club_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Club::find()
            .filter(entity::club::Column::Id.eq(club_id))
            .filter(entity::club::Column::CreatedBy.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count == 1)
    }

    /// Gets a club joined with its creator's username.
    ///
    /// # Returns
    /// - `Ok(Some(ClubDetails))` - Club and creator found
    /// - `Ok(None)` - No club with that id, or its creator row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_details(&self, id: i32) -> Result<Option<ClubDetails>, DbErr> {
        let result = entity::prelude::Club::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((club, Some(creator))) => Some(ClubDetails {
                club_name: club.name,
                description: club.description,
                creator_username: creator.username,
            }),
            _ => None,
        })
    }

    /// Gets every club ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }

    /// Gets the clubs created by `user_id` ordered by id.
    pub async fn get_by_creator(&self, user_id: i32) -> Result<Vec<Club>, DbErr> {
        let entities = entity::prelude::Club::find()
            .filter(entity::club::Column::CreatedBy.eq(user_id))
            .order_by_asc(entity::club::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Club::from_entity).collect())
    }
}
