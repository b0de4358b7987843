//! User domain model.
//!
//! Users are provisioned by the external authentication service; this backend only
//! reads them to resolve callers and to join creator and subscriber names.

use crate::model::user::UserDto;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}
