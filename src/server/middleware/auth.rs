use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::ownership,
};

/// Access requirement checked by [`AuthGuard::require`].
pub enum Permission {
    /// Caller must be the creator of the club with this id.
    ClubOwner(i32),
}

/// Resolves the session caller and enforces permissions before a handler runs.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated caller holding every permission in `permissions`.
    ///
    /// An empty slice only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AuthError::UserNotInSession)` - No caller in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AppError::NotFound)` - Permission references a club that does not exist
    /// - `Err(AuthError::NotClubOwner)` - Caller does not own the referenced club
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ClubOwner(club_id) => {
                    ownership::require_club_owner(self.db, *club_id, user.id).await?;
                }
            }
        }

        Ok(user)
    }
}
