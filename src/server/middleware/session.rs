//! Type-safe session access for caller identity.
//!
//! The authentication service that fronts this API writes the caller's user id into
//! the server-side session. `AuthSession` is the only place that knows the key it is
//! stored under.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id and clearing the
/// session on logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Login is handled by the external auth service; only tests write the id here.
    ///
    /// # Arguments
    /// - `user_id` - Primary key of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg(test)]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A caller is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
