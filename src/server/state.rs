//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::config::ClubValidation;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// validation policy is a small value type.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Input policy applied when clubs and meetings are created.
    pub club_validation: ClubValidation,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `club_validation` - Name validation policy from configuration
    pub fn new(db: DatabaseConnection, club_validation: ClubValidation) -> Self {
        Self {
            db,
            club_validation,
        }
    }
}
