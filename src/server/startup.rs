use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and falls back to `info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool timeout
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_timeout(config.db_acquire_timeout);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// The session carries the caller identity written by the authentication service.
///
/// # Arguments
/// - `db` - Connected database; its SQLite pool also stores sessions
/// - `config` - Application configuration containing the session expiry
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_expiry_days,
        )));

    Ok(session_layer)
}
