mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let app = router::router()
        .with_state(AppState::new(db, config.club_validation.clone()))
        .layer(session)
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
