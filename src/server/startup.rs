use axum::http::{header, HeaderValue, Method};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        notification::{Mailer, NotificationQueue},
        token::TokenService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the token service from the configured secret and lifetime.
pub fn setup_token_service(config: &Config) -> TokenService {
    TokenService::new(
        &config.jwt_secret,
        chrono::Duration::minutes(config.jwt_expiry_minutes),
    )
}

/// Starts the background worker that delivers queued email through `mailer`.
///
/// # Returns
/// - The queue handle to store in `AppState` and the worker's join handle
pub fn start_notification_worker(mailer: Arc<dyn Mailer>) -> (NotificationQueue, JoinHandle<()>) {
    NotificationQueue::start(mailer)
}

/// Builds the CORS layer allowing the configured front-end origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(ConfigError::InvalidEnvVar)` - `ALLOWED_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.allowed_origin).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "ALLOWED_ORIGIN".to_string(),
            value: config.allowed_origin.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
