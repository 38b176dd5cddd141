mod model;
mod server;

use dioxus_logger::tracing::{self, Level};
use tower_http::catch_panic::CatchPanicLayer;

use crate::server::{
    config::Config,
    error::{self, AppError},
    router,
    service::notification::LogMailer,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = startup::setup_token_service(&config);
    let (notifications, _worker) = startup::start_notification_worker(LogMailer::shared());

    let state = AppState::new(db, tokens, notifications, config.page_size);
    let app = router::router()
        .with_state(state)
        .layer(startup::cors_layer(&config)?)
        .layer(CatchPanicLayer::custom(error::panic_response));

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.server_addr, e)))?;

    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}
