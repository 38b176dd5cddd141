//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying bearer tokens
//! - Notification queue feeding the background mail worker
//! - One-time password store
//! - Configured search page size

use sea_orm::DatabaseConnection;

use super::service::{notification::NotificationQueue, otp::OtpService, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds only the signing keys
/// - `NotificationQueue` is a channel sender
/// - `OtpService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens on login and verifies them on every request.
    pub tokens: TokenService,

    /// Hands outgoing email to the background worker.
    pub notifications: NotificationQueue,

    /// Outstanding one-time passwords.
    pub otp: OtpService,

    /// Records per search page.
    pub page_size: u64,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// The one-time password store starts empty.
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        notifications: NotificationQueue,
        page_size: u64,
    ) -> Self {
        Self {
            db,
            tokens,
            notifications,
            otp: OtpService::new(),
            page_size,
        }
    }
}
