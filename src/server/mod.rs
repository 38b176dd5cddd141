//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: the generic CRUD controller every
//! entity plugs into, the authentication workflow, data access and the supporting
//! infrastructure. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - Generic request handler, per-entity route families and auth endpoints
//! - **Service Layer** (`service/`) - Generic entity service, auth workflow, tokens, OTP, notifications
//! - **Data Layer** (`data/`) - One repository per entity implementing the persistence port
//! - **Model Layer** (`model/`) - Domain records, caller context and email messages
//! - **Error Layer** (`error/`) - Application error types and failure envelope mapping
//! - **Middleware** (`middleware/`) - Caller context extraction from bearer tokens
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service, notification queue)
//! - **Startup** (`startup`) - Initialization of database, tokens, notification worker and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a handler
//! 2. **Middleware** turns the `Authorization` header into an `ActorContext`
//! 3. **Controller** validates the form and calls the service
//! 4. **Service** enforces record invariants and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain records
//! 6. **Controller** wraps the outcome in a `ResponseEnvelope`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
