//! Request and response DTOs exchanged with API clients.

pub mod api;
pub mod auth;
pub mod course;
pub mod role;
pub mod user;
