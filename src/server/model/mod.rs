//! Domain models shared by the data, service and controller layers.
//!
//! Records are converted from SeaORM entities at the repository boundary and into
//! DTOs at the controller boundary. The `record` module holds the traits that let
//! the generic service and request handler work over any of them.

pub mod attachment;
pub mod auth;
pub mod context;
pub mod course;
pub mod email;
pub mod record;
pub mod role;
pub mod user;
