//! SeaORM entity models for every persisted record.

pub mod prelude;

pub mod attachment;
pub mod course;
pub mod role;
pub mod user;
