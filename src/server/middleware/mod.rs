//! Request guards that resolve the caller for every operation.

pub mod auth;
