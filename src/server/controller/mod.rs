pub mod auth;
pub mod base;
pub mod course;
pub mod crud;
pub mod role;
pub mod user;
