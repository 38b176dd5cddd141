//! Database repository layer for all domain entities.
//!
//! This module contains one repository struct per entity. Every repository that
//! backs a generic CRUD resource implements the `Repository` persistence port;
//! all of them use SeaORM entity models internally and return domain records so
//! the service layer never sees database types.

pub mod attachment;
pub mod course;
pub mod repository;
pub mod role;
pub mod user;
