//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let role = factory::role::create_role(&db).await?;
//!     let user = factory::user::UserFactory::new(&db)
//!         .login_id("a@x.com")
//!         .password("p1")
//!         .role_id(role.id)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user (account) entities
//! - `role` - Create role entities
//! - `course` - Create course entities
//! - `helpers` - Unique id generation shared by all factories

pub mod course;
pub mod helpers;
pub mod role;
pub mod user;

pub use course::create_course;
pub use role::create_role;
pub use user::create_user;
