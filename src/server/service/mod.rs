//! Business logic layer.
//!
//! Services sit between controllers and repositories. `entity` is the generic
//! service every CRUD resource shares; `auth` is the authentication workflow built
//! on the account repository; the remaining modules are the collaborators the
//! workflow depends on (tokens, one-time passwords, notifications, attachments).

pub mod attachment;
pub mod auth;
pub mod entity;
pub mod notification;
pub mod otp;
pub mod token;
