//! Identity of the caller threaded through every service call.

use crate::server::model::user::User;

/// Login id used by the built-in anonymous context.
pub const ANONYMOUS_LOGIN_ID: &str = "anonymous";

/// Login id used by privileged internal operations such as sign-up.
pub const SYSTEM_LOGIN_ID: &str = "system";

/// Organisation every context belongs to until multi-tenancy exists.
pub const ROOT_ORG_ID: i64 = 0;
pub const ROOT_ORG_NAME: &str = "root";

/// Authenticated caller identity and authorization attributes.
///
/// Built once at the transport boundary and passed explicitly to every service
/// call for audit attribution. Never persisted as part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    pub login_id: String,
    pub org_id: i64,
    pub org_name: String,
    pub role_id: Option<i32>,
    pub name: String,
}

impl ActorContext {
    /// Context substituted when a request carries no credentials.
    pub fn anonymous() -> Self {
        Self {
            login_id: ANONYMOUS_LOGIN_ID.to_string(),
            org_id: ROOT_ORG_ID,
            org_name: ROOT_ORG_NAME.to_string(),
            role_id: None,
            name: "Anonymous".to_string(),
        }
    }

    /// Privileged context for operations run on behalf of an unauthenticated caller.
    pub fn system() -> Self {
        Self {
            login_id: SYSTEM_LOGIN_ID.to_string(),
            org_id: ROOT_ORG_ID,
            org_name: ROOT_ORG_NAME.to_string(),
            role_id: None,
            name: "System".to_string(),
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            login_id: user.login_id.clone(),
            org_id: ROOT_ORG_ID,
            org_name: ROOT_ORG_NAME.to_string(),
            role_id: user.role_id,
            name: user.full_name(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.login_id == ANONYMOUS_LOGIN_ID
    }
}

impl Default for ActorContext {
    fn default() -> Self {
        Self::anonymous()
    }
}
