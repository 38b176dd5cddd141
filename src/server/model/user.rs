//! Account domain model.
//!
//! Provides the `User` record used by the generic CRUD handler and the
//! authentication workflow, together with the form bindings that turn a
//! `UserForm` into a record or a search filter.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        api::{BaseForm, InputErrors},
        user::{UserDto, UserForm, UserSummaryDto},
    },
    server::{
        model::record::{EntityForm, Record},
        util::validate::Validator,
    },
};

/// Role assigned to self-registered accounts.
pub const DEFAULT_MEMBER_ROLE_ID: i32 = 2;

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_INACTIVE: &str = "Inactive";

/// Account with credentials, login tracking and profile metadata.
///
/// An empty `password` or `status` on an update means "keep the stored value".
/// When used as a search filter, empty strings and `None` are wildcards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct User {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    /// Natural key, also the email address used for notifications.
    pub login_id: String,
    pub password: String,
    pub email: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub phone: Option<String>,
    pub alternate_mobile: Option<String>,
    pub status: String,
    pub role_id: Option<i32>,
    pub image_id: Option<i32>,
    pub failed_login_attempts: i32,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: Some(entity.id),
            first_name: entity.first_name,
            last_name: entity.last_name,
            login_id: entity.login_id,
            password: entity.password,
            email: entity.email,
            gender: entity.gender,
            dob: entity.dob,
            phone: entity.phone,
            alternate_mobile: entity.alternate_mobile,
            status: entity.status,
            role_id: Some(entity.role_id),
            image_id: entity.image_id,
            failed_login_attempts: entity.failed_login_attempts,
            last_login: entity.last_login,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Public projection used by the login id lookup.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            first_name: self.first_name,
            last_name: self.last_name,
            login_id: self.login_id,
        }
    }
}

impl Record for User {
    type Dto = UserDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn unique_key() -> &'static str {
        "loginId"
    }

    fn unique_value(&self) -> String {
        self.login_id.clone()
    }

    fn label() -> &'static str {
        "Login Id"
    }

    fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            login_id: self.login_id,
            email: self.email,
            gender: self.gender,
            dob: self.dob,
            phone: self.phone,
            alternate_mobile: self.alternate_mobile,
            status: self.status,
            role_id: self.role_id,
            image_id: self.image_id,
            failed_login_attempts: self.failed_login_attempts,
            last_login: self.last_login,
        }
    }
}

impl EntityForm for UserForm {
    type Record = User;

    fn base_mut(&mut self) -> &mut BaseForm {
        &mut self.base
    }

    fn validate(&self) -> InputErrors {
        let mut validator = Validator::new()
            .required("firstName", &self.first_name)
            .max_len("firstName", &self.first_name, 50)
            .required("lastName", &self.last_name)
            .max_len("lastName", &self.last_name, 50)
            .required("loginId", &self.login_id)
            .email("loginId", &self.login_id)
            .required_some("roleId", &self.role_id);

        // Existing accounts may be saved without re-sending the password.
        if self.base.id.filter(|id| *id > 0).is_none() {
            validator = validator.required("password", &self.password);
        }

        validator.finish()
    }

    fn to_record(&self) -> User {
        let status = match (&self.status, self.base.id.filter(|id| *id > 0)) {
            (Some(status), _) => status.clone(),
            (None, Some(_)) => String::new(),
            (None, None) => STATUS_ACTIVE.to_string(),
        };

        User {
            id: self.base.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            login_id: self.login_id.trim().to_string(),
            password: self.password.clone(),
            email: self.login_id.trim().to_string(),
            gender: self.gender.clone(),
            dob: self.dob,
            phone: self.phone.clone(),
            alternate_mobile: self.alternate_mobile.clone(),
            status,
            role_id: self.role_id,
            ..Default::default()
        }
    }

    fn to_filter(&self) -> User {
        User {
            id: None,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            login_id: self.login_id.trim().to_string(),
            status: self.status.clone().unwrap_or_default(),
            role_id: self.role_id,
            ..Default::default()
        }
    }
}
