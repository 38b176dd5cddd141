use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::BaseForm;

/// User form used both to save a user and as a search filter template.
///
/// Fields left empty act as wildcards when the form is used for search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    #[serde(flatten)]
    pub base: BaseForm,
    pub first_name: String,
    pub last_name: String,
    pub login_id: String,
    pub password: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub phone: Option<String>,
    pub alternate_mobile: Option<String>,
    pub status: Option<String>,
    pub role_id: Option<i32>,
}

/// User as returned to clients. The password never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub login_id: String,
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

/// Public projection returned by the login id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub first_name: String,
    pub last_name: String,
    pub login_id: String,
}
