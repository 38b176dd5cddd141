use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::BaseForm;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleForm {
    #[serde(flatten)]
    pub base: BaseForm,
    pub name: String,
    pub description: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub status: String,
}
