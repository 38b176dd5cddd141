use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::BaseForm;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseForm {
    #[serde(flatten)]
    pub base: BaseForm,
    pub name: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Option<i32>,
    pub name: String,
    pub duration: String,
    pub description: String,
}
