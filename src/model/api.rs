//! Uniform response envelope and the base form fields shared by every entity form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use utoipa::ToSchema;

/// Field name to validation message mapping.
pub type InputErrors = BTreeMap<String, String>;

/// Uniform container returned by every operation.
///
/// Built once per operation, filled in while the operation progresses, and
/// serialized as-is to the caller. Domain failures (not found, conflicts, bad
/// credentials) are reported through `success = false` plus a message rather
/// than through HTTP error statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub results: BTreeMap<String, Value>,
    #[serde(default)]
    pub input_errors: InputErrors,
}

impl ResponseEnvelope {
    pub fn new(success: bool) -> Self {
        Self {
            success,
            ..Default::default()
        }
    }

    /// Failure envelope carrying a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        let mut res = Self::new(false);
        res.add_message(message);
        res
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Replaces the payload with the serialized value of `data`.
    ///
    /// A payload that cannot be serialized turns the envelope into a failure.
    pub fn add_data<T: Serialize>(&mut self, data: T) {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(value),
            Err(e) => {
                self.success = false;
                self.add_message(format!("Failed to serialize response data: {}", e));
            }
        }
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn add_result(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.results.insert(key.into(), value.into());
    }

    /// Records field-level validation errors; any error flags the envelope as failed.
    pub fn add_input_errors(&mut self, errors: InputErrors) {
        if !errors.is_empty() {
            self.success = false;
        }
        self.input_errors.extend(errors);
    }
}

/// Operation vocabulary a client can send alongside a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    New,
    Delete,
    Cancel,
    Next,
    Previous,
    Go,
    Logout,
    Error,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::New => "New",
            Self::Delete => "Delete",
            Self::Cancel => "Cancel",
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::Go => "Go",
            Self::Logout => "Logout",
            Self::Error => "Error",
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Save" => Ok(Self::Save),
            "New" => Ok(Self::New),
            "Delete" => Ok(Self::Delete),
            "Cancel" => Ok(Self::Cancel),
            "Next" => Ok(Self::Next),
            "Previous" => Ok(Self::Previous),
            "Go" => Ok(Self::Go),
            "Logout" => Ok(Self::Logout),
            "Error" => Ok(Self::Error),
            other => Err(format!("Unknown operation '{}'", other)),
        }
    }
}

/// Fields every entity form carries in addition to its own.
///
/// `operation` stays a free string on the wire; unknown values simply do not
/// drive page navigation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseForm {
    pub id: Option<i32>,
    pub operation: Option<String>,
    pub page_no: i64,
}

impl BaseForm {
    pub fn operation(&self) -> Option<Operation> {
        self.operation.as_deref().and_then(|op| op.parse().ok())
    }
}
