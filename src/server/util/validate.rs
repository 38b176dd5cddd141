//! Field-level form validation.
//!
//! Collects the first violation per field into an `InputErrors` map, keyed by the
//! field's wire (camelCase) name.

use crate::model::api::InputErrors;

pub const REQUIRED: &str = "must not be empty";
pub const INVALID_EMAIL: &str = "must be a well-formed email address";

#[derive(Debug, Default)]
pub struct Validator {
    errors: InputErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, field: &str, value: &str) -> Self {
        let failed = value.trim().is_empty();
        self.check(field, failed, REQUIRED)
    }

    pub fn required_some<T>(self, field: &str, value: &Option<T>) -> Self {
        let failed = value.is_none();
        self.check(field, failed, REQUIRED)
    }

    /// Checks the email format only when a value is present; pair with `required`.
    pub fn email(self, field: &str, value: &str) -> Self {
        let failed = !value.trim().is_empty() && !is_email(value.trim());
        self.check(field, failed, INVALID_EMAIL)
    }

    pub fn max_len(self, field: &str, value: &str, max: usize) -> Self {
        let failed = value.chars().count() > max;
        self.check(field, failed, &format!("size must be at most {}", max))
    }

    pub fn finish(self) -> InputErrors {
        self.errors
    }

    fn check(mut self, field: &str, failed: bool, message: &str) -> Self {
        if failed {
            self.errors
                .entry(field.to_string())
                .or_insert_with(|| message.to_string());
        }
        self
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}
