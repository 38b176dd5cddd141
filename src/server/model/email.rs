//! Templated email message handed to the notification queue.

use std::collections::BTreeMap;

/// Template codes understood by the mailer.
pub const FORGOT_PASSWORD: &str = "U-FP";
pub const ONE_TIME_PASSWORD: &str = "U-OTP";
pub const CHANGE_PASSWORD: &str = "U-CP";
pub const REGISTRATION: &str = "U-REG";

/// Recipient list plus a template code and its named parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailMessage {
    pub to: Vec<String>,
    pub code: String,
    pub params: BTreeMap<String, String>,
}

impl EmailMessage {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
