use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRY_MINUTES: i64 = 600;
/// One year; longer lifetimes are rejected at startup.
const MAX_JWT_EXPIRY_MINUTES: i64 = 366 * 24 * 60;
const DEFAULT_PAGE_SIZE: u64 = 5;
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,

    /// Records per search page, always positive.
    pub page_size: u64,

    pub server_addr: String,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let page_size = optional_env("PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(invalid("PAGE_SIZE", "0", "must be a positive integer").into());
        }

        let jwt_expiry_minutes = check_jwt_expiry(optional_env(
            "JWT_EXPIRY_MINUTES",
            DEFAULT_JWT_EXPIRY_MINUTES,
        )?)?;

        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            jwt_secret: required_env("JWT_SECRET")?,
            jwt_expiry_minutes,
            page_size,
            server_addr: std::env::var("SERVER_ADDR")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
        })
    }
}

fn check_jwt_expiry(minutes: i64) -> Result<i64, ConfigError> {
    if minutes <= 0 {
        return Err(invalid(
            "JWT_EXPIRY_MINUTES",
            &minutes.to_string(),
            "must be a positive integer",
        ));
    }
    if minutes > MAX_JWT_EXPIRY_MINUTES {
        return Err(invalid(
            "JWT_EXPIRY_MINUTES",
            &minutes.to_string(),
            &format!("must not exceed {}", MAX_JWT_EXPIRY_MINUTES),
        ));
    }

    Ok(minutes)
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, &value, &e.to_string())),
        Err(_) => Ok(default),
    }
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
