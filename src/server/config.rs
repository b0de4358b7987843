use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Upper bound on waiting for a pooled connection before the request fails.
    pub db_acquire_timeout: Duration,
    pub session_expiry_days: i64,

    pub club_validation: ClubValidation,
}

/// Input policy applied to club and event names before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubValidation {
    /// Whether blank (empty or whitespace only) names are accepted.
    pub allow_empty_name: bool,
    /// Maximum accepted name length in characters.
    pub max_name_length: Option<usize>,
}

impl Default for ClubValidation {
    fn default() -> Self {
        Self {
            allow_empty_name: true,
            max_name_length: None,
        }
    }
}

impl ClubValidation {
    /// Checks a club or event name against the policy.
    ///
    /// # Arguments
    /// - `field` - Human readable field name used in the error message
    /// - `value` - The submitted value
    ///
    /// # Returns
    /// - `Ok(())` - Value accepted
    /// - `Err(AppError::BadRequest)` - Value rejected by the policy
    pub fn check_name(&self, field: &str, value: &str) -> Result<(), AppError> {
        if !self.allow_empty_name && value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }

        if let Some(max) = self.max_name_length {
            if value.chars().count() > max {
                return Err(AppError::BadRequest(format!(
                    "{} must be at most {} characters",
                    field, max
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("PORT", DEFAULT_PORT)?,
            db_acquire_timeout: Duration::from_secs(parse_env_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
            )?),
            session_expiry_days: require_positive(
                "SESSION_EXPIRY_DAYS",
                parse_env_or("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
            )?,
            club_validation: ClubValidation {
                allow_empty_name: parse_env_or("CLUB_ALLOW_EMPTY_NAME", true)?,
                max_name_length: parse_env_opt("CLUB_MAX_NAME_LENGTH")?,
            },
        })
    }
}

fn parse_env_opt<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    Ok(parse_env_opt(name)?.unwrap_or(default))
}

/// Rejects zero and negative values, which would expire every session on creation.
fn require_positive(name: &str, value: i64) -> Result<i64, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}
