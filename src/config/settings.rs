//! Application settings loaded from environment variables.
//!
//! All required variables are checked up front and reported together so an
//! operator can fix a broken deployment in one pass instead of one variable
//! per restart.

use std::env;
use std::fmt;

use thiserror::Error;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_UPLOAD_DIR, ENV_PRODUCTION,
    MIN_SESSION_SECRET_LENGTH,
};

/// Deployment environment, selected via `APP_ENV`.
///
/// Anything other than `production` is treated as development.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_var(value: Option<String>) -> Self {
        match value.as_deref() {
            Some(v) if v.eq_ignore_ascii_case(ENV_PRODUCTION) => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str(ENV_PRODUCTION),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    session_secret: String,
    pub database_url: String,
    pub environment: Environment,
    pub debug: bool,
    pub upload_dir: String,
    pub max_upload_bytes: usize,
    pub create_tables: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("session_secret", &"[REDACTED]")
            .field("database_url", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("debug", &self.debug)
            .field("upload_dir", &self.upload_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("create_tables", &self.create_tables)
            .finish()
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Reads a `.env` file first if one exists. Fails with a single error
    /// listing every missing required variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| -> Option<String> {
            lookup(name).and_then(|v| {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        let environment = Environment::from_var(get("APP_ENV"));

        let mut missing = Vec::new();

        let session_secret = match get("SESSION_SECRET") {
            Some(secret) => secret,
            None => {
                missing.push("SESSION_SECRET".to_string());
                String::new()
            }
        };

        // Required in production; development falls back to a local database.
        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None if environment.is_production() => {
                missing.push("DATABASE_URL".to_string());
                String::new()
            }
            None => {
                tracing::warn!(
                    "DATABASE_URL not set, falling back to local development database"
                );
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            tracing::warn!(
                "SESSION_SECRET is shorter than {} bytes; consider a longer secret",
                MIN_SESSION_SECRET_LENGTH
            );
        }

        // Debug mode is never honored in production.
        let debug = !environment.is_production()
            && get("APP_DEBUG").is_some_and(|v| is_truthy(&v));

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "MAX_UPLOAD_BYTES",
                value: raw,
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            session_secret,
            database_url,
            environment,
            debug,
            upload_dir: get("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            max_upload_bytes,
            create_tables: get("CREATE_TABLES").as_deref() == Some("true"),
        })
    }

    /// Session secret bytes for cookie signing layers.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_case_insensitive() {
        assert_eq!(
            Environment::from_var(Some("Production".into())),
            Environment::Production
        );
        assert_eq!(
            Environment::from_var(Some("staging".into())),
            Environment::Development
        );
        assert_eq!(Environment::from_var(None), Environment::Development);
    }

    #[test]
    fn environment_display_matches_env_values() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(Environment::Development.to_string(), "development");
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("true"));
        assert!(is_truthy("True"));
        assert!(is_truthy("1"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("yes"));
        assert!(!is_truthy("0"));
    }
}
