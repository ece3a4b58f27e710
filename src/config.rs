use std::str::FromStr;

use actix_web::cookie::Key;

use crate::models::invoice::ValidationMode;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Login created on startup when both seed variables are present.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub session_key: Option<String>,
    pub validation_mode: ValidationMode,
    pub seed_user: Option<SeedUser>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => {
                let parsed = raw.trim().parse::<u32>();
                match parsed {
                    Ok(n) if n > 0 => n,
                    _ => return Err(ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", value: raw }),
                }
            }
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let validation_mode = match lookup("INVOICE_VALIDATION") {
            Some(raw) => ValidationMode::from_str(&raw)
                .map_err(|_| ConfigError::Invalid { name: "INVOICE_VALIDATION", value: raw })?,
            None => ValidationMode::default(),
        };

        let seed_user = match (lookup("SEED_USER_EMAIL"), lookup("SEED_USER_PASSWORD")) {
            (Some(email), Some(password)) => Some(SeedUser { email, password }),
            _ => None,
        };

        Ok(Config {
            database_url,
            bind_addr,
            max_connections,
            session_key: lookup("SESSION_KEY"),
            validation_mode,
            seed_user,
        })
    }

    /// Cookie signing key. Falls back to a random key, which logs everyone
    /// out on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
