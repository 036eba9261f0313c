//! Database configuration from the environment.
//!
//! The variable names (`Host`, `Port`, `User`, `Password`, `DBName`,
//! `SSLMode`) are the ones existing deployments of this service already set,
//! so they are read verbatim rather than renamed to the usual upper-snake
//! convention.

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: PgSslMode,
}

impl DbConfig {
    /// Read connection parameters from the environment. `Host`, `User`, and
    /// `DBName` are required; `Port` defaults to 5432, `Password` to empty,
    /// `SSLMode` to `prefer`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = require("Host")?;
        let port = match std::env::var("Port") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 5432,
        };
        let user = require("User")?;
        let password = std::env::var("Password").unwrap_or_default();
        let db_name = require("DBName")?;
        let ssl_mode = parse_ssl_mode(&std::env::var("SSLMode").unwrap_or_default());
        Ok(DbConfig { host, port, user, password, db_name, ssl_mode })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.db_name)
            .ssl_mode(self.ssl_mode)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// libpq mode names; anything unrecognized (including unset) falls back to
/// the libpq default of `prefer`.
fn parse_ssl_mode(value: &str) -> PgSslMode {
    match value.to_ascii_lowercase().as_str() {
        "disable" => PgSslMode::Disable,
        "allow" => PgSslMode::Allow,
        "require" => PgSslMode::Require,
        "verify-ca" => PgSslMode::VerifyCa,
        "verify-full" => PgSslMode::VerifyFull,
        _ => PgSslMode::Prefer,
    }
}
