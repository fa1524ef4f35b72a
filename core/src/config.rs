//! Merchant credentials and endpoint selection.
//!
//! # Design
//! The gateway identifies a merchant by two 12-character serial numbers. The
//! defaults below are placeholders and must be replaced per deployment,
//! either in code or through `from_env`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PRODUCTION_URL: &str = "https://www.skipjackic.com/scripts/evolvcc.dll?AuthorizeAPI";
pub const DEVELOPMENT_URL: &str =
    "https://developer.skipjackic.com/scripts/evolvcc.dll?AuthorizeAPI";

pub const PLACEHOLDER_SERIAL_NUMBER: &str = "123456789012";
pub const PLACEHOLDER_DEVELOPER_SERIAL_NUMBER: &str = "123456789012";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which gateway endpoint transactions are posted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Development,
    /// Any other AuthorizeAPI-compatible endpoint, e.g. a local stand-in.
    Custom(String),
}

impl Environment {
    pub fn from_developer_flag(developer: bool) -> Self {
        if developer {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Development => DEVELOPMENT_URL,
            Environment::Custom(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub serial_number: String,
    pub developer_serial_number: String,
    pub environment: Environment,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            serial_number: PLACEHOLDER_SERIAL_NUMBER.to_string(),
            developer_serial_number: PLACEHOLDER_DEVELOPER_SERIAL_NUMBER.to_string(),
            environment: Environment::Production,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn new(serial_number: &str, developer_serial_number: &str) -> Self {
        Self {
            serial_number: serial_number.to_string(),
            developer_serial_number: developer_serial_number.to_string(),
            ..Self::default()
        }
    }

    /// Read `SKIPJACK_SERIAL_NUMBER`, `SKIPJACK_DEVELOPER_SERIAL_NUMBER` and
    /// `SKIPJACK_DEVELOPER` (`1` or `true` selects the development endpoint).
    /// Unset variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(serial) = std::env::var("SKIPJACK_SERIAL_NUMBER") {
            config.serial_number = serial;
        }
        if let Ok(serial) = std::env::var("SKIPJACK_DEVELOPER_SERIAL_NUMBER") {
            config.developer_serial_number = serial;
        }
        if let Ok(flag) = std::env::var("SKIPJACK_DEVELOPER") {
            config.environment = Environment::from_developer_flag(parse_flag(&flag));
        }
        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}
