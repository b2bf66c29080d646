//! Service configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `POSTBOARD_HOST` | `0.0.0.0` | address to bind |
//! | `POSTBOARD_PORT` | `6969` | port to bind |
//! | `POSTBOARD_ID_STRATEGY` | `count` | `count` (size + 1) or `monotonic` |
//! | `POSTBOARD_SEED` | `true` | start with the two example posts |

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::posts::IdStrategy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 6969;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the server binds to.
    pub addr: SocketAddr,
    pub id_strategy: IdStrategy,
    /// Whether the store starts with the example posts.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new([0, 0, 0, 0].into(), DEFAULT_PORT),
            id_strategy: IdStrategy::default(),
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = lookup("POSTBOARD_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim()
            .parse()
            .map_err(|e| invalid("POSTBOARD_HOST", e))?;

        let port = match lookup("POSTBOARD_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| invalid("POSTBOARD_PORT", e))?,
            None => DEFAULT_PORT,
        };

        let id_strategy = match lookup("POSTBOARD_ID_STRATEGY") {
            Some(raw) => raw.parse().map_err(|e| invalid("POSTBOARD_ID_STRATEGY", e))?,
            None => IdStrategy::default(),
        };

        let seed = match lookup("POSTBOARD_SEED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                invalid("POSTBOARD_SEED", format!("`{raw}` is not a boolean"))
            })?,
            None => true,
        };

        Ok(Self { addr: SocketAddr::new(host, port), id_strategy, seed })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(var: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError { var, reason: reason.to_string() }
}
