use crate::modules::events::coordinator::OrphanPolicy;
use std::net::SocketAddr;
use thiserror::Error;

pub const HOST_VAR: &str = "EVENTS_API_HOST";
pub const PORT_VAR: &str = "EVENTS_API_PORT";
pub const ORPHAN_POLICY_VAR: &str = "EVENTS_API_ORPHAN_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub orphan_policy: OrphanPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment. A `.env` file, if present, is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup(HOST_VAR).unwrap_or(defaults.host);
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    key: PORT_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };
        let orphan_policy = match lookup(ORPHAN_POLICY_VAR) {
            Some(raw) => raw.parse::<OrphanPolicy>().map_err(|reason| ConfigError::Invalid {
                key: ORPHAN_POLICY_VAR,
                value: raw.clone(),
                reason,
            })?,
            None => defaults.orphan_policy,
        };
        Ok(Self {
            host,
            port,
            orphan_policy,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            key: HOST_VAR,
            value: self.host.clone(),
            reason: e.to_string(),
        })
    }
}
