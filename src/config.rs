//! Service Configuration
//!
//! Read once from the environment at startup and treated as read-only afterwards.

use crate::access::gate::Allowlist;
use crate::error::ConfigError;
use crate::store::protocol::DEFAULT_API_URL;

use axum::http::HeaderValue;
use std::net::SocketAddr;

pub const ENV_ACCESS_TOKEN: &str = "AIRTABLE_ACCESS_TOKEN";
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";
pub const ENV_TABLE: &str = "LEXICON_TABLE";
pub const ENV_API_URL: &str = "AIRTABLE_API_URL";
pub const ENV_CORS: &str = "CORS_ALLOW_ORIGIN";
pub const ENV_ALLOWLIST: &str = "ACCESS_ALLOWLIST";
pub const ENV_INCLUDE_DEFINITION: &str = "LEXICON_INCLUDE_DEFINITION";
pub const ENV_SERVER_FILTER: &str = "LEXICON_SERVER_FILTER";
pub const ENV_BIND: &str = "BIND_ADDR";

pub const DEFAULT_CORS: &str = "*";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub access_token: String,
    pub base_id: String,
    pub table: String,
    pub cors_allow_origin: HeaderValue,
    pub allowlist: Allowlist,
    pub include_definition: bool,
    pub server_filter: bool,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let cors = get(ENV_CORS).unwrap_or_else(|| DEFAULT_CORS.to_string());
        let cors_allow_origin =
            HeaderValue::from_str(&cors).map_err(|e| ConfigError::Invalid {
                name: ENV_CORS,
                reason: e.to_string(),
            })?;

        let bind = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                name: ENV_BIND,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            api_url: get(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            access_token: required(ENV_ACCESS_TOKEN)?,
            base_id: required(ENV_BASE_ID)?,
            table: required(ENV_TABLE)?,
            cors_allow_origin,
            allowlist: get(ENV_ALLOWLIST)
                .map(|raw| Allowlist::parse(&raw))
                .unwrap_or_default(),
            include_definition: parse_flag(ENV_INCLUDE_DEFINITION, get(ENV_INCLUDE_DEFINITION), true)?,
            server_filter: parse_flag(ENV_SERVER_FILTER, get(ENV_SERVER_FILTER), true)?,
            bind_addr,
        })
    }
}

fn parse_flag(name: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
