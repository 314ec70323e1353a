use crate::constants::{DEFAULT_END_POINT, DEFAULT_TIMEOUT_SECONDS, USER_AGENT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use tracing::warn;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Login credentials for the AppNexus API
pub struct Credentials {
    /// Console login
    pub username: String,
    /// Console password, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the AppNexus API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every resource path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests, 0 disables it
    pub timeout: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl RestApiConfig {
    /// Per request deadline, if any
    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_END_POINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `APPNEXUS_USERNAME`, `APPNEXUS_PASSWORD`, `APPNEXUS_BASE_URL`,
    /// `APPNEXUS_TIMEOUT` and `APPNEXUS_USER_AGENT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("APPNEXUS_USERNAME", String::new());
        let password = get_env_or_default("APPNEXUS_PASSWORD", String::new());

        if username.is_empty() {
            warn!("APPNEXUS_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            warn!("APPNEXUS_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("APPNEXUS_BASE_URL", DEFAULT_END_POINT.to_string()),
                timeout: get_env_or_default("APPNEXUS_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
                user_agent: get_env_or_default("APPNEXUS_USER_AGENT", USER_AGENT.to_string()),
            },
        }
    }

    /// Creates a configuration for `base_url` with the given credentials
    pub fn with_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                ..RestApiConfig::default()
            },
        }
    }
}
