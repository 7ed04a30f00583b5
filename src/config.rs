//! Node connection settings.

use crate::error::{RaidenError, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:5001";
pub const DEFAULT_API_VERSION: &str = "v1";

pub const HOST_ENV: &str = "RAIDEN_HOST";
pub const API_VERSION_ENV: &str = "RAIDEN_API_VERSION";
pub const REQUEST_TIMEOUT_ENV: &str = "RAIDEN_REQUEST_TIMEOUT_SECS";

/// Where the node's REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    host: String,
    api_version: String,
    request_timeout: Option<Duration>,
}

impl Config {
    /// Create a config for `host` (e.g. `http://localhost:5001`) and `api_version` (e.g. `v1`)
    pub fn new(host: impl Into<String>, api_version: impl Into<String>) -> Result<Self> {
        let host = host.into().trim_end_matches('/').to_string();
        let api_version = api_version.into();

        let url = Url::parse(&host)
            .map_err(|e| RaidenError::InvalidConfig(format!("host '{host}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RaidenError::InvalidConfig(format!(
                "host '{host}' must use http or https"
            )));
        }

        if api_version.is_empty() || api_version.contains('/') {
            return Err(RaidenError::InvalidConfig(format!(
                "API version '{api_version}' must be a single path segment"
            )));
        }

        Ok(Self {
            host,
            api_version,
            request_timeout: None,
        })
    }

    /// Read `RAIDEN_HOST`, `RAIDEN_API_VERSION` and `RAIDEN_REQUEST_TIMEOUT_SECS`,
    /// falling back to the defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let api_version =
            std::env::var(API_VERSION_ENV).unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let mut config = Self::new(host, api_version)?;

        if let Ok(secs) = std::env::var(REQUEST_TIMEOUT_ENV) {
            let secs: u64 = secs.parse().map_err(|_| {
                RaidenError::InvalidConfig(format!(
                    "{REQUEST_TIMEOUT_ENV} '{secs}' is not a number"
                ))
            })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Timeout applied by the default reqwest transport to every request
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// `{host}/api/{version}`
    pub fn api_base(&self) -> String {
        format!("{}/api/{}", self.host, self.api_version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout: None,
        }
    }
}
