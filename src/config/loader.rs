// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_GRPC_URL, DEFAULT_OBSERVER_ORIGIN, DEFAULT_URL_SCHEME, ENV_GRPC_URL, ENV_LOG_LEVEL,
    ENV_OBSERVER_ORIGIN,
};
use crate::errors::SzError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Client-side configuration for reaching the remote engine.
///
/// The wrapper layer has very little to configure: which server to talk to,
/// how chatty the clients should be, and how observers should label the
/// notifications they receive.
///
/// # Fields
/// * `grpc_url` - Server address, either `host:port` or a full URL (defaults to `localhost:8261`)
/// * `log_level` - Initial client log level name; `TRACE` enables entry/exit logging (optional)
/// * `observer_origin` - Origin stamped on observer notifications (optional)
/// * `connect_timeout_seconds` - Upper bound on dialing the server (optional)
///
/// # Example
/// ```yaml
/// grpc_url: localhost:8261
/// log_level: INFO
/// observer_origin: demo
/// connect_timeout_seconds: 5
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_grpc_url")]
    pub grpc_url: String,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub observer_origin: Option<String>,
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
}

fn default_grpc_url() -> String {
    DEFAULT_GRPC_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            grpc_url: default_grpc_url(),
            log_level: None,
            observer_origin: None,
            connect_timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at `grpc_url` with everything else defaulted.
    pub fn new(grpc_url: impl Into<String>) -> Self {
        Self {
            grpc_url: grpc_url.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from `SZ_GRPC_URL`, `SZ_LOG_LEVEL` and `SZ_OBSERVER_ORIGIN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            grpc_url: non_empty(ENV_GRPC_URL).unwrap_or_else(default_grpc_url),
            log_level: non_empty(ENV_LOG_LEVEL),
            observer_origin: non_empty(ENV_OBSERVER_ORIGIN),
            connect_timeout_seconds: None,
        }
    }

    /// The server URL with a scheme, as tonic expects it.
    pub fn endpoint_url(&self) -> String {
        normalize_url(&self.grpc_url)
    }

    /// The observer origin, falling back to the crate default.
    pub fn origin(&self) -> &str {
        self.observer_origin
            .as_deref()
            .unwrap_or(DEFAULT_OBSERVER_ORIGIN)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }
}

/// Prefix `http://` onto a bare `host:port` address.
///
/// # Example
/// ```
/// use sz_grpc::config::normalize_url;
///
/// assert_eq!(normalize_url("localhost:8261"), "http://localhost:8261");
/// assert_eq!(normalize_url("https://engine:443"), "https://engine:443");
/// ```
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("{DEFAULT_URL_SCHEME}{url}")
    }
}

/// Load a client config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, SzError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SzError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let parse_error = |reason: String| SzError::ConfigParse {
        path: path.to_path_buf(),
        reason,
    };

    match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        _ => Err(SzError::UnsupportedConfigFormat(path.to_path_buf())),
    }
}
