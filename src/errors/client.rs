// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the crate itself, outside of a remote call.
//!
//! Remote calls never produce an `SzError`: they hand back the `tonic::Status`
//! exactly as the transport or the server produced it. `SzError` covers the
//! work that happens around those calls: dialing the server, loading client
//! configuration, and managing observers and log levels.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SzError {
    /// The configured gRPC URL could not be turned into an endpoint.
    #[error("Invalid gRPC endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// Dialing the remote server failed.
    #[error("Failed to connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// Client configuration file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Client configuration file could not be parsed.
    #[error("Failed to parse config file {path:?}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Config file extension is neither YAML nor TOML.
    #[error("Unsupported config format for {0:?} (expected .yaml, .yml or .toml)")]
    UnsupportedConfigFormat(PathBuf),

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Observer '{0}' is not registered")]
    UnknownObserver(String),
}
