// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote call lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Entry into and exit from a capability operation
//! * Remote call failures
//! * Connection establishment
//! * Client log-level changes

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// A capability operation was entered.
///
/// # Log Level
/// `trace!` - Only emitted when the client's trace flag is set
///
/// # Example
/// ```
/// use sz_grpc::observability::messages::client::CallEntered;
///
/// let msg = CallEntered {
///     component: "SzConfigManager",
///     operation: "get_default_config_id",
/// };
///
/// assert_eq!(msg.to_string(), "Enter SzConfigManager.get_default_config_id");
/// ```
pub struct CallEntered<'a> {
    pub component: &'a str,
    pub operation: &'a str,
}

impl Display for CallEntered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Enter {}.{}", self.component, self.operation)
    }
}

impl CallEntered<'_> {
    /// Open the span a remote call runs under.
    pub fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "call",
            span_name = name,
            component = self.component,
            operation = self.operation,
        )
    }
}

impl StructuredLog for CallEntered<'_> {
    fn log(&self) {
        tracing::trace!(
            component = self.component,
            operation = self.operation,
            "{}", self
        );
    }
}

/// A capability operation returned, successfully or not.
///
/// # Log Level
/// `trace!` - Only emitted when the client's trace flag is set
pub struct CallExited<'a> {
    pub component: &'a str,
    pub operation: &'a str,
    pub duration: Duration,
    pub error: Option<&'a tonic::Status>,
}

impl Display for CallExited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.error {
            None => write!(
                f,
                "Exit {}.{} in {:?}",
                self.component, self.operation, self.duration
            ),
            Some(status) => write!(
                f,
                "Exit {}.{} in {:?} with {:?}: {}",
                self.component,
                self.operation,
                self.duration,
                status.code(),
                status.message()
            ),
        }
    }
}

impl StructuredLog for CallExited<'_> {
    fn log(&self) {
        tracing::trace!(
            component = self.component,
            operation = self.operation,
            duration_ms = self.duration.as_millis() as u64,
            failed = self.error.is_some(),
            "{}", self
        );
    }
}

/// A remote call returned an error.
///
/// The status is logged exactly as received; the caller gets the same value back.
///
/// # Log Level
/// `debug!` - Failure is reported to the caller, who decides its severity
///
/// # Example
/// ```
/// use sz_grpc::observability::messages::client::CallFailed;
///
/// let status = tonic::Status::failed_precondition("stale default config id");
/// let msg = CallFailed {
///     component: "SzConfigManager",
///     operation: "replace_default_config_id",
///     error: &status,
/// };
///
/// assert!(msg.to_string().contains("stale default config id"));
/// ```
pub struct CallFailed<'a> {
    pub component: &'a str,
    pub operation: &'a str,
    pub error: &'a tonic::Status,
}

impl Display for CallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}.{} failed with {:?}: {}",
            self.component,
            self.operation,
            self.error.code(),
            self.error.message()
        )
    }
}

impl StructuredLog for CallFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            operation = self.operation,
            code = ?self.error.code(),
            "{}", self
        );
    }
}

/// The client factory established (or lazily prepared) its channel.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConnectionEstablished<'a> {
    pub target: &'a str,
    pub lazy: bool,
}

impl Display for ConnectionEstablished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.lazy {
            write!(f, "Prepared lazy gRPC channel to {}", self.target)
        } else {
            write!(f, "Connected gRPC channel to {}", self.target)
        }
    }
}

impl StructuredLog for ConnectionEstablished<'_> {
    fn log(&self) {
        tracing::info!(target_url = self.target, lazy = self.lazy, "{}", self);
    }
}

/// A client's log level was changed.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct LogLevelChanged<'a> {
    pub component: &'a str,
    pub level: &'a str,
    pub trace: bool,
}

impl Display for LogLevelChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} log level set to {} (trace={})",
            self.component, self.level, self.trace
        )
    }
}

impl StructuredLog for LogLevelChanged<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            level = self.level,
            trace = self.trace,
            "{}", self
        );
    }
}
