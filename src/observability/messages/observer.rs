// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for observer registration and notification events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Observer registered on a client.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct ObserverRegistered<'a> {
    pub component: &'a str,
    pub observer_id: &'a str,
}

impl Display for ObserverRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' registered on {}",
            self.observer_id, self.component
        )
    }
}

impl StructuredLog for ObserverRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            observer_id = self.observer_id,
            "{}", self
        );
    }
}

/// Observer removed from a client.
///
/// # Log Level
/// `debug!` - Configuration detail
pub struct ObserverUnregistered<'a> {
    pub component: &'a str,
    pub observer_id: &'a str,
}

impl Display for ObserverUnregistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' unregistered from {}",
            self.observer_id, self.component
        )
    }
}

impl StructuredLog for ObserverUnregistered<'_> {
    fn log(&self) {
        tracing::debug!(
            component = self.component,
            observer_id = self.observer_id,
            "{}", self
        );
    }
}

/// An observer failed to handle a notification. The primary call is unaffected.
///
/// # Log Level
/// `warn!` - Degraded but non-fatal
///
/// # Example
/// ```
/// use sz_grpc::errors::ObserverError;
/// use sz_grpc::observability::messages::observer::ObserverNotificationFailed;
///
/// let error = ObserverError::Rejected {
///     observer_id: "audit".to_string(),
///     reason: "queue full".to_string(),
/// };
/// let msg = ObserverNotificationFailed {
///     observer_id: "audit",
///     operation: "add_record",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("queue full"));
/// ```
pub struct ObserverNotificationFailed<'a> {
    pub observer_id: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ObserverNotificationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Observer '{}' failed to handle '{}' notification: {}",
            self.observer_id, self.operation, self.error
        )
    }
}

impl StructuredLog for ObserverNotificationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            observer_id = self.observer_id,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }
}
