// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `client` - Remote call entry/exit/failure, connection and log-level events
//! * `observer` - Observer registration and notification failures
//!
//! # Usage Pattern
//!
//! ```rust
//! use sz_grpc::observability::messages::client::CallEntered;
//!
//! let msg = CallEntered {
//!     component: "SzProduct",
//!     operation: "get_version",
//! };
//!
//! tracing::trace!("{}", msg);
//! ```

pub mod client;
pub mod observer;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event at its designated level.
    fn log(&self);
}
