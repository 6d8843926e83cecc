// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Every log line the clients emit is described by a message type in
//! [`messages`]. Each type implements `Display` for the human-readable text
//! and [`messages::StructuredLog`] for the leveled, field-carrying `tracing`
//! event. Call sites are keyed by component and operation name rather than by
//! numeric message identifiers.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::client` - Remote call lifecycle, connection and log-level events
//! * `messages::observer` - Observer registration and notification events
//!
//! # Usage
//!
//! ```rust
//! use sz_grpc::observability::messages::client::CallFailed;
//! use sz_grpc::observability::messages::StructuredLog;
//!
//! let status = tonic::Status::unavailable("connection refused");
//! CallFailed {
//!     component: "SzEngine",
//!     operation: "add_record",
//!     error: &status,
//! }
//! .log();
//! ```

pub mod messages;
