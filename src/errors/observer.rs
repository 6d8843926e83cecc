// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure reported by an observer while handling a notification.
///
/// These never reach the caller of a capability method; the notifier logs
/// them and moves on.
#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("Observer '{observer_id}' rejected notification: {reason}")]
    Rejected { observer_id: String, reason: String },

    #[error("Failed to encode notification: {0}")]
    Encoding(#[from] serde_json::Error),
}
