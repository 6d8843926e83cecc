// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observer hooks for client lifecycle events.
//!
//! Clients notify registered observers after successful operations and when
//! observers come and go. Delivery happens on a spawned task, so a slow or
//! failing observer can never change what a capability method returns.

mod notifier;

pub use notifier::{Notification, ObserverSet};

use crate::errors::ObserverError;
use async_trait::async_trait;

/// A listener for client notifications.
///
/// `update` receives the notification encoded as JSON (see [`Notification`]).
#[async_trait]
pub trait Observer: Send + Sync {
    /// Identifier used to unregister the observer.
    fn id(&self) -> &str;

    async fn update(&self, message: &str) -> Result<(), ObserverError>;
}

/// An observer that accepts and discards every notification.
#[derive(Debug, Clone)]
pub struct NullObserver {
    id: String,
}

impl NullObserver {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Observer for NullObserver {
    fn id(&self) -> &str {
        &self.id
    }

    async fn update(&self, _message: &str) -> Result<(), ObserverError> {
        Ok(())
    }
}
