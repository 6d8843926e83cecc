// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::observer::ObserverNotificationFailed;
use crate::observability::messages::StructuredLog;
use crate::observer::Observer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;

/// Payload delivered to observers.
///
/// # Example
/// ```json
/// {"origin":"demo","subject":"SzConfigManager","operation":"set_default_config_id","details":{"configId":"41"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub origin: String,
    pub subject: String,
    pub operation: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Notification {
    pub fn new(origin: &str, subject: &str, operation: &str) -> Self {
        Self {
            origin: origin.to_string(),
            subject: subject.to_string(),
            operation: operation.to_string(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_details<I, K, V>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.details
            .extend(details.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// The observers registered on one client.
///
/// Cloning shares the underlying registry.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Arc<RwLock<Vec<Arc<dyn Observer>>>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer, replacing any existing observer with the same id.
    pub fn register(&self, observer: Arc<dyn Observer>) {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        observers.retain(|existing| existing.id() != observer.id());
        observers.push(observer);
    }

    /// Remove an observer by id, returning it if it was registered.
    pub fn unregister(&self, observer_id: &str) -> Option<Arc<dyn Observer>> {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let index = observers
            .iter()
            .position(|existing| existing.id() == observer_id)?;
        Some(observers.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.observers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }

    fn ids(&self) -> Vec<String> {
        self.snapshot()
            .iter()
            .map(|observer| observer.id().to_string())
            .collect()
    }

    fn snapshot(&self) -> Vec<Arc<dyn Observer>> {
        self.observers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Deliver `notification` to every registered observer on a background task.
    ///
    /// Returns `None` when there is nothing to deliver or no runtime to deliver on.
    pub fn notify(&self, notification: Notification) -> Option<JoinHandle<()>> {
        Self::deliver(self.snapshot(), notification)
    }

    /// Like [`ObserverSet::notify`], but `departing` receives the notification too.
    ///
    /// Used after [`ObserverSet::unregister`] so a removed observer still hears
    /// about its own removal.
    pub fn notify_with(
        &self,
        notification: Notification,
        departing: Arc<dyn Observer>,
    ) -> Option<JoinHandle<()>> {
        let mut observers = self.snapshot();
        observers.push(departing);
        Self::deliver(observers, notification)
    }

    fn deliver(
        observers: Vec<Arc<dyn Observer>>,
        notification: Notification,
    ) -> Option<JoinHandle<()>> {
        if observers.is_empty() {
            return None;
        }

        let message = match serde_json::to_string(&notification) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(operation = %notification.operation, "Failed to encode notification: {}", e);
                return None;
            }
        };

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!(
                    operation = %notification.operation,
                    "No async runtime available; skipping observer notification"
                );
                return None;
            }
        };

        Some(handle.spawn(async move {
            for observer in observers {
                if let Err(e) = observer.update(&message).await {
                    ObserverNotificationFailed {
                        observer_id: observer.id(),
                        operation: &notification.operation,
                        error: &e,
                    }
                    .log();
                }
            }
        }))
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observer_ids", &self.ids())
            .finish()
    }
}
