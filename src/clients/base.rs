// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use crate::errors::SzError;
use crate::observability::messages::client::{CallEntered, CallExited, CallFailed, LogLevelChanged};
use crate::observability::messages::observer::{ObserverRegistered, ObserverUnregistered};
use crate::observability::messages::StructuredLog;
use crate::observer::{Notification, Observer, ObserverSet};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tonic::Status;
use tracing::Instrument;

/// Detail list for notifications that carry no arguments.
pub(crate) const NO_DETAILS: [(&str, &str); 0] = [];

/// The capability area a client serves; doubles as the log and notification subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Config,
    ConfigManager,
    Diagnostic,
    Engine,
    Product,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Config => "SzConfig",
            Component::ConfigManager => "SzConfigManager",
            Component::Diagnostic => "SzDiagnostic",
            Component::Engine => "SzEngine",
            Component::Product => "SzProduct",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State every capability client carries next to its gRPC stub.
///
/// Only the trace flag, observer origin and observer set ever change after
/// construction; none of them influence what a call sends or returns.
#[derive(Debug)]
pub(crate) struct ClientCore {
    component: Component,
    observers: ObserverSet,
    origin: RwLock<String>,
    trace: AtomicBool,
}

impl ClientCore {
    pub(crate) fn new(component: Component, origin: &str) -> Self {
        Self {
            component,
            observers: ObserverSet::new(),
            origin: RwLock::new(origin.to_string()),
            trace: AtomicBool::new(false),
        }
    }

    pub(crate) fn component(&self) -> Component {
        self.component
    }

    pub(crate) fn is_trace(&self) -> bool {
        self.trace.load(Ordering::Relaxed)
    }

    /// Run one remote call under `ctx`, logging around it.
    ///
    /// The call's result is returned untouched.
    pub(crate) async fn invoke<T, F>(
        &self,
        ctx: &Context,
        operation: &'static str,
        call: F,
    ) -> Result<T, Status>
    where
        F: Future<Output = Result<T, Status>>,
    {
        let component = self.component.as_str();
        let trace = self.is_trace();
        let started = Instant::now();
        let entered = CallEntered {
            component,
            operation,
        };
        let span = entered.span("sz_call");
        if trace {
            span.in_scope(|| entered.log());
        }

        let result = ctx.run(call).instrument(span.clone()).await;

        span.in_scope(|| {
            if let Err(status) = &result {
                CallFailed {
                    component,
                    operation,
                    error: status,
                }
                .log();
            }
            if trace {
                CallExited {
                    component,
                    operation,
                    duration: started.elapsed(),
                    error: result.as_ref().err(),
                }
                .log();
            }
        });
        result
    }

    /// Tell observers that `operation` completed.
    pub(crate) fn notify<I, K, V>(&self, operation: &str, details: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if self.observers.is_empty() {
            return;
        }
        self.observers.notify(self.notification(operation, details));
    }

    fn notification<I, K, V>(&self, operation: &str, details: I) -> Notification
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Notification::new(&self.observer_origin(), self.component.as_str(), operation)
            .with_details(details)
    }

    pub(crate) fn register_observer(&self, observer: Arc<dyn Observer>) {
        let observer_id = observer.id().to_string();
        self.observers.register(observer);
        ObserverRegistered {
            component: self.component.as_str(),
            observer_id: &observer_id,
        }
        .log();
        self.notify("register_observer", [("observerId", observer_id)]);
    }

    pub(crate) fn unregister_observer(&self, observer_id: &str) -> Result<(), SzError> {
        let departing = self
            .observers
            .unregister(observer_id)
            .ok_or_else(|| SzError::UnknownObserver(observer_id.to_string()))?;
        ObserverUnregistered {
            component: self.component.as_str(),
            observer_id,
        }
        .log();
        let notification = self.notification("unregister_observer", [("observerId", observer_id)]);
        self.observers.notify_with(notification, departing);
        Ok(())
    }

    pub(crate) fn observer_origin(&self) -> String {
        self.origin
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn set_observer_origin(&self, origin: &str) {
        *self
            .origin
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = origin.to_string();
        self.notify("set_observer_origin", [("origin", origin)]);
    }

    pub(crate) fn set_log_level(&self, level: &str) -> Result<(), SzError> {
        let parsed = parse_log_level(level)?;
        self.apply_log_level(parsed);
        self.notify("set_log_level", [("logLevel", parsed.as_str())]);
        Ok(())
    }

    pub(crate) fn apply_log_level(&self, level: tracing::Level) {
        let trace = level == tracing::Level::TRACE;
        self.trace.store(trace, Ordering::Relaxed);
        LogLevelChanged {
            component: self.component.as_str(),
            level: level.as_str(),
            trace,
        }
        .log();
    }
}

/// Parse a log level name such as `TRACE` or `info`.
pub(crate) fn parse_log_level(level: &str) -> Result<tracing::Level, SzError> {
    tracing::Level::from_str(level.trim()).map_err(|_| SzError::InvalidLogLevel(level.to_string()))
}

/// Implement [`crate::traits::Observable`] for a client holding a `core: ClientCore` field.
macro_rules! impl_observable {
    ($client:ty) => {
        impl $client {
            pub(crate) fn apply_log_level(&self, level: tracing::Level) {
                self.core.apply_log_level(level);
            }

            pub fn is_trace(&self) -> bool {
                self.core.is_trace()
            }
        }

        impl $crate::traits::Observable for $client {
            fn register_observer(
                &self,
                observer: std::sync::Arc<dyn $crate::observer::Observer>,
            ) {
                self.core.register_observer(observer);
            }

            fn unregister_observer(
                &self,
                observer_id: &str,
            ) -> Result<(), $crate::errors::SzError> {
                self.core.unregister_observer(observer_id)
            }

            fn set_observer_origin(&self, origin: &str) {
                self.core.set_observer_origin(origin);
            }

            fn get_observer_origin(&self) -> String {
                self.core.observer_origin()
            }

            fn set_log_level(&self, level: &str) -> Result<(), $crate::errors::SzError> {
                self.core.set_log_level(level)
            }
        }
    };
}

pub(crate) use impl_observable;
