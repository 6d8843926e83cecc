// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SzError;
use crate::observer::Observer;
use std::sync::Arc;

/// Observer and logging controls shared by every capability client.
pub trait Observable {
    fn register_observer(&self, observer: Arc<dyn Observer>);

    fn unregister_observer(&self, observer_id: &str) -> Result<(), SzError>;

    fn set_observer_origin(&self, origin: &str);

    fn get_observer_origin(&self) -> String;

    /// Set the client log level by name (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`).
    ///
    /// `TRACE` turns on entry/exit logging for every operation.
    fn set_log_level(&self, level: &str) -> Result<(), SzError>;
}
