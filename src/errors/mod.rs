// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod client;
mod observer;

pub use client::SzError;
pub use observer::ObserverError;
