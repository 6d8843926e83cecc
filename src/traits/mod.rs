// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;
pub mod config_manager;
pub mod diagnostic;
pub mod engine;
pub mod observable;
pub mod product;

pub use config::SzConfig;
pub use config_manager::SzConfigManager;
pub use diagnostic::SzDiagnostic;
pub use engine::SzEngine;
pub use observable::Observable;
pub use product::SzProduct;
