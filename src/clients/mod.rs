// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! gRPC adapters for the capability traits.
//!
//! Each client forwards one trait method to one unary RPC:
//!
//! ```text
//! arguments → XxxRequest → stub.xxx() → XxxResponse → designated field
//! ```
//!
//! Arguments are copied into the request verbatim. The response's designated
//! field is returned and nothing else is consulted. A failed call returns
//! the `tonic::Status` exactly as received. Clients are created by
//! [`ClientFactory`], which owns the shared channel.
//!
//! Besides the capability methods, every client implements
//! [`crate::traits::Observable`] for observer registration and log-level
//! control. Neither affects call results.

mod base;
mod config;
mod config_manager;
mod diagnostic;
mod engine;
mod factory;
mod product;


pub use base::Component;
pub use config::SzConfigClient;
pub use config_manager::SzConfigManagerClient;
pub use diagnostic::SzDiagnosticClient;
pub use engine::SzEngineClient;
pub use factory::ClientFactory;
pub use product::SzProductClient;
