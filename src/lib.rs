// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod clients;    // gRPC adapters + client factory
pub mod config;     // client configuration
pub mod context;    // per-call cancellation and deadlines
pub mod errors;     // error handling
pub mod flags;      // engine flag bits
pub mod observability;
pub mod observer;   // observer hooks
pub mod proto;      // generated protobufs live here
pub mod traits;     // capability abstractions

#[cfg(test)]
mod testing;        // in-memory fake server
