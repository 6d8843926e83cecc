// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default gRPC server address (host:port)
pub const DEFAULT_GRPC_URL: &str = "localhost:8261";
/// Scheme prefixed onto bare host:port addresses
pub const DEFAULT_URL_SCHEME: &str = "http://";
/// Observer origin used when none is configured
pub const DEFAULT_OBSERVER_ORIGIN: &str = "sz-grpc";

/// Environment variable overriding the gRPC server address
pub const ENV_GRPC_URL: &str = "SZ_GRPC_URL";
/// Environment variable selecting the initial client log level
pub const ENV_LOG_LEVEL: &str = "SZ_LOG_LEVEL";
/// Environment variable naming the observer origin
pub const ENV_OBSERVER_ORIGIN: &str = "SZ_OBSERVER_ORIGIN";
