// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Flag bits accepted by engine operations.
//!
//! Flags are forwarded to the server untouched; the client never interprets
//! them. Combine with `|`.

/// No optional behaviour requested.
pub const SZ_NO_FLAGS: i64 = 0;

/// Ask mutation operations to return an "info" document describing affected entities.
pub const SZ_WITH_INFO: i64 = 1 << 62;

pub const SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES: i64 = 1 << 0;
pub const SZ_EXPORT_INCLUDE_POSSIBLY_SAME: i64 = 1 << 1;
pub const SZ_EXPORT_INCLUDE_POSSIBLY_RELATED: i64 = 1 << 2;
pub const SZ_EXPORT_INCLUDE_NAME_ONLY: i64 = 1 << 3;
pub const SZ_EXPORT_INCLUDE_DISCLOSED: i64 = 1 << 4;
pub const SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES: i64 = 1 << 5;

pub const SZ_EXPORT_INCLUDE_ALL_ENTITIES: i64 =
    SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES | SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES;
