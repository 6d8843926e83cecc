// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use async_trait::async_trait;
use tonic::Status;

/// Persisted configuration documents and default-configuration selection.
#[async_trait]
pub trait SzConfigManager: Send + Sync {
    /// Persist a configuration definition and return its server-assigned id.
    async fn add_config(
        &self,
        ctx: &Context,
        config_definition: &str,
        config_comment: &str,
    ) -> Result<i64, Status>;

    async fn get_config(&self, ctx: &Context, config_id: i64) -> Result<String, Status>;

    async fn get_configs(&self, ctx: &Context) -> Result<String, Status>;

    async fn get_default_config_id(&self, ctx: &Context) -> Result<i64, Status>;

    /// Compare-and-swap of the default configuration id.
    ///
    /// Fails if `current_default_config_id` no longer matches the server's
    /// default. The check happens on the server.
    async fn replace_default_config_id(
        &self,
        ctx: &Context,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> Result<(), Status>;

    async fn set_default_config_id(&self, ctx: &Context, config_id: i64) -> Result<(), Status>;
}
