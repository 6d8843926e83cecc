// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use async_trait::async_trait;
use tonic::Status;

/// Creation and editing of in-memory configuration documents.
///
/// A configuration document lives on the server behind an opaque handle
/// between `create_config`/`import_config` and `close_config`.
#[async_trait]
pub trait SzConfig: Send + Sync {
    async fn add_data_source(
        &self,
        ctx: &Context,
        config_handle: i64,
        data_source_code: &str,
    ) -> Result<String, Status>;

    async fn close_config(&self, ctx: &Context, config_handle: i64) -> Result<(), Status>;

    async fn create_config(&self, ctx: &Context) -> Result<i64, Status>;

    async fn delete_data_source(
        &self,
        ctx: &Context,
        config_handle: i64,
        data_source_code: &str,
    ) -> Result<(), Status>;

    /// Serialize the document behind `config_handle` to its JSON definition.
    async fn export_config(&self, ctx: &Context, config_handle: i64) -> Result<String, Status>;

    async fn get_data_sources(&self, ctx: &Context, config_handle: i64)
        -> Result<String, Status>;

    async fn import_config(&self, ctx: &Context, config_definition: &str) -> Result<i64, Status>;
}
