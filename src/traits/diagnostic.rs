// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use async_trait::async_trait;
use tonic::Status;

/// System and datastore introspection.
#[async_trait]
pub trait SzDiagnostic: Send + Sync {
    async fn check_datastore_performance(
        &self,
        ctx: &Context,
        seconds_to_run: i32,
    ) -> Result<String, Status>;

    async fn get_datastore_info(&self, ctx: &Context) -> Result<String, Status>;

    async fn get_feature(&self, ctx: &Context, feature_id: i64) -> Result<String, Status>;

    /// Remove every record from the repository.
    async fn purge_repository(&self, ctx: &Context) -> Result<(), Status>;

    async fn reinitialize(&self, ctx: &Context, config_id: i64) -> Result<(), Status>;
}
