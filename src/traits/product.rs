// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use async_trait::async_trait;
use tonic::Status;

#[async_trait]
pub trait SzProduct: Send + Sync {
    async fn get_license(&self, ctx: &Context) -> Result<String, Status>;

    async fn get_version(&self, ctx: &Context) -> Result<String, Status>;
}
