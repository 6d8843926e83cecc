// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::{impl_observable, ClientCore, Component, NO_DETAILS};
use crate::context::Context;
use crate::proto::szdiagnostic::{
    CheckDatastorePerformanceRequest, GetDatastoreInfoRequest, GetFeatureRequest,
    PurgeRepositoryRequest, ReinitializeRequest,
};
use crate::proto::SzDiagnosticStub;
use crate::traits::SzDiagnostic;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

/// gRPC adapter for [`SzDiagnostic`].
#[derive(Debug)]
pub struct SzDiagnosticClient {
    stub: SzDiagnosticStub<Channel>,
    core: ClientCore,
}

impl SzDiagnosticClient {
    pub fn new(channel: Channel, origin: &str) -> Self {
        Self {
            stub: SzDiagnosticStub::new(channel),
            core: ClientCore::new(Component::Diagnostic, origin),
        }
    }

    pub fn component(&self) -> Component {
        self.core.component()
    }
}

impl_observable!(SzDiagnosticClient);

#[async_trait]
impl SzDiagnostic for SzDiagnosticClient {
    async fn check_datastore_performance(
        &self,
        ctx: &Context,
        seconds_to_run: i32,
    ) -> Result<String, Status> {
        let request = CheckDatastorePerformanceRequest { seconds_to_run };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "check_datastore_performance",
                stub.check_datastore_performance(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "check_datastore_performance",
            [("secondsToRun", seconds_to_run.to_string())],
        );
        Ok(response.into_inner().result)
    }

    async fn get_datastore_info(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_datastore_info",
                stub.get_datastore_info(ctx.request(GetDatastoreInfoRequest {})),
            )
            .await?;
        self.core.notify("get_datastore_info", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_feature(&self, ctx: &Context, feature_id: i64) -> Result<String, Status> {
        let request = GetFeatureRequest { feature_id };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "get_feature", stub.get_feature(ctx.request(request)))
            .await?;
        self.core.notify("get_feature", [("featureId", feature_id.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn purge_repository(&self, ctx: &Context) -> Result<(), Status> {
        let mut stub = self.stub.clone();
        self.core
            .invoke(
                ctx,
                "purge_repository",
                stub.purge_repository(ctx.request(PurgeRepositoryRequest {})),
            )
            .await?;
        self.core.notify("purge_repository", NO_DETAILS);
        Ok(())
    }

    async fn reinitialize(&self, ctx: &Context, config_id: i64) -> Result<(), Status> {
        let request = ReinitializeRequest { config_id };
        let mut stub = self.stub.clone();
        self.core
            .invoke(ctx, "reinitialize", stub.reinitialize(ctx.request(request)))
            .await?;
        self.core.notify("reinitialize", [("configId", config_id.to_string())]);
        Ok(())
    }
}
