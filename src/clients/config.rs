// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::{impl_observable, ClientCore, Component};
use crate::context::Context;
use crate::proto::szconfig::{
    AddDataSourceRequest, CloseConfigRequest, CreateConfigRequest, DeleteDataSourceRequest,
    ExportConfigRequest, GetDataSourcesRequest, ImportConfigRequest,
};
use crate::proto::SzConfigStub;
use crate::traits::SzConfig;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

/// gRPC adapter for [`SzConfig`].
#[derive(Debug)]
pub struct SzConfigClient {
    stub: SzConfigStub<Channel>,
    core: ClientCore,
}

impl SzConfigClient {
    pub fn new(channel: Channel, origin: &str) -> Self {
        Self {
            stub: SzConfigStub::new(channel),
            core: ClientCore::new(Component::Config, origin),
        }
    }

    pub fn component(&self) -> Component {
        self.core.component()
    }
}

impl_observable!(SzConfigClient);

#[async_trait]
impl SzConfig for SzConfigClient {
    async fn add_data_source(
        &self,
        ctx: &Context,
        config_handle: i64,
        data_source_code: &str,
    ) -> Result<String, Status> {
        let request = AddDataSourceRequest {
            config_handle,
            data_source_code: data_source_code.to_string(),
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "add_data_source", stub.add_data_source(ctx.request(request)))
            .await?;
        self.core
            .notify("add_data_source", [("dataSourceCode", data_source_code)]);
        Ok(response.into_inner().result)
    }

    async fn close_config(&self, ctx: &Context, config_handle: i64) -> Result<(), Status> {
        let request = CloseConfigRequest { config_handle };
        let mut stub = self.stub.clone();
        self.core
            .invoke(ctx, "close_config", stub.close_config(ctx.request(request)))
            .await?;
        self.core.notify("close_config", [("configHandle", config_handle.to_string())]);
        Ok(())
    }

    async fn create_config(&self, ctx: &Context) -> Result<i64, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "create_config",
                stub.create_config(ctx.request(CreateConfigRequest {})),
            )
            .await?;
        let config_handle = response.into_inner().config_handle;
        self.core.notify("create_config", [("configHandle", config_handle.to_string())]);
        Ok(config_handle)
    }

    async fn delete_data_source(
        &self,
        ctx: &Context,
        config_handle: i64,
        data_source_code: &str,
    ) -> Result<(), Status> {
        let request = DeleteDataSourceRequest {
            config_handle,
            data_source_code: data_source_code.to_string(),
        };
        let mut stub = self.stub.clone();
        self.core
            .invoke(
                ctx,
                "delete_data_source",
                stub.delete_data_source(ctx.request(request)),
            )
            .await?;
        self.core
            .notify("delete_data_source", [("dataSourceCode", data_source_code)]);
        Ok(())
    }

    async fn export_config(&self, ctx: &Context, config_handle: i64) -> Result<String, Status> {
        let request = ExportConfigRequest { config_handle };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "export_config", stub.export_config(ctx.request(request)))
            .await?;
        self.core.notify("export_config", [("configHandle", config_handle.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn get_data_sources(
        &self,
        ctx: &Context,
        config_handle: i64,
    ) -> Result<String, Status> {
        let request = GetDataSourcesRequest { config_handle };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "get_data_sources", stub.get_data_sources(ctx.request(request)))
            .await?;
        self.core.notify("get_data_sources", [("configHandle", config_handle.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn import_config(&self, ctx: &Context, config_definition: &str) -> Result<i64, Status> {
        let request = ImportConfigRequest {
            config_definition: config_definition.to_string(),
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "import_config", stub.import_config(ctx.request(request)))
            .await?;
        let config_handle = response.into_inner().config_handle;
        self.core.notify("import_config", [("configHandle", config_handle.to_string())]);
        Ok(config_handle)
    }
}
