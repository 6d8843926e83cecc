// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::{impl_observable, ClientCore, Component, NO_DETAILS};
use crate::context::Context;
use crate::proto::szconfigmanager::{
    AddConfigRequest, GetConfigRequest, GetConfigsRequest, GetDefaultConfigIdRequest,
    ReplaceDefaultConfigIdRequest, SetDefaultConfigIdRequest,
};
use crate::proto::SzConfigManagerStub;
use crate::traits::SzConfigManager;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

/// gRPC adapter for [`SzConfigManager`].
#[derive(Debug)]
pub struct SzConfigManagerClient {
    stub: SzConfigManagerStub<Channel>,
    core: ClientCore,
}

impl SzConfigManagerClient {
    pub fn new(channel: Channel, origin: &str) -> Self {
        Self {
            stub: SzConfigManagerStub::new(channel),
            core: ClientCore::new(Component::ConfigManager, origin),
        }
    }

    pub fn component(&self) -> Component {
        self.core.component()
    }
}

impl_observable!(SzConfigManagerClient);

#[async_trait]
impl SzConfigManager for SzConfigManagerClient {
    async fn add_config(
        &self,
        ctx: &Context,
        config_definition: &str,
        config_comment: &str,
    ) -> Result<i64, Status> {
        let request = AddConfigRequest {
            config_definition: config_definition.to_string(),
            config_comment: config_comment.to_string(),
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "add_config", stub.add_config(ctx.request(request)))
            .await?;
        let config_id = response.into_inner().config_id;
        self.core.notify(
            "add_config",
            [
                ("configComment", config_comment.to_string()),
                ("configId", config_id.to_string()),
            ],
        );
        Ok(config_id)
    }

    async fn get_config(&self, ctx: &Context, config_id: i64) -> Result<String, Status> {
        let request = GetConfigRequest { config_id };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "get_config", stub.get_config(ctx.request(request)))
            .await?;
        self.core.notify("get_config", [("configId", config_id.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn get_configs(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_configs",
                stub.get_configs(ctx.request(GetConfigsRequest {})),
            )
            .await?;
        self.core.notify("get_configs", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_default_config_id(&self, ctx: &Context) -> Result<i64, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_default_config_id",
                stub.get_default_config_id(ctx.request(GetDefaultConfigIdRequest {})),
            )
            .await?;
        let config_id = response.into_inner().config_id;
        self.core
            .notify("get_default_config_id", [("configId", config_id.to_string())]);
        Ok(config_id)
    }

    async fn replace_default_config_id(
        &self,
        ctx: &Context,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> Result<(), Status> {
        let request = ReplaceDefaultConfigIdRequest {
            current_default_config_id,
            new_default_config_id,
        };
        let mut stub = self.stub.clone();
        self.core
            .invoke(
                ctx,
                "replace_default_config_id",
                stub.replace_default_config_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "replace_default_config_id",
            [
                ("currentDefaultConfigId", current_default_config_id.to_string()),
                ("newDefaultConfigId", new_default_config_id.to_string()),
            ],
        );
        Ok(())
    }

    async fn set_default_config_id(&self, ctx: &Context, config_id: i64) -> Result<(), Status> {
        let request = SetDefaultConfigIdRequest { config_id };
        let mut stub = self.stub.clone();
        self.core
            .invoke(
                ctx,
                "set_default_config_id",
                stub.set_default_config_id(ctx.request(request)),
            )
            .await?;
        self.core
            .notify("set_default_config_id", [("configId", config_id.to_string())]);
        Ok(())
    }
}
