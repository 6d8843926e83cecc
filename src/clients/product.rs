// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::{impl_observable, ClientCore, Component, NO_DETAILS};
use crate::context::Context;
use crate::proto::szproduct::{GetLicenseRequest, GetVersionRequest};
use crate::proto::SzProductStub;
use crate::traits::SzProduct;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

/// gRPC adapter for [`SzProduct`].
#[derive(Debug)]
pub struct SzProductClient {
    stub: SzProductStub<Channel>,
    core: ClientCore,
}

impl SzProductClient {
    pub fn new(channel: Channel, origin: &str) -> Self {
        Self {
            stub: SzProductStub::new(channel),
            core: ClientCore::new(Component::Product, origin),
        }
    }

    pub fn component(&self) -> Component {
        self.core.component()
    }
}

impl_observable!(SzProductClient);

#[async_trait]
impl SzProduct for SzProductClient {
    async fn get_license(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_license",
                stub.get_license(ctx.request(GetLicenseRequest {})),
            )
            .await?;
        self.core.notify("get_license", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_version(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_version",
                stub.get_version(ctx.request(GetVersionRequest {})),
            )
            .await?;
        self.core.notify("get_version", NO_DETAILS);
        Ok(response.into_inner().result)
    }
}
