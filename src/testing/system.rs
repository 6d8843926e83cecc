// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::state::{FAKE_LICENSE, FAKE_VERSION};
use super::FakeService;
use crate::proto::szdiagnostic::sz_diagnostic_server::SzDiagnostic as SzDiagnosticService;
use crate::proto::szdiagnostic::*;
use crate::proto::szproduct::sz_product_server::SzProduct as SzProductService;
use crate::proto::szproduct::*;
use serde_json::json;
use tonic::{Request, Response, Status};

#[tonic::async_trait]
impl SzDiagnosticService for FakeService {
    async fn check_datastore_performance(
        &self,
        request: Request<CheckDatastorePerformanceRequest>,
    ) -> Result<Response<CheckDatastorePerformanceResponse>, Status> {
        let req = self.begin("check_datastore_performance", request).await?;
        let result = json!({
            "numRecordsInserted": 0,
            "insertTime": i64::from(req.seconds_to_run) * 1000,
        })
        .to_string();
        Ok(Response::new(CheckDatastorePerformanceResponse { result }))
    }

    async fn get_datastore_info(
        &self,
        request: Request<GetDatastoreInfoRequest>,
    ) -> Result<Response<GetDatastoreInfoResponse>, Status> {
        self.begin("get_datastore_info", request).await?;
        let result = json!({
            "dataStores": [{ "id": "CORE", "type": "memory", "location": "fake" }]
        })
        .to_string();
        Ok(Response::new(GetDatastoreInfoResponse { result }))
    }

    async fn get_feature(
        &self,
        request: Request<GetFeatureRequest>,
    ) -> Result<Response<GetFeatureResponse>, Status> {
        let req = self.begin("get_feature", request).await?;
        let result = json!({ "LIB_FEAT_ID": req.feature_id }).to_string();
        Ok(Response::new(GetFeatureResponse { result }))
    }

    async fn purge_repository(
        &self,
        request: Request<PurgeRepositoryRequest>,
    ) -> Result<Response<PurgeRepositoryResponse>, Status> {
        self.begin("purge_repository", request).await?;
        self.lock().records.clear();
        Ok(Response::new(PurgeRepositoryResponse {}))
    }

    async fn reinitialize(
        &self,
        request: Request<ReinitializeRequest>,
    ) -> Result<Response<ReinitializeResponse>, Status> {
        let req = self.begin("diagnostic_reinitialize", request).await?;
        let mut state = self.lock();
        if !state.configs.contains_key(&req.config_id) {
            return Err(Status::not_found(format!("Unknown config id {}", req.config_id)));
        }
        state.active_config_id = req.config_id;
        Ok(Response::new(ReinitializeResponse {}))
    }
}

#[tonic::async_trait]
impl SzProductService for FakeService {
    async fn get_license(
        &self,
        request: Request<GetLicenseRequest>,
    ) -> Result<Response<GetLicenseResponse>, Status> {
        self.begin("get_license", request).await?;
        Ok(Response::new(GetLicenseResponse {
            result: FAKE_LICENSE.to_string(),
        }))
    }

    async fn get_version(
        &self,
        request: Request<GetVersionRequest>,
    ) -> Result<Response<GetVersionResponse>, Status> {
        self.begin("get_version", request).await?;
        Ok(Response::new(GetVersionResponse {
            result: FAKE_VERSION.to_string(),
        }))
    }
}
