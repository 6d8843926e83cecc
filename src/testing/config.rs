// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::state::{
    parse_data_sources, render_config, render_data_sources, StoredConfig, DEFAULT_DATA_SOURCES,
};
use super::FakeService;
use crate::proto::szconfig::sz_config_server::SzConfig as SzConfigService;
use crate::proto::szconfig::*;
use crate::proto::szconfigmanager::sz_config_manager_server::SzConfigManager as SzConfigManagerService;
use crate::proto::szconfigmanager::*;
use serde_json::json;
use tonic::{Request, Response, Status};

#[tonic::async_trait]
impl SzConfigService for FakeService {
    async fn add_data_source(
        &self,
        request: Request<AddDataSourceRequest>,
    ) -> Result<Response<AddDataSourceResponse>, Status> {
        let req = self.begin("add_data_source", request).await?;
        let mut state = self.lock();
        let sources = state.handle_mut(req.config_handle)?;
        if sources.contains(&req.data_source_code) {
            return Err(Status::already_exists(format!(
                "Data source {} already exists",
                req.data_source_code
            )));
        }
        sources.push(req.data_source_code);
        let result = json!({ "DSRC_ID": sources.len() }).to_string();
        Ok(Response::new(AddDataSourceResponse { result }))
    }

    async fn close_config(
        &self,
        request: Request<CloseConfigRequest>,
    ) -> Result<Response<CloseConfigResponse>, Status> {
        let req = self.begin("close_config", request).await?;
        self.lock()
            .config_handles
            .remove(&req.config_handle)
            .ok_or_else(|| Status::not_found(format!("Unknown config handle {}", req.config_handle)))?;
        Ok(Response::new(CloseConfigResponse {}))
    }

    async fn create_config(
        &self,
        request: Request<CreateConfigRequest>,
    ) -> Result<Response<CreateConfigResponse>, Status> {
        self.begin("create_config", request).await?;
        let mut state = self.lock();
        let config_handle = state.next_handle();
        state.config_handles.insert(
            config_handle,
            DEFAULT_DATA_SOURCES.iter().map(|s| s.to_string()).collect(),
        );
        Ok(Response::new(CreateConfigResponse { config_handle }))
    }

    async fn delete_data_source(
        &self,
        request: Request<DeleteDataSourceRequest>,
    ) -> Result<Response<DeleteDataSourceResponse>, Status> {
        let req = self.begin("delete_data_source", request).await?;
        let mut state = self.lock();
        let sources = state.handle_mut(req.config_handle)?;
        sources.retain(|code| code != &req.data_source_code);
        Ok(Response::new(DeleteDataSourceResponse {}))
    }

    async fn export_config(
        &self,
        request: Request<ExportConfigRequest>,
    ) -> Result<Response<ExportConfigResponse>, Status> {
        let req = self.begin("export_config", request).await?;
        let mut state = self.lock();
        let result = render_config(state.handle_mut(req.config_handle)?);
        Ok(Response::new(ExportConfigResponse { result }))
    }

    async fn get_data_sources(
        &self,
        request: Request<GetDataSourcesRequest>,
    ) -> Result<Response<GetDataSourcesResponse>, Status> {
        let req = self.begin("get_data_sources", request).await?;
        let mut state = self.lock();
        let result = render_data_sources(state.handle_mut(req.config_handle)?);
        Ok(Response::new(GetDataSourcesResponse { result }))
    }

    async fn import_config(
        &self,
        request: Request<ImportConfigRequest>,
    ) -> Result<Response<ImportConfigResponse>, Status> {
        let req = self.begin("import_config", request).await?;
        let sources = parse_data_sources(&req.config_definition)?;
        let mut state = self.lock();
        let config_handle = state.next_handle();
        state.config_handles.insert(config_handle, sources);
        Ok(Response::new(ImportConfigResponse { config_handle }))
    }
}

#[tonic::async_trait]
impl SzConfigManagerService for FakeService {
    async fn add_config(
        &self,
        request: Request<AddConfigRequest>,
    ) -> Result<Response<AddConfigResponse>, Status> {
        let req = self.begin("add_config", request).await?;
        parse_data_sources(&req.config_definition)?;
        let mut state = self.lock();
        let config_id = state.next_config_id();
        state.configs.insert(
            config_id,
            StoredConfig {
                definition: req.config_definition,
                comment: req.config_comment,
            },
        );
        Ok(Response::new(AddConfigResponse { config_id }))
    }

    async fn get_config(
        &self,
        request: Request<GetConfigRequest>,
    ) -> Result<Response<GetConfigResponse>, Status> {
        let req = self.begin("get_config", request).await?;
        let state = self.lock();
        let stored = state
            .configs
            .get(&req.config_id)
            .ok_or_else(|| Status::not_found(format!("Unknown config id {}", req.config_id)))?;
        Ok(Response::new(GetConfigResponse {
            result: stored.definition.clone(),
        }))
    }

    async fn get_configs(
        &self,
        request: Request<GetConfigsRequest>,
    ) -> Result<Response<GetConfigsResponse>, Status> {
        self.begin("get_configs", request).await?;
        let state = self.lock();
        let configs: Vec<_> = state
            .configs
            .iter()
            .map(|(id, stored)| json!({ "CONFIG_ID": id, "CONFIG_COMMENTS": stored.comment }))
            .collect();
        let result = json!({ "CONFIGS": configs }).to_string();
        Ok(Response::new(GetConfigsResponse { result }))
    }

    async fn get_default_config_id(
        &self,
        request: Request<GetDefaultConfigIdRequest>,
    ) -> Result<Response<GetDefaultConfigIdResponse>, Status> {
        self.begin("get_default_config_id", request).await?;
        let config_id = self.lock().default_config_id;
        Ok(Response::new(GetDefaultConfigIdResponse { config_id }))
    }

    async fn replace_default_config_id(
        &self,
        request: Request<ReplaceDefaultConfigIdRequest>,
    ) -> Result<Response<ReplaceDefaultConfigIdResponse>, Status> {
        let req = self.begin("replace_default_config_id", request).await?;
        let mut state = self.lock();
        if state.default_config_id != req.current_default_config_id {
            return Err(Status::failed_precondition(format!(
                "Current default config id is {}, not {}",
                state.default_config_id, req.current_default_config_id
            )));
        }
        if !state.configs.contains_key(&req.new_default_config_id) {
            return Err(Status::not_found(format!(
                "Unknown config id {}",
                req.new_default_config_id
            )));
        }
        state.default_config_id = req.new_default_config_id;
        Ok(Response::new(ReplaceDefaultConfigIdResponse {}))
    }

    async fn set_default_config_id(
        &self,
        request: Request<SetDefaultConfigIdRequest>,
    ) -> Result<Response<SetDefaultConfigIdResponse>, Status> {
        let req = self.begin("set_default_config_id", request).await?;
        let mut state = self.lock();
        if !state.configs.contains_key(&req.config_id) {
            return Err(Status::not_found(format!("Unknown config id {}", req.config_id)));
        }
        state.default_config_id = req.config_id;
        Ok(Response::new(SetDefaultConfigIdResponse {}))
    }
}
