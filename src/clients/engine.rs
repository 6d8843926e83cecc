// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::{impl_observable, ClientCore, Component, NO_DETAILS};
use crate::context::Context;
use crate::proto::szengine::{
    AddRecordRequest, CloseExportRequest, CountRedoRecordsRequest, DeleteRecordRequest,
    ExportCsvEntityReportRequest, ExportJsonEntityReportRequest, FetchNextRequest,
    FindInterestingEntitiesByEntityIdRequest, FindInterestingEntitiesByRecordIdRequest,
    FindNetworkByEntityIdRequest, FindNetworkByRecordIdRequest, FindPathByEntityIdRequest,
    FindPathByRecordIdRequest, GetActiveConfigIdRequest, GetEntityByEntityIdRequest,
    GetEntityByRecordIdRequest, GetRecordRequest, GetRedoRecordRequest, GetStatsRequest,
    GetVirtualEntityByRecordIdRequest, HowEntityByEntityIdRequest, PrimeEngineRequest,
    ProcessRedoRecordRequest, ReevaluateEntityRequest, ReevaluateRecordRequest,
    ReinitializeRequest, SearchByAttributesRequest, WhyEntitiesRequest,
    WhyRecordInEntityRequest, WhyRecordsRequest,
};
use crate::proto::SzEngineStub;
use crate::traits::SzEngine;
use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

/// gRPC adapter for [`SzEngine`].
#[derive(Debug)]
pub struct SzEngineClient {
    stub: SzEngineStub<Channel>,
    core: ClientCore,
}

impl SzEngineClient {
    pub fn new(channel: Channel, origin: &str) -> Self {
        Self {
            stub: SzEngineStub::new(channel),
            core: ClientCore::new(Component::Engine, origin),
        }
    }

    pub fn component(&self) -> Component {
        self.core.component()
    }
}

impl_observable!(SzEngineClient);

#[async_trait]
impl SzEngine for SzEngineClient {
    async fn add_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        record_definition: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = AddRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            record_definition: record_definition.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "add_record", stub.add_record(ctx.request(request)))
            .await?;
        self.core.notify(
            "add_record",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn close_export(&self, ctx: &Context, export_handle: i64) -> Result<(), Status> {
        let request = CloseExportRequest { export_handle };
        let mut stub = self.stub.clone();
        self.core
            .invoke(ctx, "close_export", stub.close_export(ctx.request(request)))
            .await?;
        self.core.notify("close_export", [("exportHandle", export_handle.to_string())]);
        Ok(())
    }

    async fn count_redo_records(&self, ctx: &Context) -> Result<i64, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "count_redo_records",
                stub.count_redo_records(ctx.request(CountRedoRecordsRequest {})),
            )
            .await?;
        self.core.notify("count_redo_records", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn delete_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = DeleteRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "delete_record", stub.delete_record(ctx.request(request)))
            .await?;
        self.core.notify(
            "delete_record",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn export_csv_entity_report(
        &self,
        ctx: &Context,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<i64, Status> {
        let request = ExportCsvEntityReportRequest {
            csv_column_list: csv_column_list.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "export_csv_entity_report",
                stub.export_csv_entity_report(ctx.request(request)),
            )
            .await?;
        self.core.notify("export_csv_entity_report", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn export_json_entity_report(&self, ctx: &Context, flags: i64) -> Result<i64, Status> {
        let request = ExportJsonEntityReportRequest { flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "export_json_entity_report",
                stub.export_json_entity_report(ctx.request(request)),
            )
            .await?;
        self.core.notify("export_json_entity_report", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn fetch_next(&self, ctx: &Context, export_handle: i64) -> Result<String, Status> {
        let request = FetchNextRequest { export_handle };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "fetch_next", stub.fetch_next(ctx.request(request)))
            .await?;
        self.core.notify("fetch_next", [("exportHandle", export_handle.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindInterestingEntitiesByEntityIdRequest { entity_id, flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_interesting_entities_by_entity_id",
                stub.find_interesting_entities_by_entity_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "find_interesting_entities_by_entity_id",
            [("entityId", entity_id.to_string())],
        );
        Ok(response.into_inner().result)
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindInterestingEntitiesByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_interesting_entities_by_record_id",
                stub.find_interesting_entities_by_record_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "find_interesting_entities_by_record_id",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn find_network_by_entity_id(
        &self,
        ctx: &Context,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindNetworkByEntityIdRequest {
            entity_ids: entity_ids.to_string(),
            max_degrees,
            build_out_degrees,
            build_out_max_entities,
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_network_by_entity_id",
                stub.find_network_by_entity_id(ctx.request(request)),
            )
            .await?;
        self.core.notify("find_network_by_entity_id", [("entityIds", entity_ids.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn find_network_by_record_id(
        &self,
        ctx: &Context,
        record_keys: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindNetworkByRecordIdRequest {
            record_keys: record_keys.to_string(),
            max_degrees,
            build_out_degrees,
            build_out_max_entities,
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_network_by_record_id",
                stub.find_network_by_record_id(ctx.request(request)),
            )
            .await?;
        self.core.notify("find_network_by_record_id", [("recordKeys", record_keys.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn find_path_by_entity_id(
        &self,
        ctx: &Context,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindPathByEntityIdRequest {
            start_entity_id,
            end_entity_id,
            max_degrees,
            avoid_entity_ids: avoid_entity_ids.to_string(),
            required_data_sources: required_data_sources.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_path_by_entity_id",
                stub.find_path_by_entity_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "find_path_by_entity_id",
            [
                ("startEntityId", start_entity_id.to_string()),
                ("endEntityId", end_entity_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn find_path_by_record_id(
        &self,
        ctx: &Context,
        start_data_source_code: &str,
        start_record_id: &str,
        end_data_source_code: &str,
        end_record_id: &str,
        max_degrees: i64,
        avoid_record_keys: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = FindPathByRecordIdRequest {
            start_data_source_code: start_data_source_code.to_string(),
            start_record_id: start_record_id.to_string(),
            end_data_source_code: end_data_source_code.to_string(),
            end_record_id: end_record_id.to_string(),
            max_degrees,
            avoid_record_keys: avoid_record_keys.to_string(),
            required_data_sources: required_data_sources.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "find_path_by_record_id",
                stub.find_path_by_record_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "find_path_by_record_id",
            [
                ("startDataSourceCode", start_data_source_code.to_string()),
                ("startRecordId", start_record_id.to_string()),
                ("endDataSourceCode", end_data_source_code.to_string()),
                ("endRecordId", end_record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn get_active_config_id(&self, ctx: &Context) -> Result<i64, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_active_config_id",
                stub.get_active_config_id(ctx.request(GetActiveConfigIdRequest {})),
            )
            .await?;
        self.core.notify("get_active_config_id", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_entity_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = GetEntityByEntityIdRequest { entity_id, flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_entity_by_entity_id",
                stub.get_entity_by_entity_id(ctx.request(request)),
            )
            .await?;
        self.core.notify("get_entity_by_entity_id", [("entityId", entity_id.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn get_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = GetEntityByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_entity_by_record_id",
                stub.get_entity_by_record_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "get_entity_by_record_id",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn get_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = GetRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "get_record", stub.get_record(ctx.request(request)))
            .await?;
        self.core.notify(
            "get_record",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn get_redo_record(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_redo_record",
                stub.get_redo_record(ctx.request(GetRedoRecordRequest {})),
            )
            .await?;
        self.core.notify("get_redo_record", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_stats(&self, ctx: &Context) -> Result<String, Status> {
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "get_stats", stub.get_stats(ctx.request(GetStatsRequest {})))
            .await?;
        self.core.notify("get_stats", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &Context,
        record_keys: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = GetVirtualEntityByRecordIdRequest {
            record_keys: record_keys.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "get_virtual_entity_by_record_id",
                stub.get_virtual_entity_by_record_id(ctx.request(request)),
            )
            .await?;
        self.core.notify(
            "get_virtual_entity_by_record_id",
            [("recordKeys", record_keys.to_string())],
        );
        Ok(response.into_inner().result)
    }

    async fn how_entity_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = HowEntityByEntityIdRequest { entity_id, flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(
                ctx,
                "how_entity_by_entity_id",
                stub.how_entity_by_entity_id(ctx.request(request)),
            )
            .await?;
        self.core.notify("how_entity_by_entity_id", [("entityId", entity_id.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn prime_engine(&self, ctx: &Context) -> Result<(), Status> {
        let mut stub = self.stub.clone();
        self.core
            .invoke(ctx, "prime_engine", stub.prime_engine(ctx.request(PrimeEngineRequest {})))
            .await?;
        self.core.notify("prime_engine", NO_DETAILS);
        Ok(())
    }

    async fn process_redo_record(
        &self,
        ctx: &Context,
        redo_record: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = ProcessRedoRecordRequest {
            redo_record: redo_record.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "process_redo_record", stub.process_redo_record(ctx.request(request)))
            .await?;
        self.core.notify("process_redo_record", NO_DETAILS);
        Ok(response.into_inner().result)
    }

    async fn reevaluate_entity(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = ReevaluateEntityRequest { entity_id, flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "reevaluate_entity", stub.reevaluate_entity(ctx.request(request)))
            .await?;
        self.core.notify("reevaluate_entity", [("entityId", entity_id.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn reevaluate_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = ReevaluateRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "reevaluate_record", stub.reevaluate_record(ctx.request(request)))
            .await?;
        self.core.notify(
            "reevaluate_record",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
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

    async fn search_by_attributes(
        &self,
        ctx: &Context,
        attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = SearchByAttributesRequest {
            attributes: attributes.to_string(),
            search_profile: search_profile.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "search_by_attributes", stub.search_by_attributes(ctx.request(request)))
            .await?;
        self.core.notify("search_by_attributes", [("searchProfile", search_profile.to_string())]);
        Ok(response.into_inner().result)
    }

    async fn why_entities(
        &self,
        ctx: &Context,
        entity_id_1: i64,
        entity_id_2: i64,
        flags: i64,
    ) -> Result<String, Status> {
        let request = WhyEntitiesRequest { entity_id_1, entity_id_2, flags };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "why_entities", stub.why_entities(ctx.request(request)))
            .await?;
        self.core.notify(
            "why_entities",
            [
                ("entityId1", entity_id_1.to_string()),
                ("entityId2", entity_id_2.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn why_record_in_entity(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = WhyRecordInEntityRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "why_record_in_entity", stub.why_record_in_entity(ctx.request(request)))
            .await?;
        self.core.notify(
            "why_record_in_entity",
            [
                ("dataSourceCode", data_source_code.to_string()),
                ("recordId", record_id.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }

    async fn why_records(
        &self,
        ctx: &Context,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> Result<String, Status> {
        let request = WhyRecordsRequest {
            data_source_code_1: data_source_code_1.to_string(),
            record_id_1: record_id_1.to_string(),
            data_source_code_2: data_source_code_2.to_string(),
            record_id_2: record_id_2.to_string(),
            flags,
        };
        let mut stub = self.stub.clone();
        let response = self
            .core
            .invoke(ctx, "why_records", stub.why_records(ctx.request(request)))
            .await?;
        self.core.notify(
            "why_records",
            [
                ("dataSourceCode1", data_source_code_1.to_string()),
                ("recordId1", record_id_1.to_string()),
                ("dataSourceCode2", data_source_code_2.to_string()),
                ("recordId2", record_id_2.to_string()),
            ],
        );
        Ok(response.into_inner().result)
    }
}
