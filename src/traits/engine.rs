// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::context::Context;
use async_trait::async_trait;
use tonic::Status;

/// Record ingestion, entity resolution and query operations.
///
/// Every `flags` argument is a bitmask from [`crate::flags`], passed through
/// verbatim. JSON arguments (`record_definition`, `attributes`, `entity_ids`,
/// `record_keys`, ...) are opaque strings; the server parses them.
#[async_trait]
pub trait SzEngine: Send + Sync {
    async fn add_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        record_definition: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn close_export(&self, ctx: &Context, export_handle: i64) -> Result<(), Status>;

    async fn count_redo_records(&self, ctx: &Context) -> Result<i64, Status>;

    async fn delete_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    /// Start a CSV export; returns the export handle to pass to `fetch_next`.
    async fn export_csv_entity_report(
        &self,
        ctx: &Context,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<i64, Status>;

    /// Start a JSON-lines export; returns the export handle to pass to `fetch_next`.
    async fn export_json_entity_report(&self, ctx: &Context, flags: i64) -> Result<i64, Status>;

    /// Next chunk of an export; empty once the export is drained.
    async fn fetch_next(&self, ctx: &Context, export_handle: i64) -> Result<String, Status>;

    async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn find_network_by_entity_id(
        &self,
        ctx: &Context,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn find_network_by_record_id(
        &self,
        ctx: &Context,
        record_keys: &str,
        max_degrees: i64,
        build_out_degrees: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> Result<String, Status>;

    #[allow(clippy::too_many_arguments)]
    async fn find_path_by_entity_id(
        &self,
        ctx: &Context,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> Result<String, Status>;

    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<String, Status>;

    async fn get_active_config_id(&self, ctx: &Context) -> Result<i64, Status>;

    async fn get_entity_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn get_entity_by_record_id(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn get_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn get_redo_record(&self, ctx: &Context) -> Result<String, Status>;

    async fn get_stats(&self, ctx: &Context) -> Result<String, Status>;

    async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &Context,
        record_keys: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn how_entity_by_entity_id(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn prime_engine(&self, ctx: &Context) -> Result<(), Status>;

    async fn process_redo_record(
        &self,
        ctx: &Context,
        redo_record: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn reevaluate_entity(
        &self,
        ctx: &Context,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn reevaluate_record(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn reinitialize(&self, ctx: &Context, config_id: i64) -> Result<(), Status>;

    async fn search_by_attributes(
        &self,
        ctx: &Context,
        attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn why_entities(
        &self,
        ctx: &Context,
        entity_id_1: i64,
        entity_id_2: i64,
        flags: i64,
    ) -> Result<String, Status>;

    async fn why_record_in_entity(
        &self,
        ctx: &Context,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, Status>;

    async fn why_records(
        &self,
        ctx: &Context,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> Result<String, Status>;
}
