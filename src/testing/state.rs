// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory server state behind the fake services.

use serde_json::{json, Value};
use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Duration;
use tonic::Status;

pub const FAKE_LICENSE: &str = r#"{"customer":"Fake Customer","licenseType":"EVAL","recordLimit":500}"#;
pub const FAKE_VERSION: &str = r#"{"PRODUCT_NAME":"Fake Entity Resolution","VERSION":"0.0.0"}"#;
pub const DEFAULT_DATA_SOURCES: [&str; 2] = ["TEST", "SEARCH"];
const FIRST_CONFIG_ID: i64 = 1001;

/// One request as the server received it.
pub struct RecordedCall {
    pub method: &'static str,
    pub message: Box<dyn Any + Send + Sync>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoredConfig {
    pub definition: String,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub entity_id: i64,
    pub definition: Value,
}

#[derive(Default)]
pub struct FakeState {
    pub calls: Vec<RecordedCall>,
    pub failures: HashMap<&'static str, Status>,
    pub fail_all: Option<Status>,
    pub delays: HashMap<&'static str, Duration>,
    pub config_handles: HashMap<i64, Vec<String>>,
    pub configs: BTreeMap<i64, StoredConfig>,
    pub default_config_id: i64,
    pub active_config_id: i64,
    pub records: BTreeMap<(String, String), StoredRecord>,
    pub exports: HashMap<i64, VecDeque<String>>,
    next_handle: i64,
    next_entity_id: i64,
}

impl FakeState {
    pub fn next_handle(&mut self) -> i64 {
        self.next_handle += 1;
        self.next_handle
    }

    pub fn next_entity_id(&mut self) -> i64 {
        self.next_entity_id += 1;
        self.next_entity_id
    }

    pub fn next_config_id(&self) -> i64 {
        self.configs
            .keys()
            .next_back()
            .map_or(FIRST_CONFIG_ID, |id| id + 1)
    }

    /// The failure injected for `method`, if any.
    pub fn failure_for(&self, method: &str) -> Option<Status> {
        self.fail_all
            .clone()
            .or_else(|| self.failures.get(method).cloned())
    }

    pub fn handle_mut(&mut self, config_handle: i64) -> Result<&mut Vec<String>, Status> {
        self.config_handles
            .get_mut(&config_handle)
            .ok_or_else(|| Status::not_found(format!("Unknown config handle {config_handle}")))
    }

    /// Data sources of the configuration the engine is running with.
    pub fn active_data_sources(&self) -> Result<Vec<String>, Status> {
        let config_id = if self.active_config_id != 0 {
            self.active_config_id
        } else {
            self.default_config_id
        };
        let stored = self
            .configs
            .get(&config_id)
            .ok_or_else(|| Status::failed_precondition("No active configuration"))?;
        parse_data_sources(&stored.definition)
    }

    pub fn entity_records(&self, entity_id: i64) -> Vec<(&(String, String), &StoredRecord)> {
        self.records
            .iter()
            .filter(|(_, record)| record.entity_id == entity_id)
            .collect()
    }
}

pub fn render_config(data_sources: &[String]) -> String {
    let sources: Vec<Value> = data_sources
        .iter()
        .enumerate()
        .map(|(i, code)| json!({ "DSRC_ID": i + 1, "DSRC_CODE": code }))
        .collect();
    json!({ "G2_CONFIG": { "CFG_DSRC": sources } }).to_string()
}

pub fn parse_data_sources(definition: &str) -> Result<Vec<String>, Status> {
    let value: Value = serde_json::from_str(definition)
        .map_err(|e| Status::invalid_argument(format!("Invalid configuration JSON: {e}")))?;
    let sources = value
        .pointer("/G2_CONFIG/CFG_DSRC")
        .and_then(Value::as_array)
        .ok_or_else(|| Status::invalid_argument("Configuration has no CFG_DSRC section"))?;
    Ok(sources
        .iter()
        .filter_map(|source| source.get("DSRC_CODE").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}

pub fn render_data_sources(data_sources: &[String]) -> String {
    let sources: Vec<Value> = data_sources
        .iter()
        .enumerate()
        .map(|(i, code)| json!({ "DSRC_ID": i + 1, "DSRC_CODE": code }))
        .collect();
    json!({ "DATA_SOURCES": sources }).to_string()
}
