// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Generated protobuf and gRPC stubs, one module per remote service.

pub mod szconfig {
    tonic::include_proto!("szconfig");
}

pub mod szconfigmanager {
    tonic::include_proto!("szconfigmanager");
}

pub mod szdiagnostic {
    tonic::include_proto!("szdiagnostic");
}

pub mod szengine {
    tonic::include_proto!("szengine");
}

pub mod szproduct {
    tonic::include_proto!("szproduct");
}

// Re-export the client stubs for easier access
pub use szconfig::sz_config_client::SzConfigClient as SzConfigStub;
pub use szconfigmanager::sz_config_manager_client::SzConfigManagerClient as SzConfigManagerStub;
pub use szdiagnostic::sz_diagnostic_client::SzDiagnosticClient as SzDiagnosticStub;
pub use szengine::sz_engine_client::SzEngineClient as SzEngineStub;
pub use szproduct::sz_product_client::SzProductClient as SzProductStub;
