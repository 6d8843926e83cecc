// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

const PROTOS: [&str; 5] = [
    "szconfig.proto",
    "szconfigmanager.proto",
    "szdiagnostic.proto",
    "szengine.proto",
    "szproduct.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_root = "proto";

    // Vendored protoc keeps builds independent of a system installation.
    let protoc_path = protoc_bin_vendored::protoc_bin_path()
        .map_err(|e| format!("failed to locate vendored protoc: {e}"))?;
    std::env::set_var("PROTOC", protoc_path);

    let files: Vec<String> = PROTOS
        .iter()
        .map(|name| format!("{proto_root}/{name}"))
        .collect();

    // Server stubs back the in-memory fake used by the test suite.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&files, &[proto_root])?;

    for file in &files {
        println!("cargo:rerun-if-changed={file}");
    }
    Ok(())
}
