// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context as _;
use serde_json::json;
use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};
use sz_grpc::clients::ClientFactory;
use sz_grpc::config::{load_config, ClientConfig};
use sz_grpc::context::Context;
use sz_grpc::flags::SZ_WITH_INFO;
use sz_grpc::observer::{NullObserver, Observer};
use sz_grpc::traits::{
    Observable, SzConfig, SzConfigManager, SzDiagnostic, SzEngine, SzProduct,
};
use tracing_subscriber::EnvFilter;

const DEMO_DATA_SOURCE: &str = "CUSTOMERS";
const DEMO_RECORD_ID: &str = "1001";
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!("Usage: {} [client-config.yaml|client-config.toml]", args[0]);
        eprintln!("Without a config file, SZ_GRPC_URL, SZ_LOG_LEVEL and SZ_OBSERVER_ORIGIN are read from the environment.");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_config(path)?,
        None => ClientConfig::from_env(),
    };

    println!("🔌 Connecting to {}", config.endpoint_url());
    let factory = ClientFactory::connect(&config).await?;

    let observers: Vec<Arc<dyn Observer>> = vec![
        Arc::new(NullObserver::new("observer-1")),
        Arc::new(NullObserver::new("observer-2")),
    ];

    let sz_config = factory.create_config_client();
    let sz_config_manager = factory.create_config_manager_client();
    let sz_diagnostic = factory.create_diagnostic_client();
    let sz_engine = factory.create_engine_client();
    let sz_product = factory.create_product_client();

    let observables: [&dyn Observable; 5] = [
        &sz_config,
        &sz_config_manager,
        &sz_diagnostic,
        &sz_engine,
        &sz_product,
    ];
    for client in observables {
        for observer in &observers {
            client.register_observer(observer.clone());
        }
    }

    let started = Instant::now();
    let ctx = Context::with_timeout(CALL_TIMEOUT);

    // Build a configuration with one extra data source and make it the default
    let config_handle = sz_config.create_config(&ctx).await.context("create_config")?;
    sz_config
        .add_data_source(&ctx, config_handle, DEMO_DATA_SOURCE)
        .await
        .context("add_data_source")?;
    let config_definition = sz_config
        .export_config(&ctx, config_handle)
        .await
        .context("export_config")?;
    sz_config
        .close_config(&ctx, config_handle)
        .await
        .context("close_config")?;

    let config_id = sz_config_manager
        .add_config(&ctx, &config_definition, "Added CUSTOMERS data source")
        .await
        .context("add_config")?;
    sz_config_manager
        .set_default_config_id(&ctx, config_id)
        .await
        .context("set_default_config_id")?;
    println!("🧩 Default configuration: {}", config_id);

    // Ingest one record under the new configuration
    sz_engine
        .reinitialize(&ctx, config_id)
        .await
        .context("reinitialize")?;
    let record_definition = json!({
        "RECORD_TYPE": "PERSON",
        "PRIMARY_NAME_FULL": "Robert Smith",
        "DATE_OF_BIRTH": "1985-02-11",
        "ADDR_FULL": "123 Main Street, Las Vegas NV 89132",
    })
    .to_string();
    let info = sz_engine
        .add_record(
            &ctx,
            DEMO_DATA_SOURCE,
            DEMO_RECORD_ID,
            &record_definition,
            SZ_WITH_INFO,
        )
        .await
        .context("add_record")?;
    println!("📥 Added record {}:{}", DEMO_DATA_SOURCE, DEMO_RECORD_ID);
    println!("   {}", info);

    let datastore_info = sz_diagnostic
        .get_datastore_info(&ctx)
        .await
        .context("get_datastore_info")?;
    println!("\n🗄️  Datastore: {}", datastore_info);

    let license = sz_product.get_license(&ctx).await.context("get_license")?;
    let version = sz_product.get_version(&ctx).await.context("get_version")?;
    println!("📜 License: {}", license);
    println!("🏷️  Version: {}", version);

    println!("\n🎉 Demo complete in {:?}", started.elapsed());
    Ok(())
}
