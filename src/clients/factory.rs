// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::clients::base::parse_log_level;
use crate::clients::{
    SzConfigClient, SzConfigManagerClient, SzDiagnosticClient, SzEngineClient, SzProductClient,
};
use crate::config::ClientConfig;
use crate::errors::SzError;
use crate::observability::messages::client::ConnectionEstablished;
use crate::observability::messages::StructuredLog;
use tonic::transport::{Channel, Endpoint};

/// Owns the one gRPC channel that every capability client shares.
///
/// Build it once, then hand out clients. Each client holds a clone of the
/// channel, and clones multiplex over the same HTTP/2 connection, so clients
/// of different capabilities never re-dial. The connection is released when
/// the factory and every client created from it have been dropped.
///
/// # Example
/// ```no_run
/// use sz_grpc::clients::ClientFactory;
/// use sz_grpc::config::ClientConfig;
/// use sz_grpc::context::Context;
/// use sz_grpc::traits::SzProduct;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let factory = ClientFactory::connect(&ClientConfig::new("localhost:8261")).await?;
/// let product = factory.create_product_client();
/// println!("{}", product.get_version(&Context::background()).await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientFactory {
    channel: Channel,
    target: String,
    origin: String,
    log_level: Option<tracing::Level>,
}

impl ClientFactory {
    /// Dial the configured server and wait for the connection.
    pub async fn connect(config: &ClientConfig) -> Result<Self, SzError> {
        let log_level = Self::initial_log_level(config)?;
        let target = config.endpoint_url();
        let channel = Self::endpoint(config, &target)?
            .connect()
            .await
            .map_err(|source| SzError::Connect {
                url: target.clone(),
                source,
            })?;

        ConnectionEstablished {
            target: &target,
            lazy: false,
        }
        .log();
        Ok(Self::from_parts(channel, target, config, log_level))
    }

    /// Prepare a channel that dials on first use.
    pub fn lazy(config: &ClientConfig) -> Result<Self, SzError> {
        let log_level = Self::initial_log_level(config)?;
        let target = config.endpoint_url();
        let channel = Self::endpoint(config, &target)?.connect_lazy();

        ConnectionEstablished {
            target: &target,
            lazy: true,
        }
        .log();
        Ok(Self::from_parts(channel, target, config, log_level))
    }

    fn from_parts(
        channel: Channel,
        target: String,
        config: &ClientConfig,
        log_level: Option<tracing::Level>,
    ) -> Self {
        Self {
            channel,
            target,
            origin: config.origin().to_string(),
            log_level,
        }
    }

    fn initial_log_level(config: &ClientConfig) -> Result<Option<tracing::Level>, SzError> {
        config.log_level.as_deref().map(parse_log_level).transpose()
    }

    fn endpoint(config: &ClientConfig, target: &str) -> Result<Endpoint, SzError> {
        let endpoint =
            Endpoint::from_shared(target.to_string()).map_err(|source| SzError::InvalidEndpoint {
                url: target.to_string(),
                source,
            })?;
        Ok(match config.connect_timeout() {
            Some(timeout) => endpoint.connect_timeout(timeout),
            None => endpoint,
        })
    }

    /// The URL the shared channel is bound to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Observer origin handed to every client created from here.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// A handle to the shared channel.
    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }

    pub fn create_config_client(&self) -> SzConfigClient {
        let client = SzConfigClient::new(self.channel(), &self.origin);
        if let Some(level) = self.log_level {
            client.apply_log_level(level);
        }
        client
    }

    pub fn create_config_manager_client(&self) -> SzConfigManagerClient {
        let client = SzConfigManagerClient::new(self.channel(), &self.origin);
        if let Some(level) = self.log_level {
            client.apply_log_level(level);
        }
        client
    }

    pub fn create_diagnostic_client(&self) -> SzDiagnosticClient {
        let client = SzDiagnosticClient::new(self.channel(), &self.origin);
        if let Some(level) = self.log_level {
            client.apply_log_level(level);
        }
        client
    }

    pub fn create_engine_client(&self) -> SzEngineClient {
        let client = SzEngineClient::new(self.channel(), &self.origin);
        if let Some(level) = self.log_level {
            client.apply_log_level(level);
        }
        client
    }

    pub fn create_product_client(&self) -> SzProductClient {
        let client = SzProductClient::new(self.channel(), &self.origin);
        if let Some(level) = self.log_level {
            client.apply_log_level(level);
        }
        client
    }
}
