// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory stand-in for the remote engine (test-only).
//!
//! `FakeSzServer` serves all five gRPC services from a tonic server bound to
//! `127.0.0.1:0`. It records every request it receives, can be told to fail
//! or stall specific methods, and counts accepted TCP connections. Its state
//! is real enough that the sequential configuration flow and the
//! compare-and-swap of the default config id run against it.

mod config;
mod state;
mod system;

pub use state::{DEFAULT_DATA_SOURCES, FAKE_LICENSE, FAKE_VERSION};

use crate::clients::ClientFactory;
use crate::config::ClientConfig;
use crate::proto::szconfig::sz_config_server::SzConfigServer;
use crate::proto::szconfigmanager::sz_config_manager_server::SzConfigManagerServer;
use crate::proto::szdiagnostic::sz_diagnostic_server::SzDiagnosticServer;
use crate::proto::szengine::sz_engine_server::SzEngineServer;
use crate::proto::szproduct::sz_product_server::SzProductServer;
use state::{FakeState, RecordedCall};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_stream::StreamExt;
use tonic::transport::Server;
use tonic::{Request, Status};

/// Shared handle to the fake's state; cloned into every service.
#[derive(Clone, Default)]
pub struct FakeService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeService {
    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the request, apply any injected delay or failure, and unwrap the message.
    async fn begin<T>(&self, method: &'static str, request: Request<T>) -> Result<T, Status>
    where
        T: Clone + Send + Sync + 'static,
    {
        let timeout = request
            .metadata()
            .get("grpc-timeout")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let message = request.into_inner();

        let (delay, failure) = {
            let mut state = self.lock();
            state.calls.push(RecordedCall {
                method,
                message: Box::new(message.clone()),
                timeout,
            });
            (state.delays.get(method).copied(), state.failure_for(method))
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(status) => Err(status),
            None => Ok(message),
        }
    }
}

pub struct FakeSzServer {
    service: FakeService,
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl FakeSzServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let connections = Arc::new(AtomicUsize::new(0));
        let counter = connections.clone();
        let incoming = TcpListenerStream::new(listener).map(move |conn| {
            if conn.is_ok() {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            conn
        });

        let service = FakeService::default();
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let router = Server::builder()
            .add_service(SzConfigServer::new(service.clone()))
            .add_service(SzConfigManagerServer::new(service.clone()))
            .add_service(SzDiagnosticServer::new(service.clone()))
            .add_service(SzEngineServer::new(service.clone()))
            .add_service(SzProductServer::new(service.clone()));
        tokio::spawn(async move {
            let _ = router
                .serve_with_incoming_shutdown(incoming, async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            service,
            addr,
            connections,
            shutdown: Some(shutdown),
        }
    }

    /// Bare `host:port`, as a user would configure it.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.addr.port())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            observer_origin: Some("fake-server-test".to_string()),
            ..ClientConfig::new(self.address())
        }
    }

    pub async fn factory(&self) -> ClientFactory {
        ClientFactory::connect(&self.client_config()).await.unwrap()
    }

    /// TCP connections accepted so far.
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn fail(&self, method: &'static str, status: Status) {
        self.service.lock().failures.insert(method, status);
    }

    pub fn fail_all(&self, status: Status) {
        self.service.lock().fail_all = Some(status);
    }

    pub fn delay(&self, method: &'static str, delay: Duration) {
        self.service.lock().delays.insert(method, delay);
    }

    /// The last request received for `method`, downcast to its message type.
    pub fn last_request<T: Clone + 'static>(&self, method: &str) -> Option<T> {
        self.service
            .lock()
            .calls
            .iter()
            .rev()
            .find(|call| call.method == method)
            .and_then(|call| call.message.downcast_ref::<T>())
            .cloned()
    }

    /// The `grpc-timeout` header of the last request for `method`.
    pub fn last_timeout(&self, method: &str) -> Option<String> {
        self.service
            .lock()
            .calls
            .iter()
            .rev()
            .find(|call| call.method == method)
            .and_then(|call| call.timeout.clone())
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.service
            .lock()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    pub fn default_config_id(&self) -> i64 {
        self.service.lock().default_config_id
    }

    pub fn record_count(&self) -> usize {
        self.service.lock().records.len()
    }
}

impl Drop for FakeSzServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
