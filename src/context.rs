// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-call cancellation and deadline propagation.
//!
//! Every capability method takes a `&Context`. The context never changes what
//! is sent; it only bounds how long the caller is willing to wait. A deadline
//! travels to the server as the gRPC timeout header and is also enforced
//! locally, and cancelling the token fails the in-flight call immediately
//! with `Status::cancelled`.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tonic::{Request, Status};

pub const CANCELLED_MESSAGE: &str = "context canceled";
pub const DEADLINE_EXCEEDED_MESSAGE: &str = "context deadline exceeded";

#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl Context {
    /// A context with no deadline that is only cancelled explicitly.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context expiring after `timeout`. A timeout too large to represent means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::background(),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: CancellationToken::new(),
        }
    }

    /// Bind an existing cancellation token, e.g. one shared with a shutdown path.
    pub fn with_cancellation(cancel: CancellationToken) -> Self {
        Self {
            deadline: None,
            cancel,
        }
    }

    /// Derive a context cancelled with this one, optionally with a tighter deadline.
    pub fn child(&self, timeout: Option<Duration>) -> Self {
        let requested = timeout.and_then(|t| Instant::now().checked_add(t));
        let deadline = match (self.deadline, requested) {
            (Some(parent), Some(child)) => Some(parent.min(child)),
            (parent, child) => parent.or(child),
        };
        Self {
            deadline,
            cancel: self.cancel.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Wrap a message in a `tonic::Request` carrying the remaining deadline.
    pub fn request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(remaining) = self.remaining() {
            request.set_timeout(remaining);
        }
        request
    }

    /// Drive `call` to completion unless the context is cancelled or expires first.
    pub async fn run<T, F>(&self, call: F) -> Result<T, Status>
    where
        F: Future<Output = Result<T, Status>>,
    {
        if self.is_cancelled() {
            return Err(Status::cancelled(CANCELLED_MESSAGE));
        }
        if self.remaining() == Some(Duration::ZERO) {
            return Err(Status::deadline_exceeded(DEADLINE_EXCEEDED_MESSAGE));
        }

        let expiry = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Status::cancelled(CANCELLED_MESSAGE)),
            _ = expiry => Err(Status::deadline_exceeded(DEADLINE_EXCEEDED_MESSAGE)),
            result = call => result,
        }
    }
}
