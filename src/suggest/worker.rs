//! Suggestion Worker Thread
//!
//! Runs geocoder lookups off the UI thread. Requests arrive on a tokio
//! channel and each one is spawned as its own task on a current-thread
//! runtime, so a slow lookup never holds up a newer one. Responses go back
//! over a std channel that the UI drains on every tick; ordering between
//! responses is not guaranteed.

use std::future::Future;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::FieldId;
use crate::geocode::{GeocodeClient, PlaceSuggestion};

/// Something that can turn free text into place suggestions
///
/// Implementations must not fail: errors are reported as an empty list.
pub trait PlaceLookup: Send + Sync + 'static {
    fn lookup(&self, text: &str) -> impl Future<Output = Vec<PlaceSuggestion>> + Send;
}

impl PlaceLookup for GeocodeClient {
    async fn lookup(&self, text: &str) -> Vec<PlaceSuggestion> {
        GeocodeClient::lookup(self, text).await
    }
}

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub field: FieldId,
    /// Id stamped by the field's suggester, echoed back in the response
    pub request_id: u64,
    pub query: String,
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub field: FieldId,
    pub request_id: u64,
    pub suggestions: Vec<PlaceSuggestion>,
}

/// Handle to the background lookup thread
///
/// Dropping the handle stops the worker; lookups still in flight are
/// abandoned.
pub struct SuggestWorker {
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    shutdown: CancellationToken,
}

impl SuggestWorker {
    /// Spawn the worker thread around `lookup`
    pub fn spawn<L: PlaceLookup>(lookup: L) -> io::Result<Self> {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let shutdown = CancellationToken::new();
        let worker_shutdown = shutdown.clone();

        std::thread::Builder::new()
            .name("suggest-worker".to_string())
            .spawn(move || worker_loop(lookup, request_rx, response_tx, worker_shutdown))?;

        Ok(Self {
            request_tx,
            response_rx,
            shutdown,
        })
    }

    /// Queue a lookup; returns false if the worker is gone
    pub fn submit(&self, request: LookupRequest) -> bool {
        if self.request_tx.send(request).is_err() {
            log::warn!("Suggestion worker is not running; lookup dropped");
            return false;
        }
        true
    }

    /// Take every response that has arrived so far
    pub fn drain_responses(&self) -> Vec<LookupResponse> {
        let mut responses = Vec::new();
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        responses
    }
}

impl Drop for SuggestWorker {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Main worker loop - runs until shutdown or until the request channel closes
fn worker_loop<L: PlaceLookup>(
    lookup: L,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    shutdown: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start suggestion runtime: {}", e);
            return;
        }
    };

    let lookup = Arc::new(lookup);

    runtime.block_on(async move {
        loop {
            let request = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                request = request_rx.recv() => match request {
                    Some(request) => request,
                    None => break,
                },
            };

            log::debug!(
                "Looking up {:?} for {:?} (request {})",
                request.query,
                request.field,
                request.request_id
            );

            let lookup = Arc::clone(&lookup);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let suggestions = lookup.lookup(&request.query).await;
                let _ = response_tx.send(LookupResponse {
                    field: request.field,
                    request_id: request.request_id,
                    suggestions,
                });
            });
        }
    });

    log::debug!("Suggestion worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
