//! Fetch Worker Thread
//!
//! Runs stats lookups in a background thread so the UI keeps drawing while a
//! request is in flight. Receives requests via channel, awaits the HTTP call
//! on a single-threaded tokio runtime, and sends each result back.
//!
//! Awaiting the network is the only suspension point. Requests are handled
//! one at a time in arrival order; there is no cancellation or timeout.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::FetchError;
use super::client::StatsClient;
use crate::stats::StatsRecord;

/// A lookup request from the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: u64,
    pub username: String,
}

/// The outcome of one lookup
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub request_id: u64,
    pub username: String,
    pub result: Result<StatsRecord, FetchError>,
}

/// Spawn the fetch worker thread
///
/// The thread exits when the request channel is closed. A panic inside the
/// worker is logged and drops the response sender, which the UI observes as
/// a disconnect.
pub fn spawn_worker(
    client: StatsClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Fetch worker thread panicked: {}", panic_msg);
        }
    });
}

/// Process requests until the channel is closed
///
/// Blocking `recv()` is fine here since this runs on a dedicated thread.
async fn worker_loop(
    client: StatsClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            // UI thread went away
            break;
        }
    }
}

async fn handle_request(client: &StatsClient, request: FetchRequest) -> FetchResponse {
    let result = client.fetch(&request.username).await;

    if let Err(ref e) = result {
        log::debug!("Fetch {} for {} failed: {}", request.request_id, request.username, e);
    }

    FetchResponse {
        request_id: request.request_id,
        username: request.username,
        result,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
