use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::CatalogSource;
use crate::state::{FetchRequest, FetchResult};

/// A request currently being executed.
struct InFlight {
    /// Identifier of the request.
    id: u64,
    /// Set when the request is superseded; the task checks it before reporting.
    cancelled: Arc<AtomicBool>,
    /// Task executing the request.
    handle: JoinHandle<()>,
}

impl InFlight {
    /// Cancel the request: flag it and abort its task.
    fn cancel(self) {
        if !self.handle.is_finished() {
            tracing::debug!(id = self.id, "cancelling superseded request");
        }
        self.cancelled.store(true, Ordering::Release);
        self.handle.abort();
    }
}

/// What: Start executing one request on its own task.
///
/// Details:
/// - The result is sent only if the request was not cancelled meanwhile.
fn start_request(
    req: FetchRequest,
    source: &Arc<dyn CatalogSource>,
    res_tx: &mpsc::UnboundedSender<FetchResult>,
) -> InFlight {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    let source = Arc::clone(source);
    let tx = res_tx.clone();
    let id = req.id;
    let handle = tokio::spawn(async move {
        let outcome = source
            .fetch_page(&req.vars)
            .await
            .map_err(|e| e.to_string());
        if flag.load(Ordering::Acquire) {
            tracing::debug!(id, "request finished after cancellation; discarding");
            return;
        }
        let _ = tx.send(FetchResult { id, outcome });
    });
    InFlight {
        id,
        cancelled,
        handle,
    }
}

/// What: Spawn the background worker that executes catalog requests.
///
/// Inputs:
/// - `req_rx`: Requests from the event loop
/// - `res_tx`: Channel for results
/// - `source`: Catalog source (the HTTP client in production)
///
/// Output:
/// - Handle of the worker task; it ends when `req_rx` closes.
///
/// Details:
/// - At most one request is in flight: a new request cancels the previous one.
/// - Requests already queued behind a newer one are skipped without being sent.
/// - No retry; a failed request is reported once.
pub fn spawn_fetch_worker(
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    res_tx: mpsc::UnboundedSender<FetchResult>,
    source: Arc<dyn CatalogSource>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight: Option<InFlight> = None;
        while let Some(mut req) = req_rx.recv().await {
            while let Ok(newer) = req_rx.try_recv() {
                tracing::debug!(skipped = req.id, "request superseded before dispatch");
                req = newer;
            }
            if let Some(prev) = in_flight.take() {
                prev.cancel();
            }
            in_flight = Some(start_request(req, &source, &res_tx));
        }
        if let Some(prev) = in_flight.take() {
            prev.cancel();
        }
        tracing::debug!("fetch worker stopped");
    })
}
