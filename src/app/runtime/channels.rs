use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::CatalogSource;
use crate::state::{FetchRequest, FetchResult};

use super::workers::fetch::spawn_fetch_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the channel senders and receivers used between the main event loop,
///   the terminal event thread, and the fetch worker
pub struct Channels {
    /// Sender handed to the terminal event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests for the fetch worker.
    pub fetch_req_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Results produced by the fetch worker.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchResult>,
    /// Handle of the fetch worker task.
    pub fetch_worker: JoinHandle<()>,
}

impl Channels {
    /// What: Create all channels and spawn the fetch worker.
    ///
    /// Inputs:
    /// - `source`: Catalog source the worker fetches from
    ///
    /// Output:
    /// - `Channels` with every sender and receiver initialized
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel();
        let fetch_worker = spawn_fetch_worker(fetch_req_rx, fetch_res_tx, source);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_req_tx,
            fetch_res_rx,
            fetch_worker,
        }
    }
}
