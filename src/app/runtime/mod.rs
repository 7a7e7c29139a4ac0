use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::send_query;
use crate::sources::{CatalogClient, CatalogSource, ResponseCache};
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod event_loop;
pub mod workers;

pub use channels::Channels;

use background::spawn_event_thread;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the catalog TUI end-to-end: build the client, initialize the terminal,
/// spawn the fetch worker and event thread, drive the event loop, and restore the terminal.
///
/// Inputs:
/// - `settings`: Resolved settings (defaults, `settings.toml`, then CLI flags)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Headless mode (`CHARBROWSE_TEST_HEADLESS=1`) skips terminal setup, the event
///   thread, and the initial request so smoke tests stay offline.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("CHARBROWSE_TEST_HEADLESS").ok().as_deref() == Some("1");

    let client = CatalogClient::new(
        settings.endpoint.clone(),
        Duration::from_secs(settings.request_timeout_secs),
        ResponseCache::new(settings.cache_capacity),
    )?;
    tracing::info!(
        endpoint = client.endpoint(),
        cache_capacity = settings.cache_capacity,
        "catalog client ready"
    );
    let source: Arc<dyn CatalogSource> = Arc::new(client);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState::new(&settings);
    let mut channels = Channels::new(source);

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    if !headless {
        send_query(&mut app, &channels.fetch_req_tx);
    }

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    channels.fetch_worker.abort();

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
