use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::{screen_max_grid_scroll, ui};

use super::channels::Channels;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Terminal events may change page or filters, which issues a new request
/// - Fetch results settle the lifecycle only when they belong to the latest request
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.fetch_req_tx)
        }
        Some(result) = channels.fetch_res_rx.recv() => {
            app.apply_fetch_result(result);
            false
        }
        else => {
            tracing::warn!("[Runtime] all channels closed; leaving event loop");
            true
        }
    }
}

/// What: Run the main event loop, rendering and handling messages until exit.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            match t.draw(|f| ui(f, app)) {
                Ok(frame) => {
                    let max = screen_max_grid_scroll(frame.area, app.records().len());
                    app.set_grid_max_scroll(max);
                }
                Err(e) => tracing::warn!(error = %e, "[Runtime] failed to draw frame"),
            }
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
