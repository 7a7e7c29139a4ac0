use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest};

/// What: Issue a request for the current page and filters with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; allocates the id and marks the lifecycle pending
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - Sends a `FetchRequest` carrying the current `QueryVariables`.
///
/// Details:
/// - The id allows correlating responses so the UI can discard stale results.
/// - Sort key and language are not part of the request.
pub fn send_query(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let id = app.begin_request();
    let vars = app.query_variables();
    tracing::debug!(id, page = vars.page, "dispatching fetch request");
    if fetch_tx.send(FetchRequest { id, vars }).is_err() {
        tracing::warn!(id, "fetch worker is gone; request dropped");
    }
}

/// What: Send a request only when page or filters changed since the last one.
///
/// Output:
/// - `true` when a request was sent.
pub fn send_query_if_dirty(
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    if !app.params_dirty {
        return false;
    }
    send_query(app, fetch_tx);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FetchState;

    #[tokio::test]
    /// What: Ensure `send_query` increments identifiers and forwards the current parameters.
    ///
    /// Inputs:
    /// - `AppState` with status "Alive" and species "Human" on page 1.
    ///
    /// Output:
    /// - The channel receives `{page: 1, status: "Alive", species: "Human"}` with the latest id.
    async fn send_query_increments_and_sends() {
        let mut app = AppState {
            status_filter: "Alive".into(),
            species_filter: "Human".into(),
            ..Default::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_query(&mut app, &tx);
        assert_eq!(app.latest_request_id, 1);
        assert!(matches!(app.fetch, FetchState::Pending { id: 1 }));
        let req = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("request sent");
        assert_eq!(req.id, 1);
        assert_eq!(req.vars.page, 1);
        assert_eq!(req.vars.status, "Alive");
        assert_eq!(req.vars.species, "Human");
    }

    #[test]
    /// What: Sort and language changes never produce a request.
    fn only_parameter_changes_send() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(send_query_if_dirty(&mut app, &tx));
        assert!(rx.try_recv().is_ok());

        app.toggle_sort_key();
        app.toggle_language();
        assert!(!send_query_if_dirty(&mut app, &tx));
        assert!(rx.try_recv().is_err());

        app.set_species_filter("Alien");
        assert!(send_query_if_dirty(&mut app, &tx));
        assert_eq!(rx.try_recv().map(|r| r.vars.species).ok().as_deref(), Some("Alien"));
    }
}
