#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Points the runtime at a local listener nobody else uses.
// - Runs with CHARBROWSE_TEST_HEADLESS=1 to bypass raw TTY setup and the initial request.
// - Asserts the task does not panic and that no connection reached the listener.

use std::io::ErrorKind;
use std::net::TcpListener;
use std::time::Duration;

use charbrowse::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn headless_runtime_starts_without_touching_the_network() {
    unsafe {
        std::env::set_var("CHARBROWSE_TEST_HEADLESS", "1");
    }

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    listener
        .set_nonblocking(true)
        .expect("non-blocking listener");
    let addr = listener.local_addr().expect("listener address");
    let settings = Settings {
        endpoint: format!("http://{addr}/graphql"),
        request_timeout_secs: 1,
        ..Settings::default()
    };

    let handle = tokio::spawn(async move { charbrowse::app::run(settings).await });
    tokio::time::sleep(Duration::from_millis(150)).await;

    match listener.accept() {
        Err(e) => assert_eq!(e.kind(), ErrorKind::WouldBlock),
        Ok((_, peer)) => panic!("headless runtime sent a request from {peer}"),
    }

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
        return;
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
