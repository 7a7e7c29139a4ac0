//! charbrowse binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use charbrowse::args::{self, Args};
use charbrowse::{app, theme};

/// Log timestamps in local time.
struct CharbrowseTimer;

impl tracing_subscriber::fmt::time::FormatTime for CharbrowseTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// Keeps the non-blocking log writer alive for the whole process.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

#[tokio::main]
async fn main() {
    let cli = Args::parse();
    let level = args::determine_log_level(&cli);

    // Log to ~/.config/charbrowse/logs/charbrowse.log; the TUI owns the terminal.
    {
        let mut log_path = theme::logs_dir();
        log_path.push("charbrowse.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(CharbrowseTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr)
                    .with_timer(CharbrowseTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let settings = args::apply_overrides(theme::load_settings(), &cli);
    tracing::info!(
        endpoint = %settings.endpoint,
        language = settings.language.code(),
        sort = settings.sort_key.as_config_key(),
        "charbrowse starting"
    );
    if let Err(err) = app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("charbrowse: {err}");
    }
    tracing::info!("charbrowse exited");
}
