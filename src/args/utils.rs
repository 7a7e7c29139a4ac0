//! Shared utilities for argument processing.

use crate::i18n::Language;
use crate::state::SortKey;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Layer command-line flags over settings loaded from disk.
///
/// Inputs:
/// - `settings`: Settings from defaults and `settings.toml`
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Settings with every provided flag applied.
///
/// Details:
/// - Invalid `--lang`/`--sort` values are logged and leave the setting unchanged.
/// - `--reset-page-on-filter` can only switch the option on.
#[must_use]
pub fn apply_overrides(mut settings: Settings, args: &crate::args::Args) -> Settings {
    if let Some(endpoint) = args.endpoint.as_deref().map(str::trim)
        && !endpoint.is_empty()
    {
        settings.endpoint = endpoint.to_string();
    }
    if let Some(code) = args.language.as_deref() {
        match Language::from_code(code) {
            Some(lang) => settings.language = lang,
            None => tracing::warn!(value = code, "unsupported --lang value; ignoring"),
        }
    }
    if let Some(sort) = args.sort.as_deref() {
        match SortKey::from_config_key(sort) {
            Some(key) => settings.sort_key = key,
            None => tracing::warn!(value = sort, "unknown --sort value; ignoring"),
        }
    }
    if let Some(cap) = args.cache_capacity {
        settings.cache_capacity = cap.max(1);
    }
    if let Some(secs) = args.timeout.filter(|s| *s > 0) {
        settings.request_timeout_secs = secs;
    }
    if args.reset_page_on_filter {
        settings.reset_page_on_filter = true;
    }
    settings
}
