use serde::Deserialize;

use crate::i18n::Language;
use crate::state::SortKey;
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

/// Raw shape of `settings.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    /// GraphQL endpoint URL.
    endpoint: Option<String>,
    /// Language code ("en" or "de").
    language: Option<String>,
    /// Sort key ("name" or "origin").
    sort: Option<String>,
    /// Response cache capacity in pages.
    cache_capacity: Option<usize>,
    /// Request timeout in seconds.
    request_timeout_secs: Option<u64>,
    /// Reset to page 1 on filter edits.
    reset_page_on_filter: Option<bool>,
}

/// What: Parse settings from `settings.toml` content on top of the defaults.
///
/// Inputs:
/// - `content`: File content
///
/// Output:
/// - `Ok(Settings)` with recognized keys applied
///
/// # Errors
/// - Returns `Err` when the TOML is malformed or contains unknown keys
///
/// Details:
/// - Unrecognized language or sort values are logged and ignored.
/// - A zero timeout or blank endpoint is ignored.
pub fn parse_settings(content: &str) -> Result<Settings, String> {
    let file: SettingsFile =
        toml::from_str(content).map_err(|e| format!("invalid settings.toml: {e}"))?;
    let mut settings = Settings::default();
    if let Some(endpoint) = file.endpoint.filter(|e| !e.trim().is_empty()) {
        settings.endpoint = endpoint.trim().to_string();
    }
    if let Some(code) = file.language {
        match Language::from_code(&code) {
            Some(lang) => settings.language = lang,
            None => tracing::warn!(value = %code, "unsupported language in settings; using default"),
        }
    }
    if let Some(sort) = file.sort {
        match SortKey::from_config_key(&sort) {
            Some(key) => settings.sort_key = key,
            None => tracing::warn!(value = %sort, "unknown sort key in settings; using default"),
        }
    }
    if let Some(cap) = file.cache_capacity {
        settings.cache_capacity = cap.max(1);
    }
    if let Some(secs) = file.request_timeout_secs.filter(|s| *s > 0) {
        settings.request_timeout_secs = secs;
    }
    if let Some(reset) = file.reset_page_on_filter {
        settings.reset_page_on_filter = reset;
    }
    Ok(settings)
}

/// What: Load settings from the user's config directory.
///
/// Output:
/// - Parsed settings, or defaults when no file exists or it cannot be used.
///
/// Details:
/// - Problems are logged; startup never fails because of the settings file.
#[must_use]
pub fn load_settings() -> Settings {
    let Some(path) = resolve_settings_config_path() else {
        tracing::debug!("no settings.toml found; using defaults");
        return Settings::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
            Settings::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings file");
            Settings::default()
        }
    }
}
