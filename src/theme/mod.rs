//! Look-and-feel and configuration: color palette, config paths, and settings.

/// Path resolution for config directories.
mod paths;
/// Settings file loading.
mod settings;
/// Palette and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, resolve_settings_config_path};
pub use settings::{load_settings, parse_settings};
pub use types::{Settings, Theme};

/// What: Return the color palette used by every widget.
///
/// Details:
/// - Catppuccin Mocha tones, matching a dark terminal background.
#[must_use]
pub const fn theme() -> Theme {
    Theme::MOCHA
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
