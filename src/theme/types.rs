use ratatui::style::Color;

use crate::i18n::Language;
use crate::sources::{DEFAULT_CACHE_CAPACITY, DEFAULT_ENDPOINT};
use crate::state::SortKey;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for borders of inactive components.
    pub surface2: Color,
    /// Muted overlay color for secondary labels.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for the focused control.
    pub sapphire: Color,
    /// Accent color for headings.
    pub mauve: Color,
    /// "Alive" status color.
    pub green: Color,
    /// Loading indicator color.
    pub yellow: Color,
    /// Error and "dead" status color.
    pub red: Color,
}

impl Theme {
    /// Catppuccin Mocha palette.
    pub const MOCHA: Self = Self {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        mantle: Color::Rgb(0x18, 0x18, 0x25),
        surface2: Color::Rgb(0x58, 0x5b, 0x70),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        red: Color::Rgb(0xf3, 0x8b, 0xa8),
    };
}

/// User-configurable application settings parsed from `settings.toml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Language shown on startup.
    pub language: Language,
    /// Sort key selected on startup.
    pub sort_key: SortKey,
    /// Maximum number of pages kept in the response cache.
    pub cache_capacity: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Jump back to page 1 whenever a filter is edited.
    pub reset_page_on_filter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: Language::En,
            sort_key: SortKey::Name,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            request_timeout_secs: 15,
            reset_page_on_filter: false,
        }
    }
}
