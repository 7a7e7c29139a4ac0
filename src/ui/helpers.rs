//! Small text helpers shared by the renderers.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// What: Cut `text` so it fits into `max_width` terminal columns.
///
/// Output:
/// - The original text when it fits, otherwise a prefix ending in `…`.
///
/// Details:
/// - Measures display width, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Build a "Label: value" line fitted to `width` columns.
///
/// Inputs:
/// - `label`: Translated field label
/// - `value`: Field value
/// - `value_style`: Style for the value part
/// - `width`: Available columns
#[must_use]
pub fn labeled_line(
    label: &str,
    value: &str,
    value_style: Style,
    th: &Theme,
    width: usize,
) -> Line<'static> {
    let head = format!("{label}: ");
    let head_w = UnicodeWidthStr::width(head.as_str());
    let value = truncate_to_width(value, width.saturating_sub(head_w));
    Line::from(vec![
        Span::styled(
            head,
            Style::default()
                .fg(th.subtext0)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, value_style),
    ])
}
