//! Style channel - named style variables handed to the external stylesheet.
//!
//! The core never interprets colors, fonts or easing. It only guarantees the
//! names below and the format of their values. The stylesheet decides what
//! they look like.

use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Variable Names
// =============================================================================

/// Names of every style property the core emits.
pub mod vars {
    pub const GRID_ASPECT_RATIO: &str = "--grid-aspect-ratio";
    pub const GRID_ANIMATION_STATE: &str = "--grid-animation-state";
    pub const GRID_TEMPLATE_ROWS: &str = "grid-template-rows";
    pub const GRID_TEMPLATE_COLUMNS: &str = "grid-template-columns";
    pub const GAP: &str = "gap";

    pub const GRID_ROW: &str = "grid-row";
    pub const GRID_COLUMN: &str = "grid-column";

    pub const HOVER_IMAGE: &str = "--hover-image";
    pub const HOVER_OFFSET_X: &str = "--hover-offset-x";
    pub const HOVER_OFFSET_Y: &str = "--hover-offset-y";
    pub const HOVER_TRANSITION: &str = "--hover-transition";

    pub const TOP: &str = "top";
    pub const LEFT: &str = "left";
    pub const DRAW_DELAY: &str = "--draw-delay";
    pub const FADE_DELAY: &str = "--fade-delay";
    pub const ANIMATION_PLAY_STATE: &str = "animation-play-state";
}

// =============================================================================
// Value Formatting
// =============================================================================

/// `repeat(<n>, 1fr)`
pub fn repeat_fr(n: u16) -> String {
    format!("repeat({n}, 1fr)")
}

/// `span <n>` for spans above one, `auto` otherwise.
pub fn span(n: u16) -> String {
    if n > 1 { format!("span {n}") } else { "auto".to_string() }
}

/// Pixel length, trimmed: `8px`, `0.5px`.
pub fn px(v: f32) -> String {
    format!("{}px", trim_number(v))
}

/// Percentage, trimmed to four decimals: `50%`, `33.3333%`, `-100%`.
pub fn percent(v: f32) -> String {
    format!("{}%", trim_number(v))
}

/// Seconds rendered as whole milliseconds: `0.3` → `300ms`.
pub fn millis(seconds: f32) -> String {
    format!("{}ms", (seconds * 1000.0).round() as i64)
}

/// `url('<path>')` as a CSS string: quotes and backslashes are escaped,
/// line breaks become hex escapes (`\a `).
pub fn url(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 7);
    quoted.push_str("url('");
    for c in path.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\a "),
            '\r' => quoted.push_str("\\d "),
            '\x0c' => quoted.push_str("\\c "),
            c => quoted.push(c),
        }
    }
    quoted.push_str("')");
    quoted
}

/// Running/paused keyword for a gate state.
pub fn play_state(running: bool) -> &'static str {
    if running { "running" } else { "paused" }
}

fn trim_number(v: f32) -> String {
    let rounded = (v as f64 * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

// =============================================================================
// StyleVars
// =============================================================================

/// Ordered map of style property name → value.
///
/// Ordered so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleVars {
    entries: BTreeMap<String, String>,
}

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any earlier value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for StyleVars {
    /// Inline declaration list: `gap: 8px; grid-row: span 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
