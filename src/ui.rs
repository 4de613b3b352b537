//! Terminal styling for enginedesk.
//!
//! Uses the `console` crate for colored output. The [`Theme`] bundles the
//! styles used across the menu loop; with color disabled every style is the
//! plain default, so output stays byte-identical minus escape codes.

use console::Style;

/// Named styles for the console session.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Bold cyan for the welcome banner and menu frame.
    pub banner: Style,
    /// Bold green for success confirmations.
    pub success: Style,
    /// Bold red for domain error lines.
    pub error: Style,
    /// Yellow for warnings and re-prompt hints.
    pub warn: Style,
}

impl Theme {
    /// Full-color theme.
    pub fn new() -> Self {
        Self {
            banner: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow(),
        }
    }

    /// Theme with styling disabled (`--no-color` or `color = false`).
    pub fn plain() -> Self {
        Self {
            banner: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
        }
    }

    pub fn for_color(enabled: bool) -> Self {
        if enabled { Self::new() } else { Self::plain() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
