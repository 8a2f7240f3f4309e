//! CLI display utilities
//!
//! Styled headings and markers shared by the inspect and play commands.

use console::{Emoji, style};

/// Evergreen tree - for tree documents
pub static TREE: Emoji<'_, '_> = Emoji("🌳 ", "");
/// Speech bubble - for languages
pub static SPEECH: Emoji<'_, '_> = Emoji("💬 ", "");
/// Light bulb - for hints
pub static BULB: Emoji<'_, '_> = Emoji("💡 ", "");
/// Floppy disk - for writing exports
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Format a section heading: `🌳 Title`
#[must_use]
pub fn heading(emoji: &Emoji, title: &str) -> String {
    format!("{}{}", emoji, style(title).bold())
}

/// Format a numbered option with its selection marker: `[x] 2) Apples`
#[must_use]
pub fn option_line(number: usize, label: &str, marker: Marker) -> String {
    let marker = match marker {
        Marker::Checked => style("[x]").green().to_string(),
        Marker::Unchecked => style("[ ]").dim().to_string(),
        Marker::Chosen => style("(*)").green().to_string(),
        Marker::Unchosen => style("( )").dim().to_string(),
        Marker::None => String::from("   "),
    };
    format!("  {marker} {}) {label}", style(number).cyan())
}

/// Selection marker shown next to an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Checked,
    Unchecked,
    Chosen,
    Unchosen,
    None,
}

/// Format a dimmed usage hint
#[must_use]
pub fn dim(text: &str) -> String {
    style(text).dim().to_string()
}

/// Format a warning line
#[must_use]
pub fn warn(text: &str) -> String {
    style(text).yellow().to_string()
}
