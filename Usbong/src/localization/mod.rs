//! Language resolution and translation
//!
//! A tree document is authored in one base language. Additional languages
//! ship as `trans/<Language>.xml` resource tables keyed by the original
//! text, and per-language hint dictionaries ship as `hints/<Language>.xml`.
//! Translation is best-effort: a missing table or entry yields the original
//! text unchanged.

mod hints;
mod language;
mod translator;

pub use hints::HintsTable;
pub use language::{DEFAULT_LANGUAGE, DEFAULT_LANGUAGE_CODE, language_code};
pub use translator::{TRANSLATIONS_DIR, Translator};

/// Replace `{br}` line-break markers with newlines
#[must_use]
pub fn expand_line_breaks(text: &str) -> String {
    text.replace("{br}", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_line_breaks() {
        assert_eq!(expand_line_breaks("one{br}two{br}"), "one\ntwo\n");
        assert_eq!(expand_line_breaks("plain"), "plain");
    }
}
