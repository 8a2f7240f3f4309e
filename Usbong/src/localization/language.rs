//! Language name to locale code table

/// Base language assumed when a document does not declare one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Locale code used for any language missing from the table.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-EN";

/// Map a human language name to the locale code used by speech collaborators.
///
/// Philippine languages share the Spanish voice, which is the closest
/// available pronunciation.
#[must_use]
pub fn language_code(language: &str) -> &'static str {
    match language.trim().to_lowercase().as_str() {
        "english" => "en-EN",
        "spanish" | "bisaya" | "ilonggo" | "tagalog" | "filipino" => "es-ES",
        "french" => "fr-FR",
        "german" => "de-DE",
        "japanese" => "ja-JP",
        "mandarin" | "chinese" => "zh-CN",
        _ => DEFAULT_LANGUAGE_CODE,
    }
}
