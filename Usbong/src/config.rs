//! Player configuration (`usbong.toml`)

use crate::answers::ExportFormat;
use crate::error::Result;
use crate::node::DEFAULT_END_STATE_TEXT;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_end_state_text() -> String {
    DEFAULT_END_STATE_TEXT.to_string()
}

/// How typed answers are compared with a node's expected answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerMatching {
    /// `Dog` does not match `dog`
    #[default]
    CaseSensitive,
    /// `Dog` matches `dog`
    CaseInsensitive,
}

/// Settings applied to a [`Tree`](crate::tree::Tree) session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub answer_matching: AnswerMatching,
    /// Trim surrounding whitespace from typed and expected answers
    #[serde(default = "default_true")]
    pub trim_answers: bool,
    /// Initial language; the document's base language when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub export_format: ExportFormat,
    #[serde(default = "default_end_state_text")]
    pub end_state_text: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            answer_matching: AnswerMatching::default(),
            trim_answers: true,
            language: None,
            export_format: ExportFormat::default(),
            end_state_text: default_end_state_text(),
        }
    }
}

impl PlayerConfig {
    /// Parse a configuration from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the configuration to TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Write the configuration to a file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = PlayerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.answer_matching, AnswerMatching::CaseSensitive);
        assert!(config.trim_answers);
        assert_eq!(config.export_format, ExportFormat::Csv);
        assert_eq!(config.end_state_text, DEFAULT_END_STATE_TEXT);
    }

    #[test]
    fn test_parse_overrides() {
        let config = PlayerConfig::from_toml_str(
            r#"
answer_matching = "case-insensitive"
trim_answers = false
language = "Filipino"
export_format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.answer_matching, AnswerMatching::CaseInsensitive);
        assert!(!config.trim_answers);
        assert_eq!(config.language.as_deref(), Some("Filipino"));
        assert_eq!(config.export_format, ExportFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("usbong.toml");
        let config = PlayerConfig {
            language: Some("Bisaya".to_string()),
            ..PlayerConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(PlayerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_matching() {
        assert!(PlayerConfig::from_toml_str("answer_matching = \"fuzzy\"").is_err());
    }
}
