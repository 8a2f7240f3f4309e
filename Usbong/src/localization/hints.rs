//! Hint dictionaries

use crate::formats::resources::{ResourceTable, read_resources};
use std::path::Path;

const HINTS_DIR: &str = "hints";

/// Word -> explanation table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintsTable {
    language: String,
    table: ResourceTable,
}

impl HintsTable {
    /// Wrap an already parsed table
    #[must_use]
    pub fn new(language: &str, table: ResourceTable) -> Self {
        Self {
            language: language.to_string(),
            table,
        }
    }

    /// A table with no hints
    #[must_use]
    pub fn empty(language: &str) -> Self {
        Self::new(language, ResourceTable::new())
    }

    /// Load `hints/<language>.xml` under a tree root.
    ///
    /// A missing or unreadable file yields an empty table.
    #[must_use]
    pub fn load(tree_root: &Path, language: &str) -> Self {
        let path = tree_root.join(HINTS_DIR).join(format!("{language}.xml"));
        if !path.is_file() {
            return Self::empty(language);
        }
        match read_resources(&path) {
            Ok(table) => {
                tracing::debug!("Loaded {} hints for {}", table.len(), language);
                Self::new(language, table)
            }
            Err(e) => {
                tracing::warn!("Failed to load hints {}: {}", path.display(), e);
                Self::empty(language)
            }
        }
    }

    /// Language this table was loaded for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Hint for a word
    #[must_use]
    pub fn hint(&self, word: &str) -> Option<&str> {
        self.table.get(word)
    }

    /// Hint entries whose word occurs in `text` (case-insensitive), in table order
    #[must_use]
    pub fn hints_in(&self, text: &str) -> Vec<(&str, &str)> {
        let lower = text.to_lowercase();
        self.table
            .iter()
            .filter(|(word, _)| !word.is_empty() && lower.contains(&word.to_lowercase()))
            .collect()
    }

    /// Number of hints
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
