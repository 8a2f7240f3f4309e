//! Translation tables for a tree document

use crate::formats::resources::{ResourceTable, read_resources};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Directory (relative to the tree root) holding translation tables.
pub const TRANSLATIONS_DIR: &str = "trans";

/// Translation tables keyed by language name.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    base_language: String,
    /// Languages named by translation files, whether or not they parsed
    languages: Vec<String>,
    tables: HashMap<String, ResourceTable>,
}

impl Translator {
    /// Create a translator with no tables
    #[must_use]
    pub fn new(base_language: &str) -> Self {
        Self {
            base_language: base_language.to_string(),
            languages: Vec::new(),
            tables: HashMap::new(),
        }
    }

    /// Load every `trans/*.xml` table under a tree root.
    ///
    /// Never fails: a missing `trans/` directory yields no tables, an
    /// unreadable entry is skipped with a warning, and a table that fails to
    /// parse is skipped with a warning but its language is still listed.
    #[must_use]
    pub fn load(tree_root: &Path, base_language: &str) -> Self {
        let mut translator = Self::new(base_language);
        let dir = tree_root.join(TRANSLATIONS_DIR);
        if !dir.is_dir() {
            tracing::debug!("No translations directory at {}", dir.display());
            return translator;
        }

        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            let is_xml = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("xml"));
            if !entry.file_type().is_file() || !is_xml {
                continue;
            }
            let Some(language) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };

            match read_resources(path) {
                Ok(table) => {
                    tracing::debug!("Loaded {} translations for {}", table.len(), language);
                    translator.tables.insert(language.clone(), table);
                }
                Err(e) => {
                    tracing::warn!("Failed to load translations {}: {}", path.display(), e);
                }
            }
            translator.languages.push(language);
        }

        translator
    }

    /// Register a table for a language
    pub fn insert_table(&mut self, language: &str, table: ResourceTable) {
        if !self.languages.iter().any(|l| l == language) {
            self.languages.push(language.to_string());
        }
        self.tables.insert(language.to_string(), table);
    }

    /// The document's authoring language
    #[must_use]
    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    /// Base language plus every language with a translation file, sorted and deduplicated
    #[must_use]
    pub fn available_languages(&self) -> Vec<String> {
        let mut languages = self.languages.clone();
        languages.push(self.base_language.clone());
        languages.sort();
        languages.dedup();
        languages
    }

    /// Translate `text` into `language`, falling back to the original text
    #[must_use]
    pub fn translate<'a>(&'a self, text: &'a str, language: &str) -> &'a str {
        if language == self.base_language {
            return text;
        }
        self.tables
            .get(language)
            .and_then(|t| t.get(text))
            .unwrap_or(text)
    }
}
