//! Node and module types

use chrono::{DateTime, FixedOffset};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Line mode of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// Single-line text field
    SingleLine,
    /// Multi-line text area
    MultiLine,
}

/// The smallest displayable or answerable unit of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Module {
    /// Plain text
    Text(String),
    /// Image, with the resolved file when it exists
    Image { name: String, path: Option<PathBuf> },
    /// Read-only list (classification)
    List(Vec<String>),
    /// Single choice
    RadioButtons { options: Vec<String>, selected: Option<usize> },
    /// Multiple choice
    Checkboxes { options: Vec<String>, selected: BTreeSet<usize> },
    /// Free text input
    TextInput {
        text: String,
        mode: LineMode,
        unit: Option<String>,
        numeric: bool,
    },
    /// Date value
    Date(Option<DateTime<FixedOffset>>),
}

impl Module {
    /// Whether this module holds a selectable option list
    #[must_use]
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::RadioButtons { .. } | Self::Checkboxes { .. })
    }
}

/// Expected answer hidden in a "with answer" node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedAnswer {
    /// Correct option index; `None` if the document's value was not a number
    Index(Option<usize>),
    /// Accepted text alternatives
    Texts(Vec<String>),
}

/// Resolved background and narration assets of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAssets {
    pub background_image: Option<PathBuf>,
    pub background_audio: Option<PathBuf>,
    pub audio: Option<PathBuf>,
}

/// A single step of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    modules: Vec<Module>,
    /// Untranslated transition key of each option (links and decisions)
    option_keys: Vec<String>,
    expected_answer: Option<ExpectedAnswer>,
    assets: NodeAssets,
}

impl Node {
    /// Create a node from its modules
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            ..Default::default()
        }
    }

    /// Attach per-option transition keys
    #[must_use]
    pub fn with_option_keys(mut self, keys: Vec<String>) -> Self {
        self.option_keys = keys;
        self
    }

    /// Attach the hidden expected answer
    #[must_use]
    pub fn with_expected_answer(mut self, answer: ExpectedAnswer) -> Self {
        self.expected_answer = Some(answer);
        self
    }

    /// Attach resolved assets
    #[must_use]
    pub fn with_assets(mut self, assets: NodeAssets) -> Self {
        self.assets = assets;
        self
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn assets(&self) -> &NodeAssets {
        &self.assets
    }

    #[must_use]
    pub fn expected_answer(&self) -> Option<&ExpectedAnswer> {
        self.expected_answer.as_ref()
    }

    #[must_use]
    pub fn option_keys(&self) -> &[String] {
        &self.option_keys
    }

    /// Text of every `Text` module, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter_map(|m| match m {
                Module::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Options of the first list or selection module
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        self.modules.iter().find_map(|m| match m {
            Module::List(options)
            | Module::RadioButtons { options, .. }
            | Module::Checkboxes { options, .. } => Some(options.as_slice()),
            _ => None,
        })
    }

    /// Whether the node has a radio button or checkbox module
    #[must_use]
    pub fn has_selection_module(&self) -> bool {
        self.modules.iter().any(Module::is_selection)
    }

    /// Select a single option. Returns `false` if there is no radio module
    /// or the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        self.modules.iter_mut().any(|m| match m {
            Module::RadioButtons { options, selected } if index < options.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        })
    }

    /// Toggle a checkbox. Returns `false` if there is no checkbox module or
    /// the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        self.modules.iter_mut().any(|m| match m {
            Module::Checkboxes { options, selected } if index < options.len() => {
                if !selected.remove(&index) {
                    selected.insert(index);
                }
                true
            }
            _ => false,
        })
    }

    /// Clear every selection
    pub fn clear_selection(&mut self) {
        for module in &mut self.modules {
            match module {
                Module::RadioButtons { selected, .. } => *selected = None,
                Module::Checkboxes { selected, .. } => selected.clear(),
                _ => {}
            }
        }
    }

    /// Selected option indices, ascending
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.modules
            .iter()
            .flat_map(|m| match m {
                Module::RadioButtons { selected, .. } => selected.iter().copied().collect::<Vec<usize>>(),
                Module::Checkboxes { selected, .. } => selected.iter().copied().collect::<Vec<usize>>(),
                _ => Vec::new(),
            })
            .collect()
    }

    /// Number of selected options
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_indices().len()
    }

    /// Transition key of the selected option (links and decisions)
    #[must_use]
    pub fn selected_option_key(&self) -> Option<&str> {
        let index = *self.selected_indices().first()?;
        self.option_keys.get(index).map(String::as_str)
    }

    /// Set the text of the text input. Returns `false` without one.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.modules.iter_mut().any(|m| match m {
            Module::TextInput { text, .. } => {
                text.clone_from(&value);
                true
            }
            _ => false,
        })
    }

    /// Current text input
    #[must_use]
    pub fn text_input(&self) -> Option<&str> {
        self.modules.iter().find_map(|m| match m {
            Module::TextInput { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Set the date value. Returns `false` without a date module.
    pub fn set_date(&mut self, value: DateTime<FixedOffset>) -> bool {
        self.modules.iter_mut().any(|m| match m {
            Module::Date(date) => {
                *date = Some(value);
                true
            }
            _ => false,
        })
    }

    /// Current date value
    #[must_use]
    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        self.modules.iter().find_map(|m| match m {
            Module::Date(date) => *date,
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_radio_selection() {
        let mut node = Node::new(vec![
            Module::Text("Pick".to_string()),
            Module::RadioButtons {
                options: options(&["a", "b"]),
                selected: None,
            },
        ])
        .with_option_keys(options(&["Left", "Right"]));

        assert!(node.has_selection_module());
        assert!(node.selected_indices().is_empty());
        assert!(node.select(1));
        assert!(!node.select(5));
        assert!(node.select(0));
        assert_eq!(node.selected_indices(), vec![0]);
        assert_eq!(node.selected_option_key(), Some("Left"));

        node.clear_selection();
        assert_eq!(node.selected_count(), 0);
        assert_eq!(node.selected_option_key(), None);
    }

    #[test]
    fn test_checkbox_toggle() {
        let mut node = Node::new(vec![Module::Checkboxes {
            options: options(&["x", "y", "z"]),
            selected: BTreeSet::new(),
        }]);
        assert!(node.toggle(2));
        assert!(node.toggle(0));
        assert!(node.toggle(1));
        assert!(node.toggle(1));
        assert!(!node.toggle(3));
        assert_eq!(node.selected_indices(), vec![0, 2]);
        assert!(!node.select(0));
    }

    #[test]
    fn test_text_and_date_inputs() {
        let mut node = Node::new(vec![Module::Text("Weight?".to_string())]);
        assert!(!node.set_text("42"));
        assert_eq!(node.text_input(), None);

        let mut node = Node::new(vec![
            Module::Text("Weight?".to_string()),
            Module::TextInput {
                text: String::new(),
                mode: LineMode::SingleLine,
                unit: Some("kg".to_string()),
                numeric: false,
            },
        ]);
        assert!(node.set_text("42"));
        assert_eq!(node.text_input(), Some("42"));
        assert_eq!(node.texts(), vec!["Weight?"]);
        assert!(!node.has_selection_module());

        let date = DateTime::parse_from_rfc3339("2024-05-01T08:30:00+08:00").unwrap();
        let mut node = Node::new(vec![Module::Date(None)]);
        assert_eq!(node.date(), None);
        assert!(node.set_date(date));
        assert_eq!(node.date(), Some(date));
    }
}
