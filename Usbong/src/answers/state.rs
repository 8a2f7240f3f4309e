//! Recorded node states

use crate::formats::name::TaskNodeType;
use crate::node::Node;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Answer-relevant fields captured from a node's modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_indices: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
}

/// Snapshot of a visited node, taken as the learner leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsbongNodeState {
    pub transition_key: String,
    pub node_type: Option<TaskNodeType>,
    pub fields: StateFields,
}

impl UsbongNodeState {
    /// Capture the answer fields present on `node`
    #[must_use]
    pub fn capture(node: &Node, node_type: Option<TaskNodeType>, transition_key: impl Into<String>) -> Self {
        Self {
            transition_key: transition_key.into(),
            node_type,
            fields: StateFields {
                selected_indices: node.has_selection_module().then(|| node.selected_indices()),
                text_input: node.text_input().map(str::to_string),
                date: node.date(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LineMode, Module};

    #[test]
    fn test_capture_selection() {
        let mut node = Node::new(vec![Module::RadioButtons {
            options: vec!["a".to_string(), "b".to_string()],
            selected: None,
        }]);
        node.select(1);
        let state = UsbongNodeState::capture(&node, Some(TaskNodeType::RadioButtons), "Any");
        assert_eq!(state.fields.selected_indices, Some(vec![1]));
        assert_eq!(state.fields.text_input, None);
        assert_eq!(state.fields.date, None);
    }

    #[test]
    fn test_capture_text_and_display() {
        let mut node = Node::new(vec![Module::TextInput {
            text: String::new(),
            mode: LineMode::MultiLine,
            unit: None,
            numeric: false,
        }]);
        node.set_text("notes");
        let state = UsbongNodeState::capture(&node, Some(TaskNodeType::TextArea), "Any");
        assert_eq!(state.fields.text_input.as_deref(), Some("notes"));
        assert_eq!(state.fields.selected_indices, None);

        let display = Node::new(vec![Module::Text("hi".to_string())]);
        let state = UsbongNodeState::capture(&display, Some(TaskNodeType::TextDisplay), "Any");
        assert_eq!(state.fields, StateFields::default());
    }
}
