//! Transition key evaluation
//!
//! The key leaving a node is derived from the node's answer state:
//!
//! | Node type | Key |
//! |-----------|-----|
//! | checklist | `Yes` when at least the target number of boxes is ticked, else `No` |
//! | link / decision | key of the selected option, `Any` when nothing is selected |
//! | radio buttons with answer | `Yes` when the expected option is selected, else `No` |
//! | text field / area with answer | `Yes` when the input matches an accepted alternative, else `No` |
//! | anything else | `Any` |

use crate::config::{AnswerMatching, PlayerConfig};
use crate::document::ANY_TRANSITION;
use crate::formats::name::TaskNodeType;
use crate::node::{ExpectedAnswer, Node};

/// Key taken when an answer is correct or a checklist is satisfied.
pub const YES_TRANSITION: &str = "Yes";
/// Key taken otherwise.
pub const NO_TRANSITION: &str = "No";

fn yes_no(condition: bool) -> String {
    let key = if condition { YES_TRANSITION } else { NO_TRANSITION };
    key.to_string()
}

/// Compute the transition key for `node` given its declared type
#[must_use]
pub fn target_transition_key(
    task_node_type: Option<TaskNodeType>,
    node: &Node,
    checklist_target: usize,
    config: &PlayerConfig,
) -> String {
    match task_node_type {
        Some(TaskNodeType::Checklist) => yes_no(node.selected_count() >= checklist_target),
        Some(TaskNodeType::Link) => node
            .selected_option_key()
            .unwrap_or(ANY_TRANSITION)
            .to_string(),
        Some(TaskNodeType::RadioButtonsWithAnswer) => {
            let correct = match node.expected_answer() {
                Some(ExpectedAnswer::Index(Some(expected))) => {
                    node.selected_indices().first() == Some(expected)
                }
                _ => false,
            };
            yes_no(correct)
        }
        Some(TaskNodeType::TextFieldWithAnswer | TaskNodeType::TextAreaWithAnswer) => {
            let correct = match (node.expected_answer(), node.text_input()) {
                (Some(ExpectedAnswer::Texts(alternatives)), Some(input)) => {
                    answer_matches(input, alternatives, config.answer_matching, config.trim_answers)
                }
                _ => false,
            };
            yes_no(correct)
        }
        _ => ANY_TRANSITION.to_string(),
    }
}

/// Whether `input` equals one of the accepted alternatives
#[must_use]
pub fn answer_matches(
    input: &str,
    alternatives: &[String],
    matching: AnswerMatching,
    trim: bool,
) -> bool {
    let normalize = |s: &str| {
        let s = if trim { s.trim() } else { s };
        match matching {
            AnswerMatching::CaseSensitive => s.to_string(),
            AnswerMatching::CaseInsensitive => s.to_lowercase(),
        }
    };
    let input = normalize(input);
    alternatives.iter().any(|alt| normalize(alt) == input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{LineMode, Module};
    use std::collections::BTreeSet;

    fn checklist(target_selected: &[usize]) -> Node {
        let mut node = Node::new(vec![Module::Checkboxes {
            options: ["a", "b", "c", "d"].iter().map(|s| (*s).to_string()).collect(),
            selected: BTreeSet::new(),
        }]);
        for &i in target_selected {
            node.toggle(i);
        }
        node
    }

    fn text_node(expected: &[&str], input: &str) -> Node {
        let mut node = Node::new(vec![Module::TextInput {
            text: String::new(),
            mode: LineMode::SingleLine,
            unit: None,
            numeric: false,
        }])
        .with_expected_answer(ExpectedAnswer::Texts(
            expected.iter().map(|s| (*s).to_string()).collect(),
        ));
        node.set_text(input);
        node
    }

    #[test]
    fn test_checklist_threshold() {
        let config = PlayerConfig::default();
        let key = |selected: &[usize]| {
            target_transition_key(Some(TaskNodeType::Checklist), &checklist(selected), 3, &config)
        };
        assert_eq!(key(&[0, 1]), "No");
        assert_eq!(key(&[0, 1, 2]), "Yes");
        assert_eq!(key(&[0, 1, 2, 3]), "Yes");
    }

    #[test]
    fn test_untouched_selection_nodes_use_any() {
        let config = PlayerConfig::default();
        let node = Node::new(vec![Module::RadioButtons {
            options: vec!["Left".to_string()],
            selected: None,
        }])
        .with_option_keys(vec!["Left".to_string()]);
        for t in [TaskNodeType::Link, TaskNodeType::RadioButtons] {
            assert_eq!(target_transition_key(Some(t), &node, 0, &config), "Any");
        }
    }

    #[test]
    fn test_link_uses_selected_label() {
        let config = PlayerConfig::default();
        let mut node = Node::new(vec![Module::RadioButtons {
            options: vec!["Kaliwa".to_string(), "Kanan".to_string()],
            selected: None,
        }])
        .with_option_keys(vec!["Left".to_string(), "Right".to_string()]);
        node.select(1);
        assert_eq!(target_transition_key(Some(TaskNodeType::Link), &node, 0, &config), "Right");
        assert_eq!(target_transition_key(Some(TaskNodeType::RadioButtons), &node, 0, &config), "Any");
    }

    #[test]
    fn test_radio_buttons_with_answer() {
        let config = PlayerConfig::default();
        let mut node = Node::new(vec![Module::RadioButtons {
            options: vec!["a".to_string(), "b".to_string()],
            selected: None,
        }])
        .with_expected_answer(ExpectedAnswer::Index(Some(1)));
        let t = Some(TaskNodeType::RadioButtonsWithAnswer);

        assert_eq!(target_transition_key(t, &node, 0, &config), "No");
        node.select(0);
        assert_eq!(target_transition_key(t, &node, 0, &config), "No");
        node.select(1);
        assert_eq!(target_transition_key(t, &node, 0, &config), "Yes");

        let mut unparsable = node.clone().with_expected_answer(ExpectedAnswer::Index(None));
        unparsable.select(1);
        assert_eq!(target_transition_key(t, &unparsable, 0, &config), "No");
    }

    #[test]
    fn test_text_answer_case_sensitive_by_default() {
        let config = PlayerConfig::default();
        let t = Some(TaskNodeType::TextFieldWithAnswer);
        assert_eq!(target_transition_key(t, &text_node(&["cat", "dog"], "dog"), 0, &config), "Yes");
        assert_eq!(target_transition_key(t, &text_node(&["cat", "dog"], "Dog"), 0, &config), "No");
        assert_eq!(target_transition_key(t, &text_node(&["cat", "dog"], " cat "), 0, &config), "Yes");
        assert_eq!(target_transition_key(t, &text_node(&["cat", "dog"], "bird"), 0, &config), "No");
    }

    #[test]
    fn test_text_answer_case_insensitive() {
        let config = PlayerConfig {
            answer_matching: AnswerMatching::CaseInsensitive,
            ..PlayerConfig::default()
        };
        let t = Some(TaskNodeType::TextAreaWithAnswer);
        assert_eq!(target_transition_key(t, &text_node(&["cat", "dog"], "Dog"), 0, &config), "Yes");
    }

    #[test]
    fn test_untrimmed_matching() {
        assert!(!answer_matches(" cat", &["cat".to_string()], AnswerMatching::CaseSensitive, false));
        assert!(answer_matches(" cat", &["cat".to_string()], AnswerMatching::CaseSensitive, true));
    }

    #[test]
    fn test_other_types_use_any() {
        let config = PlayerConfig::default();
        let node = Node::new(vec![Module::Text("hi".to_string())]);
        for t in [None, Some(TaskNodeType::TextDisplay), Some(TaskNodeType::Date)] {
            assert_eq!(target_transition_key(t, &node, 0, &config), "Any");
        }
    }
}
