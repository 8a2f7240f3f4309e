//! Node construction from a name
//!
//! The factory combines the decoded name, the element found in the
//! document index and the current language's translations into a typed
//! [`Node`] plus the transition table leaving it.

use super::types::{ExpectedAnswer, LineMode, Module, Node, NodeAssets};
use crate::assets::AssetProbe;
use crate::document::{DocumentIndex, NodeType, TransitionTable};
use crate::formats::name::{COMPONENT_SEPARATOR, NodeDescriptor, TaskNodeType};
use crate::formats::xml::XmlElement;
use crate::localization::{Translator, expand_line_breaks};
use std::collections::BTreeSet;

/// Literal separating displayed text from the expected answer.
pub const ANSWER_SEPARATOR: &str = "Answer=";

/// Text shown for end states unless configured otherwise.
pub const DEFAULT_END_STATE_TEXT: &str = "You've now reached the end";

/// Text shown for nodes with an unknown type identifier.
pub const UNKNOWN_NODE_TEXT: &str = "Unknown node";

const TEXT_ALTERNATIVE_SEPARATOR: char = '|';

/// Everything the tree needs about a freshly built node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltNode {
    pub node: Node,
    pub transitions: TransitionTable,
    /// Element kind the name resolved to
    pub node_type: NodeType,
    /// Declared task type; decisions report [`TaskNodeType::Link`], end
    /// states and unknown identifiers report `None`
    pub task_node_type: Option<TaskNodeType>,
    /// Required tick count, non-zero only for checklists
    pub checklist_target: usize,
}

/// Builds nodes from names against one document.
pub struct NodeFactory<'a> {
    index: &'a DocumentIndex,
    translator: &'a Translator,
    assets: &'a dyn AssetProbe,
    end_state_text: &'a str,
}

impl<'a> NodeFactory<'a> {
    #[must_use]
    pub fn new(index: &'a DocumentIndex, translator: &'a Translator, assets: &'a dyn AssetProbe) -> Self {
        Self {
            index,
            translator,
            assets,
            end_state_text: DEFAULT_END_STATE_TEXT,
        }
    }

    /// Override the terminal node text
    #[must_use]
    pub fn with_end_state_text(mut self, text: &'a str) -> Self {
        self.end_state_text = text;
        self
    }

    /// Build the node named `name` in `language`.
    ///
    /// Returns `None` only when the name does not resolve to any element.
    #[must_use]
    pub fn build(&self, name: &str, language: &str) -> Option<BuiltNode> {
        let (node_type, element) = self.index.find(name)?;
        let descriptor = NodeDescriptor::decode(name, language);
        tracing::debug!("Building {:?} node '{}' ({})", node_type, name, language);

        let built = match node_type {
            NodeType::EndState => BuiltNode {
                node: Node::new(vec![Module::Text(self.localize(self.end_state_text, language))]),
                transitions: TransitionTable::new(),
                node_type,
                task_node_type: None,
                checklist_target: 0,
            },
            NodeType::Decision => self.build_decision(&descriptor, element),
            NodeType::TaskNode => match descriptor.task_node_type() {
                Some(task_type) => self.build_task_node(task_type, &descriptor, element),
                None => {
                    tracing::warn!("Unknown node type '{}' in '{}'", descriptor.type_identifier(), name);
                    BuiltNode {
                        node: Node::new(vec![Module::Text(self.localize(UNKNOWN_NODE_TEXT, language))]),
                        transitions: self.index.transitions(element),
                        node_type,
                        task_node_type: None,
                        checklist_target: 0,
                    }
                }
            },
        };

        Some(BuiltNode {
            node: built.node.with_assets(self.resolve_assets(&descriptor)),
            ..built
        })
    }

    fn localize(&self, text: &str, language: &str) -> String {
        expand_line_breaks(self.translator.translate(text, language))
    }

    fn localize_all<'s>(&self, texts: impl IntoIterator<Item = &'s str>, language: &str) -> Vec<String> {
        texts.into_iter().map(|t| self.localize(t, language)).collect()
    }

    fn resolve_assets(&self, descriptor: &NodeDescriptor) -> NodeAssets {
        NodeAssets {
            background_image: descriptor
                .background_image_name()
                .and_then(|n| self.assets.find_image(n)),
            background_audio: descriptor
                .background_audio_name()
                .and_then(|n| self.assets.find_audio(n, descriptor.language())),
            audio: descriptor
                .audio_name()
                .and_then(|n| self.assets.find_audio(n, descriptor.language())),
        }
    }

    fn image_module(&self, descriptor: &NodeDescriptor) -> Module {
        let name = descriptor.image_file_name().unwrap_or_default().to_string();
        let path = self.assets.find_image(&name);
        if path.is_none() {
            tracing::debug!("Image '{}' not found", name);
        }
        Module::Image { name, path }
    }

    /// Decisions branch on their `<transition>` names directly.
    fn build_decision(&self, descriptor: &NodeDescriptor, element: &XmlElement) -> BuiltNode {
        let language = descriptor.language();
        let transitions = self.index.transitions(element);
        let keys: Vec<String> = transitions.keys().map(str::to_string).collect();
        let node = Node::new(vec![
            Module::Text(self.localize(descriptor.text(), language)),
            Module::RadioButtons {
                options: self.localize_all(keys.iter().map(String::as_str), language),
                selected: None,
            },
        ])
        .with_option_keys(keys);

        BuiltNode {
            node,
            transitions,
            node_type: NodeType::Decision,
            task_node_type: Some(TaskNodeType::Link),
            checklist_target: 0,
        }
    }

    fn build_task_node(
        &self,
        task_type: TaskNodeType,
        descriptor: &NodeDescriptor,
        element: &XmlElement,
    ) -> BuiltNode {
        let language = descriptor.language();
        let mut transitions = self.index.transitions(element);
        let task_names = self.index.task_names(element);
        let text = || Module::Text(self.localize(descriptor.text(), language));
        let labels = || {
            self.localize_all(task_names.iter().map(|n| option_label(n)), language)
        };
        let text_input = |mode: LineMode, unit: Option<String>, numeric: bool| Module::TextInput {
            text: String::new(),
            mode,
            unit,
            numeric,
        };

        let node = match task_type {
            TaskNodeType::TextDisplay => Node::new(vec![text()]),
            TaskNodeType::ImageDisplay => Node::new(vec![self.image_module(descriptor)]),
            TaskNodeType::TextImageDisplay => Node::new(vec![text(), self.image_module(descriptor)]),
            TaskNodeType::ImageTextDisplay => Node::new(vec![self.image_module(descriptor), text()]),
            TaskNodeType::Link => {
                let mut keys = Vec::with_capacity(task_names.len());
                for task_name in &task_names {
                    let (label, target) = self.split_link_task(task_name);
                    if !self.index.contains(&target) {
                        tracing::warn!("Link option '{}' points at missing node '{}'", label, target);
                    }
                    if let Some(previous) = transitions.get(&label) {
                        tracing::warn!(
                            "Link option '{}' is repeated, '{}' replaces '{}'",
                            label,
                            target,
                            previous
                        );
                    }
                    transitions.insert(label.clone(), target);
                    keys.push(label);
                }
                Node::new(vec![
                    text(),
                    Module::RadioButtons {
                        options: self.localize_all(keys.iter().map(String::as_str), language),
                        selected: None,
                    },
                ])
                .with_option_keys(keys)
            }
            TaskNodeType::RadioButtons => Node::new(vec![
                text(),
                Module::RadioButtons {
                    options: labels(),
                    selected: None,
                },
            ]),
            TaskNodeType::RadioButtonsWithAnswer => {
                let (shown, expected) = split_answer(descriptor.text());
                let index = expected.and_then(|e| e.trim().parse().ok());
                Node::new(vec![
                    Module::Text(self.localize(shown, language)),
                    Module::RadioButtons {
                        options: labels(),
                        selected: None,
                    },
                ])
                .with_expected_answer(ExpectedAnswer::Index(index))
            }
            TaskNodeType::Checklist => Node::new(vec![
                text(),
                Module::Checkboxes {
                    options: labels(),
                    selected: BTreeSet::new(),
                },
            ]),
            TaskNodeType::Classification => Node::new(vec![
                text(),
                Module::List(
                    labels()
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| format!("{}) {label}", i + 1))
                        .collect(),
                ),
            ]),
            TaskNodeType::TextField => Node::new(vec![text(), text_input(LineMode::SingleLine, None, false)]),
            TaskNodeType::TextFieldNumerical => {
                Node::new(vec![text(), text_input(LineMode::SingleLine, None, true)])
            }
            TaskNodeType::TextFieldWithUnit => Node::new(vec![
                text(),
                text_input(
                    LineMode::SingleLine,
                    Some(self.localize(descriptor.unit(), language)),
                    false,
                ),
            ]),
            TaskNodeType::TextArea => Node::new(vec![text(), text_input(LineMode::MultiLine, None, false)]),
            TaskNodeType::TextFieldWithAnswer | TaskNodeType::TextAreaWithAnswer => {
                let (shown, expected) = split_answer(descriptor.text());
                let mode = if task_type == TaskNodeType::TextAreaWithAnswer {
                    LineMode::MultiLine
                } else {
                    LineMode::SingleLine
                };
                let alternatives: Vec<String> = expected
                    .map(|e| e.split(TEXT_ALTERNATIVE_SEPARATOR).map(str::to_string).collect())
                    .unwrap_or_default();
                Node::new(vec![
                    Module::Text(self.localize(shown, language)),
                    text_input(mode, None, false),
                ])
                .with_expected_answer(ExpectedAnswer::Texts(alternatives))
            }
            TaskNodeType::TimestampDisplay => Node::new(vec![
                text(),
                Module::Date(Some(chrono::Local::now().fixed_offset())),
            ]),
            TaskNodeType::Date => Node::new(vec![text(), Module::Date(None)]),
        };

        BuiltNode {
            node,
            transitions,
            node_type: NodeType::TaskNode,
            task_node_type: Some(task_type),
            checklist_target: descriptor.target_number_of_choices(),
        }
    }

    /// Split a link option `label~target` into its label and target.
    ///
    /// Node names contain `~` themselves, so the target is the longest
    /// suffix that names an existing element. When none does, the last
    /// component is taken as a (dead) target.
    fn split_link_task(&self, task_name: &str) -> (String, String) {
        let components: Vec<&str> = task_name.split(COMPONENT_SEPARATOR).collect();
        if components.len() < 2 {
            return (task_name.to_string(), task_name.to_string());
        }
        let split_at = (1..components.len())
            .find(|&i| self.index.contains(&components[i..].join("~")))
            .unwrap_or(components.len() - 1);
        (components[..split_at].join("~"), components[split_at..].join("~"))
    }
}

/// Display label of a non-link option: everything before the last
/// component when the name has several, the whole name otherwise.
fn option_label(task_name: &str) -> &str {
    task_name
        .rsplit_once(COMPONENT_SEPARATOR)
        .map_or(task_name, |(label, _)| label)
}

/// Split `Question Answer=expected` into the shown text and the expected answer.
fn split_answer(text: &str) -> (&str, Option<&str>) {
    match text.rsplit_once(ANSWER_SEPARATOR) {
        Some((shown, expected)) => (shown.trim_end().trim_end_matches('@').trim_end(), Some(expected)),
        None => (text, None),
    }
}
