//! Name lookup over a parsed tree document

use super::transitions::{ANY_TRANSITION, TransitionTable};
use crate::error::{Error, Result};
use crate::formats::xml::{XmlElement, parse_xml, read_xml};
use crate::localization::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const ROOT_TAG: &str = "process-definition";
const START_STATE_TAG: &str = "start-state";
const TRANSITION_TAG: &str = "transition";
const TASK_TAG: &str = "task";

/// Element kind a node name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    TaskNode,
    EndState,
    Decision,
}

impl NodeType {
    /// Lookup precedence: a name declared as several kinds resolves to the first
    pub const PRECEDENCE: [NodeType; 3] = [NodeType::TaskNode, NodeType::EndState, NodeType::Decision];

    /// XML tag of this element kind
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::TaskNode => "task-node",
            Self::EndState => "end-state",
            Self::Decision => "decision",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|t| t.tag() == tag)
    }
}

/// Locate the primary XML file of an unpacked tree directory.
///
/// The file shares the directory's base name: `Demo.utree/Demo.xml`.
///
/// # Errors
/// Returns an error if `root` is not a directory or the file is missing.
pub fn locate_document(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    let stem = root
        .file_stem()
        .ok_or_else(|| Error::InvalidPath(root.display().to_string()))?;
    let mut file_name = stem.to_os_string();
    file_name.push(".xml");
    let path = root.join(file_name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::DocumentNotFound { path })
    }
}

/// Index of the named elements of a tree document.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    root: XmlElement,
    /// Position of the first element with a given name, per kind
    positions: HashMap<NodeType, HashMap<String, usize>>,
}

impl DocumentIndex {
    /// Build an index over a parsed `process-definition` element
    ///
    /// # Errors
    /// Returns an error if the root element is not a `process-definition`.
    pub fn from_root(root: XmlElement) -> Result<Self> {
        if root.name != ROOT_TAG {
            return Err(Error::InvalidDocument(format!(
                "expected <{ROOT_TAG}> root, found <{}>",
                root.name
            )));
        }

        let mut positions: HashMap<NodeType, HashMap<String, usize>> = HashMap::new();
        for (i, child) in root.children.iter().enumerate() {
            let (Some(kind), Some(name)) = (NodeType::from_tag(&child.name), child.attr("name")) else {
                continue;
            };
            positions
                .entry(kind)
                .or_default()
                .entry(name.to_string())
                .or_insert(i);
        }

        Ok(Self { root, positions })
    }

    /// Parse and index an XML string
    ///
    /// # Errors
    /// Returns an error if the XML is malformed or not a tree document.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_root(parse_xml(content)?)
    }

    /// Read and index an XML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a tree document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_root(read_xml(path)?)
    }

    /// The `process-definition` element
    #[must_use]
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Declared base language (`lang` attribute), `English` when absent
    #[must_use]
    pub fn base_language(&self) -> &str {
        match self.root.attr("lang").map(str::trim) {
            Some(lang) if !lang.is_empty() => lang,
            _ => DEFAULT_LANGUAGE,
        }
    }

    /// Target of the start state's transition
    #[must_use]
    pub fn start_node_name(&self) -> Option<&str> {
        self.root
            .first_child(START_STATE_TAG)?
            .first_child(TRANSITION_TAG)?
            .attr("to")
            .filter(|to| !to.is_empty())
    }

    /// Find an element by node name, task nodes first, then end states, then decisions
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(NodeType, &XmlElement)> {
        NodeType::PRECEDENCE.into_iter().find_map(|kind| {
            self.positions
                .get(&kind)
                .and_then(|names| names.get(name))
                .map(|&i| (kind, &self.root.children[i]))
        })
    }

    /// Kind of the element a name resolves to
    #[must_use]
    pub fn node_type(&self, name: &str) -> Option<NodeType> {
        self.find(name).map(|(kind, _)| kind)
    }

    /// Whether a name resolves to any element
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Whether a name resolves to an end state
    #[must_use]
    pub fn is_end_state(&self, name: &str) -> bool {
        self.node_type(name) == Some(NodeType::EndState)
    }

    /// Transition table from an element's `<transition>` children.
    ///
    /// A missing `name` means [`ANY_TRANSITION`]; a missing `to` yields an
    /// empty (dead-end) target.
    #[must_use]
    pub fn transitions(&self, element: &XmlElement) -> TransitionTable {
        element
            .children_named(TRANSITION_TAG)
            .map(|t| {
                (
                    t.attr("name").unwrap_or(ANY_TRANSITION),
                    t.attr("to").unwrap_or_default(),
                )
            })
            .collect()
    }

    /// `name` attributes of an element's `<task>` children
    #[must_use]
    pub fn task_names<'a>(&self, element: &'a XmlElement) -> Vec<&'a str> {
        element
            .children_named(TASK_TAG)
            .filter_map(|t| t.attr("name"))
            .collect()
    }

    /// Every named node element in document order
    #[must_use]
    pub fn node_names(&self) -> Vec<(NodeType, &str)> {
        self.root
            .children
            .iter()
            .filter_map(|c| Some((NodeType::from_tag(&c.name)?, c.attr("name")?)))
            .collect()
    }
}
