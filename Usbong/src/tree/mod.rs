//! Tree navigation
//!
//! [`Tree`] owns a session over one document: the history of visited node
//! names, the current node and the transition table leaving it. Moving
//! forward evaluates the current node's answer state into a transition
//! key, looks the key up and builds the next node; moving back pops the
//! history and rebuilds the previous node from scratch.
//!
//! ```no_run
//! use usbong::tree::Tree;
//!
//! let mut tree = Tree::open("Demo.utree")?;
//! while !tree.current_node_is_end_state() {
//!     println!("{:?}", tree.current_node().texts());
//!     tree.save_state_of_last_node();
//!     if !tree.transition_to_next() {
//!         break;
//!     }
//! }
//! println!("{}", tree.generate_export()?);
//! # Ok::<(), usbong::Error>(())
//! ```

mod transition;

pub use transition::{NO_TRANSITION, YES_TRANSITION, answer_matches, target_transition_key};

use crate::answers::{self, ExportFormat, UsbongNodeState};
use crate::assets::{AssetProbe, FsAssetProbe};
use crate::config::PlayerConfig;
use crate::document::{DocumentIndex, NodeType, TransitionTable, locate_document};
use crate::error::{Error, Result};
use crate::formats::name::TaskNodeType;
use crate::localization::{HintsTable, Translator};
use crate::node::{BuiltNode, Node, NodeFactory};
use std::path::{Path, PathBuf};

/// A navigation session over one tree document.
pub struct Tree {
    /// Unpacked tree directory; `None` for trees built from memory
    root: Option<PathBuf>,
    index: DocumentIndex,
    translator: Translator,
    assets: Box<dyn AssetProbe>,
    config: PlayerConfig,
    current_language: String,
    hints: HintsTable,
    /// Visited node names; never empty, the last entry is the current node
    history: Vec<String>,
    current: BuiltNode,
    states: Vec<UsbongNodeState>,
}

impl Tree {
    /// Open an unpacked tree directory with the default configuration
    ///
    /// # Errors
    /// Returns an error if the document is missing, malformed, or its start
    /// node cannot be resolved.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::open_with_config(root, PlayerConfig::default())
    }

    /// Open an unpacked tree directory with the given configuration
    ///
    /// # Errors
    /// Returns an error if the document is missing, malformed, or its start
    /// node cannot be resolved.
    pub fn open_with_config<P: AsRef<Path>>(root: P, config: PlayerConfig) -> Result<Self> {
        let probe = FsAssetProbe::new(root.as_ref());
        Self::open_with(root, config, Box::new(probe))
    }

    /// Open an unpacked tree directory with a custom asset probe
    ///
    /// # Errors
    /// Returns an error if the document is missing, malformed, or its start
    /// node cannot be resolved.
    pub fn open_with<P: AsRef<Path>>(
        root: P,
        config: PlayerConfig,
        assets: Box<dyn AssetProbe>,
    ) -> Result<Self> {
        let root = root.as_ref();
        let document = locate_document(root)?;
        let index = DocumentIndex::load(&document)?;
        let translator = Translator::load(root, index.base_language());
        let mut tree = Self::from_parts(index, translator, config, assets)?;
        tree.root = Some(root.to_path_buf());
        tree.hints = HintsTable::load(root, &tree.current_language);

        tracing::info!(
            "Opened tree {} (base language {}, start node '{}')",
            document.display(),
            tree.base_language(),
            tree.current_node_name()
        );
        Ok(tree)
    }

    /// Build a session from an already indexed document
    ///
    /// # Errors
    /// Returns an error if the document has no start state or its target
    /// does not resolve.
    pub fn from_parts(
        index: DocumentIndex,
        translator: Translator,
        config: PlayerConfig,
        assets: Box<dyn AssetProbe>,
    ) -> Result<Self> {
        let start = index
            .start_node_name()
            .ok_or(Error::MissingStartState)?
            .to_string();
        let current_language = config
            .language
            .clone()
            .unwrap_or_else(|| index.base_language().to_string());

        let current = NodeFactory::new(&index, &translator, assets.as_ref())
            .with_end_state_text(&config.end_state_text)
            .build(&start, &current_language)
            .ok_or_else(|| Error::StartNodeNotFound { name: start.clone() })?;

        Ok(Self {
            root: None,
            hints: HintsTable::empty(&current_language),
            index,
            translator,
            assets,
            config,
            current_language,
            history: vec![start],
            current,
            states: Vec::new(),
        })
    }

    fn build(&self, name: &str) -> Option<BuiltNode> {
        NodeFactory::new(&self.index, &self.translator, self.assets.as_ref())
            .with_end_state_text(&self.config.end_state_text)
            .build(name, &self.current_language)
    }

    // ==================== State ====================

    /// Unpacked tree directory, if the tree was opened from disk
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    #[must_use]
    pub fn document(&self) -> &DocumentIndex {
        &self.index
    }

    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// The node being shown
    #[must_use]
    pub fn current_node(&self) -> &Node {
        &self.current.node
    }

    /// Mutable access for front ends filling in selections and inputs
    pub fn current_node_mut(&mut self) -> &mut Node {
        &mut self.current.node
    }

    /// Name of the node being shown
    #[must_use]
    pub fn current_node_name(&self) -> &str {
        self.history.last().map_or("", String::as_str)
    }

    /// Visited node names, oldest first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Transition table leaving the current node
    #[must_use]
    pub fn current_transition_info(&self) -> &TransitionTable {
        &self.current.transitions
    }

    /// Declared task type of the current node
    #[must_use]
    pub fn current_task_node_type(&self) -> Option<TaskNodeType> {
        self.current.task_node_type
    }

    /// Element kind of the current node
    #[must_use]
    pub fn current_node_type(&self) -> NodeType {
        self.current.node_type
    }

    /// Required tick count while the current node is a checklist
    #[must_use]
    pub fn checklist_target(&self) -> usize {
        self.current.checklist_target
    }

    // ==================== Languages ====================

    #[must_use]
    pub fn base_language(&self) -> &str {
        self.translator.base_language()
    }

    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// Base language plus every translated language, sorted
    #[must_use]
    pub fn available_languages(&self) -> Vec<String> {
        self.translator.available_languages()
    }

    /// Hints for the current language
    #[must_use]
    pub fn hints(&self) -> &HintsTable {
        &self.hints
    }

    /// Switch language, rebuilding the current node and reloading hints.
    ///
    /// History and position are unchanged; answers already entered on the
    /// current node are discarded by the rebuild.
    pub fn set_current_language(&mut self, language: &str) {
        if !self.available_languages().iter().any(|l| l == language) {
            tracing::warn!("Language '{}' has no translations, showing original text", language);
        }
        tracing::debug!("Switching language {} -> {}", self.current_language, language);
        self.current_language = language.to_string();

        let name = self.current_node_name().to_string();
        if let Some(built) = self.build(&name) {
            self.current = built;
        }
        self.hints = match &self.root {
            Some(root) => HintsTable::load(root, language),
            None => HintsTable::empty(language),
        };
    }

    // ==================== Navigation ====================

    /// Transition key derived from the current node's answer state
    #[must_use]
    pub fn current_target_transition_key(&self) -> String {
        target_transition_key(
            self.current.task_node_type,
            &self.current.node,
            self.current.checklist_target,
            &self.config,
        )
    }

    /// Name of the node the current answer leads to
    #[must_use]
    pub fn next_node_name(&self) -> Option<&str> {
        self.current
            .transitions
            .get(&self.current_target_transition_key())
    }

    /// Whether the next node exists in the document
    #[must_use]
    pub fn next_node_is_available(&self) -> bool {
        self.next_node_name().is_some_and(|name| self.index.contains(name))
    }

    /// Whether there is a node to go back to
    #[must_use]
    pub fn previous_node_is_available(&self) -> bool {
        self.history.len() > 1
    }

    #[must_use]
    pub fn current_node_is_end_state(&self) -> bool {
        self.current.node_type == NodeType::EndState
    }

    #[must_use]
    pub fn next_node_is_end_state(&self) -> bool {
        self.next_node_name().is_some_and(|name| self.index.is_end_state(name))
    }

    /// Whether a selection node other than a checklist still has nothing selected
    #[must_use]
    pub fn should_prevent_transition_to_next_task_node(&self) -> bool {
        self.current.task_node_type != Some(TaskNodeType::Checklist)
            && self.current.node.has_selection_module()
            && self.current.node.selected_count() == 0
    }

    /// Move to the next node. Returns `false`, leaving state unchanged, when
    /// no transition matches or its target does not exist.
    pub fn transition_to_next(&mut self) -> bool {
        let key = self.current_target_transition_key();
        let Some(name) = self.current.transitions.get(&key).map(str::to_string) else {
            tracing::debug!("No '{}' transition from '{}'", key, self.current_node_name());
            return false;
        };
        let Some(built) = self.build(&name) else {
            tracing::warn!("Transition '{}' from '{}' leads to missing node '{}'", key, self.current_node_name(), name);
            return false;
        };

        tracing::debug!("'{}' --{}--> '{}'", self.current_node_name(), key, name);
        self.history.push(name);
        self.current = built;
        true
    }

    /// Move back to the previous node, rebuilding it from the document.
    /// Returns `false` at the start node.
    pub fn transition_to_previous(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        let previous = self.history[self.history.len() - 2].clone();
        let Some(built) = self.build(&previous) else {
            return false;
        };

        tracing::debug!("'{}' <-- '{}'", previous, self.current_node_name());
        self.history.pop();
        self.current = built;
        true
    }

    // ==================== Answers ====================

    /// Record the current node's answer. Call once per node, before
    /// [`transition_to_next`](Self::transition_to_next).
    pub fn save_state_of_last_node(&mut self) {
        let state = UsbongNodeState::capture(
            &self.current.node,
            self.current.task_node_type,
            self.current_target_transition_key(),
        );
        self.states.push(state);
    }

    /// Recorded states, in visiting order
    #[must_use]
    pub fn usbong_node_states(&self) -> &[UsbongNodeState] {
        &self.states
    }

    /// Export recorded states in the configured format
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate_export(&self) -> Result<String> {
        answers::generate_export(&self.states, self.config.export_format)
    }

    /// Export recorded states in a specific format
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate_export_as(&self, format: ExportFormat) -> Result<String> {
        answers::generate_export(&self.states, format)
    }

    /// Write recorded states to a timestamped file in `dir`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_export<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let now = chrono::Local::now().fixed_offset();
        answers::write_export(&self.states, dir.as_ref(), self.config.export_format, &now)
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("current_language", &self.current_language)
            .field("history", &self.history)
            .field("states", &self.states.len())
            .finish_non_exhaustive()
    }
}
