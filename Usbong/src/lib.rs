//! # Usbong
//!
//! A decision-tree player for Usbong `.utree` documents.
//!
//! A tree is an unpacked directory holding one XML process definition,
//! optional `trans/<Language>.xml` translation tables, `hints/` glossaries
//! and `res/`/`audio/` assets. Every node is described entirely by its
//! name: `checkList~2~Which apply?` is a checklist that needs two ticks.
//!
//! ## Supported Node Types
//!
//! - **Displays** - text, image, text+image and timestamps
//! - **Selections** - links, radio buttons, checklists and classifications
//! - **Inputs** - text fields, text areas, numeric/unit fields and dates
//! - **Quizzes** - radio buttons and text inputs with an expected answer
//!
//! ## Quick Start
//!
//! ```no_run
//! use usbong::prelude::*;
//!
//! let mut tree = Tree::open("trees/Demo")?;
//! println!("{:?}", tree.current_node().texts());
//!
//! // Answer and move on
//! tree.current_node_mut().select(0);
//! tree.save_state_of_last_node();
//! if tree.transition_to_next() {
//!     println!("now at {}", tree.current_node_name());
//! }
//!
//! // Step back
//! tree.transition_to_previous();
//!
//! println!("{}", tree.generate_export()?);
//! # Ok::<(), usbong::Error>(())
//! ```
//!
//! ## Decoding Names
//!
//! ```
//! use usbong::formats::name::{NodeDescriptor, TaskNodeType};
//!
//! let descriptor = NodeDescriptor::decode("textFieldWithUnit~kg~Your weight", "English");
//! assert_eq!(descriptor.task_node_type(), Some(TaskNodeType::TextFieldWithUnit));
//! assert_eq!(descriptor.unit(), "kg");
//! assert_eq!(descriptor.text(), "Your weight");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `usbong` command-line binary

pub mod answers;
pub mod assets;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod localization;
pub mod node;
pub mod tree;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::config::{AnswerMatching, PlayerConfig};
    pub use crate::formats::name::{NodeDescriptor, TaskNodeType};
    pub use crate::document::{DocumentIndex, NodeType, TransitionTable, locate_document};
    pub use crate::localization::{HintsTable, Translator, language_code};
    pub use crate::assets::{AssetProbe, FsAssetProbe, NoAssets};
    pub use crate::node::{Module, Node, NodeFactory};
    pub use crate::tree::Tree;
    pub use crate::answers::{ExportFormat, UsbongNodeState};
}

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
