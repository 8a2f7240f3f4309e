//! Nodes and their construction
//!
//! A [`Node`] is an ordered list of [`Module`]s (text, image, options,
//! input fields, dates). Display modules are fixed once built; the
//! answerable ones (selection, text, date) are filled in by whatever front
//! end presents the node, and the tree reads them back to pick the next
//! transition.

mod factory;
mod types;

pub use factory::{ANSWER_SEPARATOR, BuiltNode, DEFAULT_END_STATE_TEXT, NodeFactory, UNKNOWN_NODE_TEXT};
pub use types::{ExpectedAnswer, LineMode, Module, Node, NodeAssets};
