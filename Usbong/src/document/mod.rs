//! Tree document index
//!
//! A tree document is a jBPM-style `process-definition`:
//!
//! ```xml
//! <process-definition lang="English">
//!     <start-state name="start"><transition to="textDisplay~Welcome"/></start-state>
//!     <task-node name="textDisplay~Welcome"><transition to="end~Done" name="Any"/></task-node>
//!     <end-state name="end~Done"/>
//! </process-definition>
//! ```
//!
//! [`DocumentIndex`] resolves node names to their elements and extracts
//! transition tables. It is read-only after construction.

mod index;
mod transitions;

pub use index::{DocumentIndex, NodeType, locate_document};
pub use transitions::{ANY_TRANSITION, TransitionTable};
