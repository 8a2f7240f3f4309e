//! Node name decoding
//!
//! Every node in a tree document is named with a compact, tilde-separated
//! descriptor: `type~param~...~text`. A name with a single component is an
//! implicit classification (numbered list) node.
//!
//! ```
//! use usbong::formats::name::{NodeDescriptor, TaskNodeType};
//!
//! let descriptor = NodeDescriptor::decode("checkList~2~Pick two fruits", "English");
//! assert_eq!(descriptor.task_node_type(), Some(TaskNodeType::Checklist));
//! assert_eq!(descriptor.target_number_of_choices(), 2);
//! assert_eq!(descriptor.text(), "Pick two fruits");
//! ```

mod descriptor;
mod node_type;

pub use descriptor::{COMPONENT_SEPARATOR, NodeDescriptor};
pub use node_type::TaskNodeType;
