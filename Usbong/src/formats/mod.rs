//! File format parsing
//!
//! - [`xml`] - generic element tree read from the tree document
//! - [`name`] - tilde-encoded node names
//! - [`resources`] - `<resources><string name="..">` translation and hint tables

pub mod name;
pub mod resources;
pub mod xml;
