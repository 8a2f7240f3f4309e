//! XML element tree module

mod element;
mod reader;

pub use element::XmlElement;
pub use reader::{parse_xml, read_xml};
