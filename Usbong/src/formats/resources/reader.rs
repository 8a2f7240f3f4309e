//! Resource file reading

use super::ResourceTable;
use crate::error::Result;
use crate::formats::xml::{XmlElement, parse_xml};
use std::fs;
use std::path::Path;

const STRING_TAG: &str = "string";

/// Read a resource file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_resources<P: AsRef<Path>>(path: P) -> Result<ResourceTable> {
    let content = fs::read_to_string(path)?;
    parse_resources(&content)
}

/// Parse a resource table from an XML string
///
/// Entries without a `name` attribute are skipped. Later duplicates
/// replace earlier ones.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_resources(content: &str) -> Result<ResourceTable> {
    let root = parse_xml(content)?;
    let mut table = ResourceTable::new();
    collect_strings(&root, &mut table);
    Ok(table)
}

fn collect_strings(element: &XmlElement, table: &mut ResourceTable) {
    for child in &element.children {
        if child.name == STRING_TAG {
            if let Some(name) = child.attr("name") {
                table.insert(name, child.text.clone());
            }
        } else {
            collect_strings(child, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resources() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="Hello">Kumusta</string>
    <string name="Yes">Oo</string>
    <string>orphan</string>
    <string name="Empty"/>
</resources>"#;
        let table = parse_resources(xml).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Hello"), Some("Kumusta"));
        assert_eq!(table.get("Yes"), Some("Oo"));
        assert_eq!(table.get("Empty"), Some(""));
        assert_eq!(table.get("orphan"), None);
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let xml = r#"<resources><string name="a">1</string><string name="a">2</string></resources>"#;
        let table = parse_resources(xml).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some("2"));
    }
}
