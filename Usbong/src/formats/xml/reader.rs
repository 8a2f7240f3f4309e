//! XML reading into an [`XmlElement`] tree

use super::element::XmlElement;
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Read an XML file from disk and return its root element
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_xml<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    let content = fs::read_to_string(path)?;
    parse_xml(&content)
}

/// Parse an XML string and return its root element
///
/// # Errors
/// Returns an error if the XML is malformed or has no root element.
pub fn parse_xml(content: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = stack.pop() {
                    attach(&mut stack, &mut root, completed);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape().map_err(Error::XmlError)?;
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| Error::InvalidDocument("document has no root element".to_string()))
}

fn element_from_start(e: &BytesStart) -> Result<XmlElement> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<process-definition lang="English" name="demo">
    <start-state name="start">
        <transition to="textDisplay~Hello"/>
    </start-state>
    <task-node name="textDisplay~Hello">
        <transition to="end~Bye" name="Any"/>
    </task-node>
</process-definition>"#;

        let root = parse_xml(xml).unwrap();
        assert_eq!(root.name, "process-definition");
        assert_eq!(root.attr("lang"), Some("English"));
        assert_eq!(root.children.len(), 2);

        let start = root.first_child("start-state").unwrap();
        assert_eq!(
            start.first_child("transition").and_then(|t| t.attr("to")),
            Some("textDisplay~Hello")
        );
    }

    #[test]
    fn test_parse_unescapes_attributes_and_text() {
        let xml = r#"<resources><string name="Tom &amp; Jerry">Tom at Jerry &lt;3</string></resources>"#;
        let root = parse_xml(xml).unwrap();
        let string = root.first_child("string").unwrap();
        assert_eq!(string.attr("name"), Some("Tom & Jerry"));
        assert_eq!(string.text, "Tom at Jerry <3");
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(parse_xml("").is_err());
    }

    #[test]
    fn test_parse_mismatched_tags_fails() {
        assert!(parse_xml("<a><b></a>").is_err());
    }
}
