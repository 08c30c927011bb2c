//! Minimal element tree built from quick-xml events
//!
//! DBLP documents are small and shallow, so the parsers work on a fully
//! materialized tree and select nodes with child-by-name queries, the way a
//! path expression such as `/dblp/*[1]/author/text()` would.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{DblpError, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| DblpError::XmlError(format!("bad attribute in <{name}>: {e}")))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| DblpError::XmlError(format!("bad attribute value in <{name}>: {e}")))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Child elements with the given tag name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |element| element.name == name)
    }

    pub fn first_child_named(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|element| element.name == name)
    }

    /// First child element regardless of name
    pub fn first_element(&self) -> Option<&XmlElement> {
        self.elements().next()
    }

    /// Concatenated text of this element and its descendants, trimmed.
    ///
    /// `None` when the element holds no non-whitespace text.
    pub fn text(&self) -> Option<String> {
        let mut text = String::new();
        self.collect_text(&mut text);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Text of every child named `name`, skipping text-less ones
    pub fn texts_of(&self, name: &str) -> Vec<String> {
        self.children_named(name)
            .filter_map(XmlElement::text)
            .collect()
    }

    /// Text of the first child named `name` that has any
    pub fn first_text_of(&self, name: &str) -> Option<String> {
        self.children_named(name).find_map(XmlElement::text)
    }
}

/// Parse a whole document and return its root element
pub(crate) fn parse_document(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(XmlElement::from_start(e)?),
            Ok(Event::Empty(ref e)) => {
                let element = XmlElement::from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| DblpError::XmlError("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e.unescape().map_err(|err| {
                        DblpError::XmlError(format!(
                            "bad text at position {}: {err}",
                            reader.buffer_position()
                        ))
                    })?;
                    parent.children.push(XmlNode::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    parent.children.push(XmlNode::Text(text));
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions and doctypes carry no data
            Ok(_) => {}
            Err(e) => {
                return Err(DblpError::XmlError(format!(
                    "error at position {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(DblpError::XmlError(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| DblpError::XmlError("document has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(DblpError::XmlError(format!(
            "multiple root elements (second is <{}>)",
            element.name
        ))),
    }
}
