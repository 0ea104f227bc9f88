//! Minimal read-only XML document access for logging descriptors.

use std::path::Path;

use crate::error::{Error, Result};

/// Element access needed by the logging descriptor parser
pub trait Element {
    fn name(&self) -> &str;

    /// First child element named `tag`
    fn child(&self, tag: &str) -> Option<&Self>;

    /// Text content, `None` when the element has no (non-blank) text
    fn text(&self) -> Option<&str>;
}

/// Source of a parsed document
pub trait DocumentReader {
    type Element: Element;

    /// Root element if it is named `name`
    fn root_element(&self, name: &str) -> Result<Option<&Self::Element>>;
}

/// Owned XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let text = node
            .first_child()
            .filter(|child| child.is_text())
            .and_then(|child| child.text())
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);

        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(XmlElement::from_node)
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            text,
            children,
        }
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }
}

impl Element for XmlElement {
    fn name(&self) -> &str {
        &self.name
    }

    fn child(&self, tag: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == tag)
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// XML document parsed with `roxmltree` into an owned element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn parse(content: &str) -> Result<Self> {
        let document = roxmltree::Document::parse(content)
            .map_err(|e| Error::MalformedLoggingDescriptor(e.to_string()))?;
        Ok(Self {
            root: XmlElement::from_node(document.root_element()),
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

impl DocumentReader for XmlDocument {
    type Element = XmlElement;

    fn root_element(&self, name: &str) -> Result<Option<&XmlElement>> {
        Ok((self.root.name == name).then_some(&self.root))
    }
}
