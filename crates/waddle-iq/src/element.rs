//! Generic XML element tree used to build outbound stanzas.
//!
//! Encoders mutate an [`Element`] during a single call and hand the finished
//! tree to the packet. Wire conversion goes through `minidom`, which owns
//! escaping and namespace declarations.

use std::collections::BTreeMap;

use crate::IqError;

/// Namespace assumed for the stanza root when nothing else declares one.
pub const NS_CLIENT: &str = "jabber:client";

/// Body of an element: nothing, character data, or child elements.
///
/// Text and children are mutually exclusive; setting one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// Self-closing element.
    Empty,
    /// Character data.
    Text(&'a str),
    /// Ordered child elements (wire order).
    Children(&'a [Element]),
}

/// A node in an outbound XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: BTreeMap<String, String>,
    // Never both set: `set_content` clears children, `append` clears text.
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element that inherits its namespace from the parent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create an element with an explicit namespace.
    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.namespace = Some(namespace.into());
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Check name and declared namespace together.
    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn content(&self) -> Content<'_> {
        match &self.text {
            Some(text) => Content::Text(text),
            None if self.children.is_empty() => Content::Empty,
            None => Content::Children(&self.children),
        }
    }

    /// Character data, if this element carries text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child elements in wire order (empty for text or empty elements).
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children().iter().find(|child| child.name == name)
    }

    /// First child with the given name and declared namespace.
    pub fn find_child_ns(&self, name: &str, namespace: &str) -> Option<&Element> {
        self.children().iter().find(|child| child.is(name, namespace))
    }

    /// Set (or overwrite) an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.attributes.insert(key.into(), value.to_string());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn set_optional_attribute(&mut self, key: impl Into<String>, value: Option<impl ToString>) -> &mut Self {
        if let Some(value) = value {
            self.set_attribute(key, value);
        }
        self
    }

    /// Replace the body with character data.
    pub fn set_content(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.clear();
        self.text = Some(text.into());
        self
    }

    /// Append a child that inherits this element's namespace and return it.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut Element {
        self.append(Element::new(name))
    }

    /// Append a child with its own namespace and return it.
    pub fn add_child_ns(&mut self, name: impl Into<String>, namespace: impl Into<String>) -> &mut Element {
        self.append(Element::with_namespace(name, namespace))
    }

    /// Move an already built element under this one and return it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.text = None;
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Convert to a `minidom` tree, resolving inherited namespaces.
    pub fn to_minidom(&self, inherited_ns: &str) -> minidom::Element {
        let ns = self.namespace.as_deref().unwrap_or(inherited_ns);
        let mut builder = minidom::Element::builder(self.name.as_str(), ns.to_string());
        for (key, value) in &self.attributes {
            builder = builder.attr(key.clone(), value.clone());
        }
        match self.content() {
            Content::Empty => {}
            Content::Text(text) => {
                builder = builder.append(minidom::Node::Text(text.to_string()));
            }
            Content::Children(children) => {
                for child in children {
                    builder = builder.append(child.to_minidom(ns));
                }
            }
        }
        builder.build()
    }

    /// Serialize this element as a standalone XML fragment.
    pub fn to_xml(&self) -> Result<String, IqError> {
        write_minidom(&self.to_minidom(NS_CLIENT))
    }
}

impl From<&Element> for minidom::Element {
    fn from(element: &Element) -> Self {
        element.to_minidom(NS_CLIENT)
    }
}

impl From<&minidom::Element> for Element {
    fn from(element: &minidom::Element) -> Self {
        let mut converted = Element::with_namespace(element.name(), element.ns());
        for (key, value) in element.attrs() {
            converted.set_attribute(key, value);
        }

        let mut has_children = false;
        for child in element.children() {
            has_children = true;
            converted.append(Element::from(child));
        }
        if !has_children {
            let text = element.text();
            if !text.is_empty() {
                converted.set_content(text);
            }
        }
        converted
    }
}

pub(crate) fn write_minidom(element: &minidom::Element) -> Result<String, IqError> {
    let mut payload = Vec::new();
    element
        .write_to(&mut payload)
        .map_err(|error| IqError::Serialize(format!("failed to write <{}/>: {error}", element.name())))?;
    String::from_utf8(payload).map_err(|error| IqError::Serialize(format!("non UTF-8 output: {error}")))
}
