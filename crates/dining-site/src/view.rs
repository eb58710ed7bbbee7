//! Page abstraction that rendering writes through.
//!
//! Defines the `PageView` trait, which addresses page elements by their
//! fixed identifier, the `Node` tree used for generated cards and rows, and
//! `MemoryPage`, an in-memory page used by tests and the CLI preview.

use std::collections::BTreeMap;

use serde::Serialize;

/// Visual state of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    /// Class the feedback element carries for this tone.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// A page whose elements are addressed by identifier.
///
/// Every write is a no-op when the identifier does not exist on the page.
pub trait PageView {
    /// Whether an element with this identifier exists.
    fn contains(&self, id: &str) -> bool;
    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str);
    /// Set a single attribute (e.g. `src`, `poster`, `href`).
    fn set_attribute(&mut self, id: &str, name: &str, value: &str);
    /// Mark the element with a success or error tone, replacing its class.
    fn set_tone(&mut self, id: &str, tone: Tone);
    /// Ask a media element to reload its source.
    fn reload_media(&mut self, id: &str);
    /// Discard the element's children and append `children` in order.
    fn replace_children(&mut self, id: &str, children: Vec<Node>);
}

/// A generated element: menu card, video card or stat row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// First node (depth-first, self included) carrying `class`.
    pub fn find(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(class))
    }
}

/// Static state of one element in a `MemoryPage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub text: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "is_zero")]
    pub reloads: u32,
}

impl Element {
    pub fn new(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// In-memory page keyed by element identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MemoryPage {
    elements: BTreeMap<String, Element>,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of an element with static text.
    pub fn with(mut self, id: &str, tag: &str, text: &str) -> Self {
        self.insert(id, Element::new(tag, text));
        self
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Text content of an element, if it exists.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    /// Generated children of an element; empty when the element is missing.
    pub fn children(&self, id: &str) -> &[Node] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let element = self.elements.get_mut(id);
        if element.is_none() {
            tracing::trace!(id, "element not on page, skipping write");
        }
        element
    }
}

impl PageView for MemoryPage {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
        }
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn set_tone(&mut self, id: &str, tone: Tone) {
        if let Some(element) = self.element_mut(id) {
            element
                .attributes
                .insert("class".to_string(), tone.class().to_string());
            element.tone = Some(tone);
        }
    }

    fn reload_media(&mut self, id: &str) {
        if let Some(element) = self.element_mut(id) {
            element.reloads += 1;
        }
    }

    fn replace_children(&mut self, id: &str, children: Vec<Node>) {
        if let Some(element) = self.element_mut(id) {
            element.children = children;
        }
    }
}
