//! Tag tree document model for the tagtree converter.
//!
//! A parsed document is a single [`Tag`] that owns its children. There are no
//! parent links: the tree builder keeps its own stack while building, and the
//! finished tree is plain parent-to-child ownership, so it can be moved,
//! cloned or dropped as a unit.

use std::fmt;

/// JSON rendering in the converter's output layout.
pub mod json;
/// Indented `<name>` listing of a tree.
pub mod outline;

pub use json::{to_json, to_json_document, to_json_string_pretty};
pub use outline::outline;

/// A `name="value"` pair on a tag.
///
/// Names are not unique: repeated attributes are kept in the order they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, e.g. `class`.
    pub name: String,
    /// Attribute value without the surrounding quotes.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// One markup element.
///
/// The tokenizer also uses this type for the tokens it emits. A closing token
/// has a name starting with `/` and may carry the text that preceded it in
/// `content`; it is consumed by the tree builder and never appears in a
/// finished tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag name without angle brackets (`div`, or `/div` for a closing token).
    pub name: String,
    /// Text captured immediately before the matching closing tag, if any.
    pub content: Option<String>,
    /// Attributes in parse order.
    pub attributes: Vec<Attribute>,
    /// Child tags in document order.
    pub children: Vec<Tag>,
}

impl Tag {
    /// Create a tag with no content, attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a tag carrying `content`. Empty content is stored as `None`.
    #[must_use]
    pub fn with_content(name: impl Into<String>, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            content: content.filter(|text| !text.is_empty()),
            ..Self::default()
        }
    }

    /// Append `child` after the existing children.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Append `attribute` after the existing attributes.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// The value of the first attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// The name with one leading `/` removed.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }

    /// True for a closing token such as `</p>`.
    #[must_use]
    pub fn is_closing_token(&self) -> bool {
        self.name.starts_with('/')
    }

    /// True when the tag has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, pre-order walk over this tag and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First tag called `name` in document order, including `self`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        self.descendants().find(|tag| tag.name == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}=\"{}\"", attr.name, attr.value)?;
        }
        write!(f, ">")
    }
}

/// Iterator returned by [`Tag::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Tag>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.stack.pop()?;
        // Reversed so the first child is visited next.
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}
