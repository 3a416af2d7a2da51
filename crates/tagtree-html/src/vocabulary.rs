//! The closed tag vocabulary and tag classification.
//!
//! Only the names listed in [`ALLOWED_TAGS`] are accepted, compared exactly
//! and case-sensitively. The list is fixed: it is not configurable at runtime.

use strum_macros::Display;

use tagtree_dom::Tag;

use crate::error::SyntaxError;

/// Every tag name the tokenizer output may use (closing tags add a `/`).
pub const ALLOWED_TAGS: &[&str] = &[
    "body", "form", "input", "p", "span", "div", "a", "strong", "section", "h1", "h2", "h3", "h4",
    "h5", "h6", "button", "br", "img", "ul", "ol", "li",
];

/// Tags that never take a closing counterpart and are always leaves.
pub const VOID_TAGS: &[&str] = &["br", "img", "input"];

/// Punctuation allowed inside a quoted attribute value, besides ASCII letters and digits.
pub const ATTRIBUTE_VALUE_PUNCTUATION: &str = "%?!#$%&'=()*+,-./:;[] ";

/// How the tree builder treats a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagKind {
    /// `<div>`: pushed on the open-tag stack.
    #[strum(serialize = "opening")]
    Opening,
    /// `</div>`: closes the innermost open tag.
    #[strum(serialize = "closing")]
    Closing,
    /// `<br>`, `<img>`, `<input>`: appended as a leaf.
    #[strum(serialize = "non-closing")]
    NonClosing,
}

/// Remove one leading `/`, if present.
#[must_use]
pub fn strip_closing_slash(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

/// True if `raw_name`, without one leading `/`, is in [`ALLOWED_TAGS`].
#[must_use]
pub fn is_allowed_tag_name(raw_name: &str) -> bool {
    ALLOWED_TAGS.contains(&strip_closing_slash(raw_name))
}

/// True if `name` is in [`VOID_TAGS`]. A closing form such as `/br` is not.
#[must_use]
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// True if `c` may appear inside a quoted attribute value.
#[must_use]
pub fn is_allowed_attribute_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ATTRIBUTE_VALUE_PUNCTUATION.contains(c)
}

/// Classify a token by its name alone.
///
/// # Errors
///
/// Returns [`SyntaxError::InvalidTag`] if the name is not in the vocabulary.
pub fn classify(tag: &Tag) -> Result<TagKind, SyntaxError> {
    if !is_allowed_tag_name(&tag.name) {
        return Err(SyntaxError::InvalidTag {
            name: tag.name.clone(),
        });
    }

    if is_void_tag(&tag.name) {
        Ok(TagKind::NonClosing)
    } else if tag.is_closing_token() {
        Ok(TagKind::Closing)
    } else {
        Ok(TagKind::Opening)
    }
}
