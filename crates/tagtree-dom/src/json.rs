//! JSON rendering of a tag tree.
//!
//! Every tag becomes one object whose keys appear in this order:
//!
//! ```text
//! name, content?, children_length, attributes?, attribute_length, children?
//! ```
//!
//! Keys marked `?` are omitted when the tag has no content, no attributes or
//! no children respectively. A rendered document is a one-element array
//! holding the root object.

use serde_json::{Map, Value};

use crate::{Attribute, Tag};

fn attribute_to_json(attr: &Attribute) -> Value {
    let mut object = Map::new();
    let _ = object.insert("name".to_owned(), Value::from(attr.name.as_str()));
    let _ = object.insert("value".to_owned(), Value::from(attr.value.as_str()));
    Value::Object(object)
}

/// Render `tag` and its subtree as a JSON object.
#[must_use]
pub fn to_json(tag: &Tag) -> Value {
    let mut object = Map::new();
    let _ = object.insert("name".to_owned(), Value::from(tag.name.as_str()));

    if let Some(content) = &tag.content {
        let _ = object.insert("content".to_owned(), Value::from(content.as_str()));
    }

    let _ = object.insert(
        "children_length".to_owned(),
        Value::from(tag.children.len()),
    );

    if !tag.attributes.is_empty() {
        let attributes = tag.attributes.iter().map(attribute_to_json).collect();
        let _ = object.insert("attributes".to_owned(), Value::Array(attributes));
    }

    let _ = object.insert(
        "attribute_length".to_owned(),
        Value::from(tag.attributes.len()),
    );

    if !tag.children.is_empty() {
        let children = tag.children.iter().map(to_json).collect();
        let _ = object.insert("children".to_owned(), Value::Array(children));
    }

    Value::Object(object)
}

/// Render a whole document: a one-element array holding the root.
#[must_use]
pub fn to_json_document(root: &Tag) -> Value {
    Value::Array(vec![to_json(root)])
}

/// Pretty-print [`to_json_document`] with two-space indentation.
///
/// # Errors
///
/// Returns the serializer error if writing the JSON text fails.
pub fn to_json_string_pretty(root: &Tag) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_json_document(root))
}
