//! Indented preview of a tag tree, one `<name>` per line.

use crate::Tag;

const INDENT: &str = "  ";

fn push_tag(out: &mut String, tag: &Tag, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push('<');
    out.push_str(&tag.name);
    out.push_str(">\n");
    for child in &tag.children {
        push_tag(out, child, depth + 1);
    }
}

/// Render `root` as an outline, children indented two spaces per level.
///
/// ```
/// use tagtree_dom::{Tag, outline};
///
/// let mut div = Tag::new("div");
/// div.add_child(Tag::new("p"));
/// assert_eq!(outline(&div), "<div>\n  <p>\n");
/// ```
#[must_use]
pub fn outline(root: &Tag) -> String {
    let mut out = String::new();
    push_tag(&mut out, root, 0);
    out
}
