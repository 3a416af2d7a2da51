//! Helper types for the tag tokenizer.
//!
//! [`Scan`] holds everything that lives for a single `next_tag` call: the
//! line, the read position, the current state and the partial buffers. It is
//! dropped when the call returns, so a failed tag releases its buffers on the
//! way out.

use tagtree_common::warning::warn_once;
use tagtree_dom::Tag;

use super::machine::TokenizerState;
use crate::error::SyntaxError;

/// Marker that opens a comment, starting at the `!` after `<`.
pub(super) const COMMENT_OPEN: &str = "!--";
/// Marker that closes a comment.
pub(super) const COMMENT_CLOSE: &str = "-->";

/// What the main loop does after a state handler accepts a character.
pub(super) enum Step {
    /// Move past the current character.
    Next,
    /// A `<!--` was recognized; set the comment flag and skip the marker.
    OpenComment,
    /// A tag is complete; move past its `>` and return it.
    Emit(Tag),
}

/// Per-call tokenizer state over one line.
pub(super) struct Scan<'a> {
    pub(super) line: &'a str,
    /// Byte offset of the current character.
    pub(super) pos: usize,
    pub(super) state: TokenizerState,
    /// Byte offset of the `<` of the tag being read.
    pub(super) tag_start: usize,
    /// Text seen before the `<`.
    pub(super) leading: String,
    pub(super) name: String,
    pub(super) attr_name: String,
    pub(super) attr_value: String,
    /// Tag under construction once attributes begin.
    pub(super) tag: Tag,
}

// =============================================================================
// Input Helpers
// =============================================================================

impl<'a> Scan<'a> {
    pub(super) fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            state: TokenizerState::AwaitingOpenBracket,
            tag_start: 0,
            leading: String::new(),
            name: String::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            tag: Tag::default(),
        }
    }

    /// The character at the read position.
    pub(super) fn current(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    /// Move the read position forward by `len` bytes.
    pub(super) const fn advance_by(&mut self, len: usize) {
        self.pos += len;
    }

    /// Everything from the read position to the end of the line.
    pub(super) fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Check if the input at the read position starts with `target`.
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        self.rest().starts_with(target)
    }
}

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Scan<'_> {
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        #[cfg(feature = "parse-trace")]
        eprintln!("[TOKENIZER] {} -> {new_state}", self.state);
        self.state = new_state;
    }

    /// Called when the line runs out. Only the open bracket state may end a
    /// line; anywhere else the tag was cut off.
    pub(super) fn end_of_line(&mut self) -> Result<Option<Tag>, SyntaxError> {
        if self.state == TokenizerState::AwaitingOpenBracket {
            self.discard_leading_text(None);
            return Ok(None);
        }

        Err(SyntaxError::BadTagSyntax {
            state: self.state,
            found: None,
            fragment: self.line[self.tag_start..self.pos].to_string(),
        })
    }

    /// Drop the leading text buffer, warning if it held anything but spaces.
    ///
    /// `before` names the tag the text preceded, or `None` for the end of a line.
    pub(super) fn discard_leading_text(&mut self, before: Option<&str>) {
        let text = std::mem::take(&mut self.leading);
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let place = before.map_or_else(
            || "at end of line".to_string(),
            |name| format!("before <{name}>"),
        );
        warn_once(
            "HTML",
            &format!("text {text:?} {place} is not attached to any tag"),
        );
    }
}

// =============================================================================
// Error Helpers
// =============================================================================

impl Scan<'_> {
    /// Input from the tag's `<` through `c`, the character at the read position.
    pub(super) fn fragment_through(&self, c: char) -> String {
        self.line[self.tag_start..self.pos + c.len_utf8()].to_string()
    }

    /// `BadTagSyntax` for `c` in the current state.
    pub(super) fn bad_tag(&self, c: char) -> SyntaxError {
        SyntaxError::BadTagSyntax {
            state: self.state,
            found: Some(c),
            fragment: self.fragment_through(c),
        }
    }
}
