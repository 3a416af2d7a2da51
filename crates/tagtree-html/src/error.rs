//! Errors raised while tokenizing and building a tag tree.
//!
//! Every error is fatal to the conversion. [`SyntaxError`] names what went
//! wrong; [`ParseError`] adds where it happened (or wraps a read failure).

use std::io;

use thiserror::Error;

use crate::tokenizer::TokenizerState;

/// A malformed-input condition detected by the tokenizer or the tree builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The tag name (without its closing slash) is not in the vocabulary.
    #[error("invalid tag <{name}>: not part of the allowed tag vocabulary")]
    InvalidTag {
        /// Name as read, including a leading `/` for closing tags.
        name: String,
    },

    /// An unexpected character (or end of line) inside a tag.
    #[error("bad tag syntax in {state} state: {} in `{fragment}`", describe_found(.found))]
    BadTagSyntax {
        /// Tokenizer state that rejected the input.
        state: TokenizerState,
        /// The offending character, or `None` when the line ended mid-tag.
        found: Option<char>,
        /// Input from the tag's `<` through the offending character.
        fragment: String,
    },

    /// `<!` that is not followed by `--`.
    #[error("invalid comment syntax in `{fragment}`: comments must start with `<!--`")]
    BadCommentSyntax {
        /// Input from the `<` through the `!`.
        fragment: String,
    },

    /// An attribute's `=` is not followed by `"`.
    #[error("missing opening quote for the value of attribute `{attribute}`, found {found:?}")]
    MissingAttributeQuote {
        /// Attribute name read so far.
        attribute: String,
        /// Character found where `"` was expected.
        found: char,
    },

    /// A closing tag with no open tag to close.
    #[error("closing tag </{name}> must be preceded by a matching opening tag")]
    UnmatchedClose {
        /// Name of the closing tag, without the slash.
        name: String,
    },

    /// A closing tag whose name differs from the innermost open tag.
    #[error("opening and closing tags do not match: <{open}> closed by </{close}>")]
    TagMismatch {
        /// Innermost open tag.
        open: String,
        /// Closing tag name, without the slash.
        close: String,
    },

    /// Input ended while tags were still open.
    #[error("document ended with unclosed tags: {}", format_open(.open))]
    UnbalancedDocument {
        /// Names of the open tags, outermost first.
        open: Vec<String>,
    },

    /// A tag found before the root opened or after it closed.
    #[error("<{name}> appears outside the single root tag")]
    ContentOutsideRoot {
        /// Name of the stray tag.
        name: String,
    },

    /// Input contained no tags at all.
    #[error("document contains no tags")]
    EmptyDocument,

    /// Input ended inside a `<!-- ... -->` comment.
    #[error("comment opened with `<!--` is never closed")]
    UnterminatedComment,
}

#[allow(clippy::ref_option)]
fn describe_found(found: &Option<char>) -> String {
    found.map_or_else(
        || "unexpected end of line".to_string(),
        |c| format!("unexpected character {c:?}"),
    )
}

fn format_open(open: &[String]) -> String {
    open.iter()
        .map(|name| format!("<{name}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl SyntaxError {
    /// Attach the 1-based input line number where the error was detected.
    #[must_use]
    pub fn at_line(self, line: usize) -> ParseError {
        ParseError::Syntax { line, error: self }
    }
}

/// Failure of a whole conversion.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed input.
    #[error("syntax error on line {line}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the input.
        #[source]
        error: SyntaxError,
    },

    /// The line source failed.
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The syntax error, if this is not an I/O failure.
    #[must_use]
    pub const fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax { error, .. } => Some(error),
            Self::Io(_) => None,
        }
    }

    /// The line the syntax error was detected on.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
