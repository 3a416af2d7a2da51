//! Tokenizer and tree builder for the restricted HTML dialect read by tagtree.
//!
//! # Scope
//!
//! This crate implements:
//! - **Lexical classifier** ([`vocabulary`])
//!   - The closed set of allowed tag names and the void subset
//!   - Opening / closing / non-closing classification
//!
//! - **Tag tokenizer** ([`tokenizer`])
//!   - One tag per call, character by character, over a single line
//!   - Double-quoted attribute values with a fixed character set
//!   - `<!-- ... -->` comments, which may span lines
//!
//! - **Tree builder** ([`parser`])
//!   - Explicit stack of open tags
//!   - Exactly one root, strict open/close matching
//!
//! Malformed input is never repaired: every problem is reported as a
//! [`SyntaxError`] and no partial tree is returned.
//!
//! # Not Supported
//!
//! - Tag names outside the vocabulary, in any letter case
//! - Unquoted or single-quoted attribute values
//! - Text nodes (only the text right before a closing tag is kept)

/// Error types shared by the tokenizer and tree builder.
pub mod error;
/// Tree construction from a token stream.
pub mod parser;
/// Tag tokenizer state machine.
pub mod tokenizer;
/// Allowed tag names and tag classification.
pub mod vocabulary;

pub use error::{ParseError, SyntaxError};
pub use parser::{
    BuildOptions, TreeBuilder, build_tree, build_tree_from_reader, build_tree_with_options,
    parse_str,
};
pub use tokenizer::{TagTokenizer, TokenizerState};
pub use vocabulary::{TagKind, classify, is_allowed_tag_name, is_void_tag};

pub use tagtree_dom::{Attribute, Tag};
