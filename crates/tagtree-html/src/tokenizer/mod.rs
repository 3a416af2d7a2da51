//! Tag tokenizer module.
//!
//! Turns one line of markup at a time into [`Tag`](tagtree_dom::Tag) tokens.

/// Cursor and buffer helpers used by the state handlers.
mod helpers;
/// Tokenizer state machine implementation.
pub mod machine;

pub use machine::{TagTokenizer, TokenizerState};
