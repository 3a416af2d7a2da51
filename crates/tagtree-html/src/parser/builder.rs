//! Folds tag tokens into a single-rooted tree.
//!
//! Open tags live on an explicit stack of owned [`Tag`]s. The parent of the
//! innermost open tag is simply the entry below it, so closing a tag pops it
//! and appends it to whatever is now on top. The finished root is kept apart
//! from the stack; any tag that turns up after it is an error.

use tagtree_dom::Tag;

use crate::error::{ParseError, SyntaxError};
use crate::tokenizer::TagTokenizer;
use crate::vocabulary::{TagKind, classify};

/// Tree builder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Reject input that ends with tags still open.
    ///
    /// When false, the end of input closes every open tag, innermost first,
    /// as if each had a matching closing tag with no content.
    pub strict_balance: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strict_balance: true,
        }
    }
}

/// Incremental tree builder: feed it lines, then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
    tokenizer: TagTokenizer,
    /// Open tags, innermost last.
    stack_of_open_tags: Vec<Tag>,
    root: Option<Tag>,
    /// Number of lines fed so far.
    line: usize,
}

impl TreeBuilder {
    /// Create a builder with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options.
    #[must_use]
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Number of tags currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack_of_open_tags.len()
    }

    /// Tokenize one line and fold every tag on it into the tree.
    ///
    /// Text holding embedded newlines is split and fed as several lines, each
    /// counted separately. A single trailing `\n` (or `\r\n`) is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first tokenizer or nesting error, tagged with its line number.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        for segment in line.split('\n') {
            self.feed_single_line(segment.strip_suffix('\r').unwrap_or(segment))?;
        }
        Ok(())
    }

    fn feed_single_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;
        let mut rest = line;

        while let Some(tag) = self
            .tokenizer
            .next_tag(&mut rest)
            .map_err(|error| error.at_line(self.line))?
        {
            self.process(tag).map_err(|error| error.at_line(self.line))?;
        }

        Ok(())
    }

    /// Check the input ended cleanly and return the root.
    ///
    /// # Errors
    ///
    /// - [`SyntaxError::UnterminatedComment`] if a comment is still open
    /// - [`SyntaxError::UnbalancedDocument`] if tags are still open (strict mode)
    /// - [`SyntaxError::EmptyDocument`] if no tag was ever read
    pub fn finish(mut self) -> Result<Tag, ParseError> {
        let line = self.line;

        if self.tokenizer.in_comment() {
            return Err(SyntaxError::UnterminatedComment.at_line(line));
        }

        if !self.stack_of_open_tags.is_empty() {
            if self.options.strict_balance {
                let open = self
                    .stack_of_open_tags
                    .iter()
                    .map(|tag| tag.name.clone())
                    .collect();
                return Err(SyntaxError::UnbalancedDocument { open }.at_line(line));
            }
            self.close_all_open_tags();
        }

        self.root
            .ok_or_else(|| SyntaxError::EmptyDocument.at_line(line))
    }

    fn process(&mut self, tag: Tag) -> Result<(), SyntaxError> {
        match classify(&tag)? {
            TagKind::Opening => self.push_open_tag(tag),
            TagKind::NonClosing => self.append_void_tag(tag),
            TagKind::Closing => self.close_current_tag(tag),
        }
    }

    fn push_open_tag(&mut self, tag: Tag) -> Result<(), SyntaxError> {
        if self.root.is_some() {
            return Err(SyntaxError::ContentOutsideRoot { name: tag.name });
        }

        #[cfg(feature = "parse-trace")]
        eprintln!("[BUILDER] push {tag} (depth {})", self.stack_of_open_tags.len() + 1);
        self.stack_of_open_tags.push(tag);
        Ok(())
    }

    fn append_void_tag(&mut self, tag: Tag) -> Result<(), SyntaxError> {
        let Some(parent) = self.stack_of_open_tags.last_mut() else {
            return Err(SyntaxError::ContentOutsideRoot { name: tag.name });
        };

        #[cfg(feature = "parse-trace")]
        eprintln!("[BUILDER] append {tag} to <{}>", parent.name);
        parent.add_child(tag);
        Ok(())
    }

    fn close_current_tag(&mut self, closing: Tag) -> Result<(), SyntaxError> {
        let name = closing.local_name();

        let Some(mut current) = self.stack_of_open_tags.pop() else {
            return Err(SyntaxError::UnmatchedClose {
                name: name.to_string(),
            });
        };

        if current.name != name {
            return Err(SyntaxError::TagMismatch {
                open: current.name,
                close: name.to_string(),
            });
        }

        #[cfg(feature = "parse-trace")]
        eprintln!("[BUILDER] pop <{}> (depth {})", current.name, self.stack_of_open_tags.len());

        match self.stack_of_open_tags.last_mut() {
            Some(parent) => {
                if closing.content.is_some() {
                    current.content = closing.content;
                }
                parent.add_child(current);
            }
            // The root's closing tag: its text is not kept.
            None => self.root = Some(current),
        }
        Ok(())
    }

    fn close_all_open_tags(&mut self) {
        while let Some(current) = self.stack_of_open_tags.pop() {
            match self.stack_of_open_tags.last_mut() {
                Some(parent) => parent.add_child(current),
                None => self.root = Some(current),
            }
        }
    }
}
