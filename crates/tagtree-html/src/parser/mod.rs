//! Tree construction from the tag token stream.

/// Stack-based tree builder.
pub mod builder;

use std::io::BufRead;

use tagtree_dom::Tag;

pub use builder::{BuildOptions, TreeBuilder};

use crate::error::ParseError;

/// Build a tree from `lines` with the default (strict) options.
///
/// Items holding embedded newlines are split into separate lines.
///
/// # Errors
///
/// Returns the first [`ParseError`]; no partial tree is produced.
pub fn build_tree<I, S>(lines: I) -> Result<Tag, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_tree_with_options(lines, BuildOptions::default())
}

/// Build a tree from `lines` with explicit options.
///
/// # Errors
///
/// Returns the first [`ParseError`]; no partial tree is produced.
pub fn build_tree_with_options<I, S>(lines: I, options: BuildOptions) -> Result<Tag, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::with_options(options);
    for line in lines {
        builder.feed_line(line.as_ref())?;
    }
    builder.finish()
}

/// Build a tree from a buffered reader, one line at a time.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if reading fails, otherwise the first syntax error.
pub fn build_tree_from_reader<R: BufRead>(
    reader: R,
    options: BuildOptions,
) -> Result<Tag, ParseError> {
    let mut builder = TreeBuilder::with_options(options);
    for line in reader.lines() {
        builder.feed_line(&line?)?;
    }
    builder.finish()
}

/// Build a tree from a whole document held in memory.
///
/// # Errors
///
/// Returns the first [`ParseError`]; no partial tree is produced.
pub fn parse_str(input: &str) -> Result<Tag, ParseError> {
    build_tree(input.lines())
}
