use strum_macros::Display;

use tagtree_dom::{Attribute, Tag};

use super::helpers::{COMMENT_CLOSE, COMMENT_OPEN, Scan, Step};
use crate::error::{ParseError, SyntaxError};
use crate::vocabulary::is_allowed_attribute_value_char;

/// The tokenizer state machine. One tag is read per pass, starting in
/// [`TokenizerState::AwaitingOpenBracket`].
///
/// ```text
///             AttrValueOpen     AttrSeparatorOrClose
///  AwaitingOpenBracket |              |
///       |              |              |
///       v              v              v
///       <div class="text-center red">
///        ^   ^        ^
///        |   |        |
///  TagName  AttrName  AttrValueContent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Looking for `<`; other characters are leading text.
    #[strum(serialize = "open bracket")]
    AwaitingOpenBracket,
    /// Reading the tag name after `<`.
    #[strum(serialize = "tag name")]
    TagName,
    /// Reading an attribute name.
    #[strum(serialize = "attribute name")]
    AttrName,
    /// Expecting the `"` that opens an attribute value.
    #[strum(serialize = "attribute value open")]
    AttrValueOpen,
    /// Reading a quoted attribute value.
    #[strum(serialize = "attribute value")]
    AttrValueContent,
    /// After a closing `"`: expecting a space or `>`.
    #[strum(serialize = "attribute separator or close")]
    AttrSeparatorOrClose,
}

/// Reads tags out of lines of markup.
///
/// The only state kept between calls is whether a `<!--` comment is open, so a
/// comment may start on one line and end on a later one. Everything else is
/// rebuilt for every tag.
#[derive(Debug, Default)]
pub struct TagTokenizer {
    in_comment: bool,
}

impl TagTokenizer {
    /// Create a tokenizer outside any comment.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_comment: false }
    }

    /// True while a `<!--` has been read without its `-->`.
    #[must_use]
    pub const fn in_comment(&self) -> bool {
        self.in_comment
    }

    /// Read the next tag from `cursor`.
    ///
    /// On success `cursor` is moved past everything consumed, including the
    /// tag's closing `>`. `Ok(None)` means the line (or the text up to a `\n`)
    /// holds no further tag; the cursor is then left at the end of what was read.
    ///
    /// Text right before a closing tag becomes that token's `content`. Text in
    /// front of an opening or void tag, and text left at the end of the line,
    /// is dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for any character the current state does not
    /// accept, for `<!` not followed by `--`, and for a line that ends in the
    /// middle of a tag.
    pub fn next_tag(&mut self, cursor: &mut &str) -> Result<Option<Tag>, SyntaxError> {
        let mut scan = Scan::new(*cursor);
        let tag = self.run(&mut scan)?;
        *cursor = scan.rest();
        Ok(tag)
    }

    /// Tokenize every line of `input`, returning the raw tokens in order.
    ///
    /// Tokens are not classified or checked against the vocabulary.
    ///
    /// # Errors
    ///
    /// Returns the first tokenizer error, tagged with its 1-based line number.
    pub fn tokenize(input: &str) -> Result<Vec<Tag>, ParseError> {
        let mut tokenizer = Self::new();
        let mut tokens = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let mut rest = line;
            while let Some(tag) = tokenizer
                .next_tag(&mut rest)
                .map_err(|error| error.at_line(index + 1))?
            {
                tokens.push(tag);
            }
        }

        Ok(tokens)
    }

    fn run(&mut self, scan: &mut Scan<'_>) -> Result<Option<Tag>, SyntaxError> {
        while let Some(c) = scan.current() {
            if c == '\n' {
                break;
            }

            if self.in_comment {
                if scan.next_few_characters_are(COMMENT_CLOSE) {
                    #[cfg(feature = "parse-trace")]
                    eprintln!("[TOKENIZER] comment closed");
                    self.in_comment = false;
                    scan.switch_to(TokenizerState::AwaitingOpenBracket);
                    scan.advance_by(COMMENT_CLOSE.len());
                } else {
                    scan.advance_by(c.len_utf8());
                }
                continue;
            }

            let step = match scan.state {
                TokenizerState::AwaitingOpenBracket => handle_awaiting_open_bracket(scan, c),
                TokenizerState::TagName => handle_tag_name(scan, c)?,
                TokenizerState::AttrName => handle_attr_name(scan, c)?,
                TokenizerState::AttrValueOpen => handle_attr_value_open(scan, c)?,
                TokenizerState::AttrValueContent => handle_attr_value_content(scan, c)?,
                TokenizerState::AttrSeparatorOrClose => handle_attr_separator_or_close(scan, c)?,
            };

            match step {
                Step::Next => scan.advance_by(c.len_utf8()),
                Step::OpenComment => {
                    #[cfg(feature = "parse-trace")]
                    eprintln!("[TOKENIZER] comment opened");
                    self.in_comment = true;
                    scan.advance_by(COMMENT_OPEN.len());
                }
                Step::Emit(tag) => {
                    #[cfg(feature = "parse-trace")]
                    eprintln!("[TOKENIZER] emit {tag}");
                    scan.advance_by(c.len_utf8());
                    return Ok(Some(tag));
                }
            }
        }

        if self.in_comment {
            scan.discard_leading_text(None);
            return Ok(None);
        }
        scan.end_of_line()
    }
}

fn handle_awaiting_open_bracket(scan: &mut Scan<'_>, c: char) -> Step {
    match c {
        '<' => {
            scan.tag_start = scan.pos;
            scan.name.clear();
            scan.switch_to(TokenizerState::TagName);
        }
        // Leading spaces are not content.
        ' ' if scan.leading.is_empty() => {}
        _ => scan.leading.push(c),
    }
    Step::Next
}

fn handle_tag_name(scan: &mut Scan<'_>, c: char) -> Result<Step, SyntaxError> {
    match c {
        c if c.is_ascii_alphanumeric() || c == '/' => {
            scan.name.push(c);
            Ok(Step::Next)
        }
        '>' if !scan.name.is_empty() => {
            let name = std::mem::take(&mut scan.name);
            // Only closing tokens carry the text in front of them.
            let content = if name.starts_with('/') {
                Some(std::mem::take(&mut scan.leading))
            } else {
                scan.discard_leading_text(Some(name.as_str()));
                None
            };
            Ok(Step::Emit(Tag::with_content(name, content)))
        }
        ' ' if !scan.name.is_empty() => {
            let name = std::mem::take(&mut scan.name);
            scan.discard_leading_text(Some(name.as_str()));
            scan.tag = Tag::new(name);
            scan.switch_to(TokenizerState::AttrName);
            Ok(Step::Next)
        }
        '!' if scan.name.is_empty() => {
            if scan.next_few_characters_are(COMMENT_OPEN) {
                Ok(Step::OpenComment)
            } else {
                Err(SyntaxError::BadCommentSyntax {
                    fragment: scan.fragment_through(c),
                })
            }
        }
        _ => Err(scan.bad_tag(c)),
    }
}

fn handle_attr_name(scan: &mut Scan<'_>, c: char) -> Result<Step, SyntaxError> {
    match c {
        c if c.is_ascii_alphabetic() => {
            scan.attr_name.push(c);
            Ok(Step::Next)
        }
        '=' if !scan.attr_name.is_empty() => {
            scan.switch_to(TokenizerState::AttrValueOpen);
            Ok(Step::Next)
        }
        _ => Err(scan.bad_tag(c)),
    }
}

fn handle_attr_value_open(scan: &mut Scan<'_>, c: char) -> Result<Step, SyntaxError> {
    if c == '"' {
        scan.switch_to(TokenizerState::AttrValueContent);
        Ok(Step::Next)
    } else {
        Err(SyntaxError::MissingAttributeQuote {
            attribute: scan.attr_name.clone(),
            found: c,
        })
    }
}

fn handle_attr_value_content(scan: &mut Scan<'_>, c: char) -> Result<Step, SyntaxError> {
    match c {
        '"' => {
            let name = std::mem::take(&mut scan.attr_name);
            let value = std::mem::take(&mut scan.attr_value);
            scan.tag.add_attribute(Attribute::new(name, value));
            scan.switch_to(TokenizerState::AttrSeparatorOrClose);
            Ok(Step::Next)
        }
        c if is_allowed_attribute_value_char(c) => {
            scan.attr_value.push(c);
            Ok(Step::Next)
        }
        _ => Err(scan.bad_tag(c)),
    }
}

fn handle_attr_separator_or_close(scan: &mut Scan<'_>, c: char) -> Result<Step, SyntaxError> {
    match c {
        ' ' => {
            scan.switch_to(TokenizerState::AttrName);
            Ok(Step::Next)
        }
        '>' => Ok(Step::Emit(std::mem::take(&mut scan.tag))),
        _ => Err(scan.bad_tag(c)),
    }
}
