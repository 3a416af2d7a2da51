//! Integration tests for the tag tokenizer.

use quickcheck_macros::quickcheck;
use tagtree_common::warning::{has_warned, set_quiet};
use tagtree_html::vocabulary::is_allowed_attribute_value_char;
use tagtree_html::{Attribute, SyntaxError, Tag, TagTokenizer, TokenizerState};

/// Read a single tag from `line`, returning it with the unread remainder.
fn next(line: &str) -> (Result<Option<Tag>, SyntaxError>, &str) {
    let mut cursor = line;
    let result = TagTokenizer::new().next_tag(&mut cursor);
    (result, cursor)
}

fn next_tag(line: &str) -> Tag {
    match next(line).0 {
        Ok(Some(tag)) => tag,
        other => panic!("expected a tag from {line:?}, got {other:?}"),
    }
}

fn next_error(line: &str) -> SyntaxError {
    match next(line).0 {
        Err(error) => error,
        other => panic!("expected an error from {line:?}, got {other:?}"),
    }
}

#[test]
fn test_opening_tag() {
    let (result, rest) = next("<div>");
    assert_eq!(result, Ok(Some(Tag::new("div"))));
    assert_eq!(rest, "");
}

#[test]
fn test_attribute_with_space_in_value() {
    let tag = next_tag(r#"<div class="a b">"#);
    assert_eq!(tag.name, "div");
    assert_eq!(
        tag.attributes,
        [Attribute::new("class".to_string(), "a b".to_string())]
    );
    assert!(tag.children.is_empty());
    assert_eq!(tag.content, None);
}

#[test]
fn test_cursor_advances_one_tag_per_call() {
    let mut tokenizer = TagTokenizer::new();
    let mut cursor = "<span><a></a></span>";

    let names: Vec<String> = std::iter::from_fn(|| {
        tokenizer
            .next_tag(&mut cursor)
            .expect("input is well formed")
            .map(|tag| tag.name)
    })
    .collect();

    assert_eq!(names, ["span", "a", "/a", "/span"]);
    assert_eq!(cursor, "");
}

#[test]
fn test_cursor_stops_after_closing_bracket() {
    let (_, rest) = next("<span><a></a></span>");
    assert_eq!(rest, "<a></a></span>");
}

#[test]
fn test_closing_tag_captures_leading_text() {
    let tag = next_tag("Hello world</p>");
    assert_eq!(tag.name, "/p");
    assert_eq!(tag.content.as_deref(), Some("Hello world"));
}

#[test]
fn test_leading_spaces_are_skipped_but_trailing_kept() {
    let tag = next_tag("    Hi there </p>");
    assert_eq!(tag.content.as_deref(), Some("Hi there "));
}

#[test]
fn test_closing_tag_without_text_has_no_content() {
    assert_eq!(next_tag("</div>").content, None);
    assert_eq!(next_tag("   </div>").content, None);
}

#[test]
fn test_text_before_opening_tag_is_dropped_with_warning() {
    set_quiet(true);
    let tag = next_tag("stray<p>");
    assert_eq!(tag, Tag::new("p"));
    assert!(has_warned(
        "HTML",
        "text \"stray\" before <p> is not attached to any tag"
    ));
}

#[test]
fn test_line_without_tags_yields_none() {
    set_quiet(true);
    let (result, rest) = next("just some words");
    assert_eq!(result, Ok(None));
    assert_eq!(rest, "");
    assert!(has_warned(
        "HTML",
        "text \"just some words\" at end of line is not attached to any tag"
    ));
}

#[test]
fn test_newline_ends_the_line() {
    let mut tokenizer = TagTokenizer::new();
    let mut cursor = "<p>\n<div>";
    assert_eq!(tokenizer.next_tag(&mut cursor), Ok(Some(Tag::new("p"))));
    assert_eq!(tokenizer.next_tag(&mut cursor), Ok(None));
    assert_eq!(cursor, "\n<div>");
}

#[test]
fn test_repeated_attributes_are_kept_in_order() {
    let tag = next_tag(r#"<a href="/x" id="link" href="/y">"#);
    let names: Vec<&str> = tag.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["href", "id", "href"]);
    assert_eq!(tag.attributes[2].value, "/y");
}

#[test]
fn test_empty_attribute_value() {
    let tag = next_tag(r#"<input value="">"#);
    assert_eq!(tag.attribute("value"), Some(""));
}

#[test]
fn test_attribute_value_punctuation() {
    let value = "https://example.com/a?b=1&c=[2];d=(3)%20#top!";
    let tag = next_tag(&format!("<a href=\"{value}\">"));
    assert_eq!(tag.attribute("href"), Some(value));
}

#[test]
fn test_closing_tag_with_attributes() {
    let tag = next_tag(r#"</p class="x">"#);
    assert_eq!(tag.name, "/p");
    assert_eq!(tag.content, None);
    assert_eq!(tag.attribute("class"), Some("x"));
}

#[test]
fn test_comment_is_skipped() {
    let mut tokenizer = TagTokenizer::new();
    let mut cursor = "<!-- <p> --><br>";
    assert_eq!(tokenizer.next_tag(&mut cursor), Ok(Some(Tag::new("br"))));
    assert!(!tokenizer.in_comment());
    assert_eq!(cursor, "");
}

#[test]
fn test_comment_spanning_lines() {
    let mut tokenizer = TagTokenizer::new();

    let mut first = "<div><!-- starts here <p>";
    assert_eq!(tokenizer.next_tag(&mut first), Ok(Some(Tag::new("div"))));
    assert_eq!(tokenizer.next_tag(&mut first), Ok(None));
    assert!(tokenizer.in_comment());

    let mut second = "still inside </p>";
    assert_eq!(tokenizer.next_tag(&mut second), Ok(None));
    assert!(tokenizer.in_comment());

    let mut third = "ends --></div>";
    assert_eq!(tokenizer.next_tag(&mut third), Ok(Some(Tag::new("/div"))));
    assert!(!tokenizer.in_comment());
}

#[test]
fn test_bad_comment_opening() {
    assert_eq!(
        next_error("<!- nope -->"),
        SyntaxError::BadCommentSyntax {
            fragment: "<!".to_string()
        }
    );
}

#[test]
fn test_bang_after_tag_name_is_bad_syntax() {
    assert_eq!(
        next_error("<p!-- x -->"),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::TagName,
            found: Some('!'),
            fragment: "<p!".to_string(),
        }
    );
}

#[test]
fn test_disallowed_character_in_attribute_value() {
    assert_eq!(
        next_error(r#"<div class="a<b">"#),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::AttrValueContent,
            found: Some('<'),
            fragment: r#"<div class="a<"#.to_string(),
        }
    );
}

#[test]
fn test_missing_attribute_quote() {
    assert_eq!(
        next_error("<div class=main>"),
        SyntaxError::MissingAttributeQuote {
            attribute: "class".to_string(),
            found: 'm',
        }
    );
}

#[test]
fn test_digit_in_attribute_name() {
    assert!(matches!(
        next_error(r#"<div data1="x">"#),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::AttrName,
            found: Some('1'),
            ..
        }
    ));
}

#[test]
fn test_attribute_without_value() {
    assert!(matches!(
        next_error("<input disabled>"),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::AttrName,
            found: Some('>'),
            ..
        }
    ));
}

#[test]
fn test_empty_tag_name() {
    assert!(matches!(
        next_error("<>"),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::TagName,
            found: Some('>'),
            ..
        }
    ));
    assert!(matches!(
        next_error("< div>"),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::TagName,
            found: Some(' '),
            ..
        }
    ));
}

#[test]
fn test_missing_separator_between_attributes() {
    assert!(matches!(
        next_error(r#"<div a="1"b="2">"#),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::AttrSeparatorOrClose,
            found: Some('b'),
            ..
        }
    ));
}

#[test]
fn test_line_ending_inside_tag() {
    assert_eq!(
        next_error(r#"<div class="a""#),
        SyntaxError::BadTagSyntax {
            state: TokenizerState::AttrSeparatorOrClose,
            found: None,
            fragment: r#"<div class="a""#.to_string(),
        }
    );
}

#[test]
fn test_error_message_names_state_and_fragment() {
    let message = next_error(r#"<div class="a<b">"#).to_string();
    assert_eq!(
        message,
        r#"bad tag syntax in attribute value state: unexpected character '<' in `<div class="a<`"#
    );
}

#[test]
fn test_tokenize_whole_document() {
    let tokens = TagTokenizer::tokenize("<ul>\n  <li>One</li>\n</ul>\n").expect("valid input");
    let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["ul", "li", "/li", "/ul"]);
    assert_eq!(tokens[2].content.as_deref(), Some("One"));
}

#[test]
fn test_tokenize_reports_line_number() {
    let error = TagTokenizer::tokenize("<div>\n<p class=x>\n</div>").expect_err("bad quote");
    assert_eq!(error.line(), Some(2));
    assert!(matches!(
        error.syntax(),
        Some(SyntaxError::MissingAttributeQuote { .. })
    ));
}

#[test]
fn test_tokens_are_not_checked_against_vocabulary() {
    let tokens = TagTokenizer::tokenize("<blink></blink>").expect("tokenizer accepts any name");
    assert_eq!(tokens.len(), 2);
}

#[quickcheck]
fn prop_allowed_attribute_values_are_read_verbatim(raw: String) -> bool {
    let value: String = raw
        .chars()
        .filter(|c| is_allowed_attribute_value_char(*c))
        .collect();
    let line = format!("<div title=\"{value}\">");
    let mut cursor = line.as_str();

    let read = TagTokenizer::new().next_tag(&mut cursor);
    matches!(read, Ok(Some(ref tag)) if tag.attribute("title") == Some(value.as_str()))
        && cursor.is_empty()
}
