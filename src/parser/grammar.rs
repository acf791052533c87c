//! Assembly of lexed tokens into placeholder matches
//!
//! One left-to-right pass over the token stream. Block bodies are sliced out
//! as raw text up to the first close tag with the same key; anything that
//! fails to pair up (an open tag with no close, a stray close tag) degrades
//! to literal text instead of erroring.

use super::ast::{ArgMap, Placeholder, Segment};
use super::lexer::{lex, Span, Token};

/// Parse a template into segments
///
/// Never fails: text that does not match the placeholder grammar is returned
/// as literal segments.
pub fn parse(template: &str) -> Vec<Segment> {
    let tokens: Vec<_> = lex(template).collect();
    let mut segments = Vec::new();
    let mut literal = String::new();

    let mut i = 0;
    while i < tokens.len() {
        let (token, span) = &tokens[i];
        let slice = &template[span.clone()];
        match token {
            Token::Text | Token::Brace => literal.push_str(slice),
            // A close tag with no preceding open passes through as text
            Token::CloseTag => literal.push_str(slice),
            Token::SimpleRef => {
                flush_literal(&mut segments, &mut literal);
                let sigil = slice.as_bytes()[1] as char;
                let key = slice[2..slice.len() - 1].to_string();
                let placeholder = if sigil == '#' {
                    Placeholder::Count { key }
                } else {
                    Placeholder::Value { key, sigil }
                };
                segments.push(Segment::Placeholder(placeholder));
            }
            Token::SelfClosing => {
                flush_literal(&mut segments, &mut literal);
                let (key, args) = split_tag(&slice[1..slice.len() - 2]);
                segments.push(Segment::Placeholder(Placeholder::Tag { key, args }));
            }
            Token::OpenTag => {
                let (key, args) = split_tag(&slice[1..slice.len() - 1]);
                match find_close(template, &tokens, i + 1, &key) {
                    Some(close) => {
                        flush_literal(&mut segments, &mut literal);
                        let body = template[span.end..tokens[close].1.start].to_string();
                        let placeholder = if key.starts_with('!') {
                            Placeholder::NegatedBlock {
                                key: key[1..].to_string(),
                                body,
                            }
                        } else {
                            Placeholder::Block { key, args, body }
                        };
                        segments.push(Segment::Placeholder(placeholder));
                        // Tokens inside the body belong to the recursive
                        // parse, not this pass
                        i = close;
                    }
                    None => literal.push_str(slice),
                }
            }
        }
        i += 1;
    }

    flush_literal(&mut segments, &mut literal);
    segments
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

/// Find the first close tag for `key` at or after `from`
fn find_close(
    template: &str,
    tokens: &[(Token, Span)],
    from: usize,
    key: &str,
) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(|(token, span)| {
            *token == Token::CloseTag && &template[span.start + 2..span.end - 1] == key
        })
        .map(|offset| from + offset)
}

/// Split tag innards into the key and its parsed inline arguments
fn split_tag(inner: &str) -> (String, ArgMap) {
    match inner.find(',') {
        Some(comma) => (
            inner[..comma].trim_end().to_string(),
            parse_args(&inner[comma + 1..]),
        ),
        None => (inner.to_string(), ArgMap::new()),
    }
}

/// Parse a comma/space-delimited argument string into key/value pairs
///
/// `k=v` tokens become entries; bare tokens map to the empty string.
fn parse_args(raw: &str) -> ArgMap {
    let mut args = ArgMap::new();
    for token in raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.split_once('=') {
            Some((key, value)) => args.insert(key.to_string(), value.to_string()),
            None => args.insert(token.to_string(), String::new()),
        };
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> ArgMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_text_is_one_literal() {
        assert_eq!(
            parse("no placeholders here"),
            vec![Segment::Literal("no placeholders here".to_string())]
        );
    }

    #[test]
    fn test_simple_reference() {
        assert_eq!(
            parse("{$title}"),
            vec![Segment::Placeholder(Placeholder::Value {
                key: "title".to_string(),
                sigil: '$',
            })]
        );
    }

    #[test]
    fn test_count_query() {
        assert_eq!(
            parse("{#comments}"),
            vec![Segment::Placeholder(Placeholder::Count {
                key: "comments".to_string(),
            })]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        assert_eq!(
            parse("{title/}"),
            vec![Segment::Placeholder(Placeholder::Tag {
                key: "title".to_string(),
                args: ArgMap::new(),
            })]
        );
    }

    #[test]
    fn test_self_closing_tag_with_args() {
        assert_eq!(
            parse("{image, width=80 height=60/}"),
            vec![Segment::Placeholder(Placeholder::Tag {
                key: "image".to_string(),
                args: args(&[("width", "80"), ("height", "60")]),
            })]
        );
    }

    #[test]
    fn test_block_with_body() {
        assert_eq!(
            parse("{rows}<p>{$detail}</p>{/rows}"),
            vec![Segment::Placeholder(Placeholder::Block {
                key: "rows".to_string(),
                args: ArgMap::new(),
                body: "<p>{$detail}</p>".to_string(),
            })]
        );
    }

    #[test]
    fn test_negated_block_strips_bang() {
        assert_eq!(
            parse("{!comments}x{/!comments}"),
            vec![Segment::Placeholder(Placeholder::NegatedBlock {
                key: "comments".to_string(),
                body: "x".to_string(),
            })]
        );
    }

    #[test]
    fn test_block_body_stops_at_first_matching_close() {
        let segments = parse("{rows}a{/rows}b{/rows}");
        assert_eq!(
            segments,
            vec![
                Segment::Placeholder(Placeholder::Block {
                    key: "rows".to_string(),
                    args: ArgMap::new(),
                    body: "a".to_string(),
                }),
                Segment::Literal("b{/rows}".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_body_skips_other_close_tags() {
        let segments = parse("{rows}{!comments}x{/!comments}{/rows}");
        assert_eq!(
            segments,
            vec![Segment::Placeholder(Placeholder::Block {
                key: "rows".to_string(),
                args: ArgMap::new(),
                body: "{!comments}x{/!comments}".to_string(),
            })]
        );
    }

    #[test]
    fn test_unclosed_open_tag_stays_literal() {
        assert_eq!(
            parse("{rows}no close here"),
            vec![Segment::Literal("{rows}no close here".to_string())]
        );
    }

    #[test]
    fn test_stray_close_tag_stays_literal() {
        assert_eq!(
            parse("a{/rows}b"),
            vec![Segment::Literal("a{/rows}b".to_string())]
        );
    }

    #[test]
    fn test_placeholders_after_unclosed_tag_still_match() {
        assert_eq!(
            parse("{rows} and {$title}"),
            vec![
                Segment::Literal("{rows} and ".to_string()),
                Segment::Placeholder(Placeholder::Value {
                    key: "title".to_string(),
                    sigil: '$',
                }),
            ]
        );
    }

    #[test]
    fn test_malformed_braces_pass_through() {
        assert_eq!(
            parse("a { b } c"),
            vec![Segment::Literal("a { b } c".to_string())]
        );
    }

    #[test]
    fn test_bare_arg_token_maps_to_empty_value() {
        assert_eq!(
            parse("{media, lazy width=80/}"),
            vec![Segment::Placeholder(Placeholder::Tag {
                key: "media".to_string(),
                args: args(&[("lazy", ""), ("width", "80")]),
            })]
        );
    }

    #[test]
    fn test_block_with_args() {
        assert_eq!(
            parse("{rows, limit=3}x{/rows}"),
            vec![Segment::Placeholder(Placeholder::Block {
                key: "rows".to_string(),
                args: args(&[("limit", "3")]),
                body: "x".to_string(),
            })]
        );
    }

    #[test]
    fn test_literals_around_placeholder() {
        assert_eq!(
            parse("<h1>{$title}</h1>"),
            vec![
                Segment::Literal("<h1>".to_string()),
                Segment::Placeholder(Placeholder::Value {
                    key: "title".to_string(),
                    sigil: '$',
                }),
                Segment::Literal("</h1>".to_string()),
            ]
        );
    }
}
