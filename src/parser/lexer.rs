//! Lexer for the placeholder grammar using logos
//!
//! Templates are mostly literal text, so the token set is small: the four
//! placeholder shapes, runs of plain text, and a lone `{` that opens nothing.
//! There is no error token; any input lexes completely.

use logos::Logos;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `{$name}`, `{@name}` (plain lookup) or `{#name}` (count query)
    #[regex(r"\{[$@#][A-Za-z0-9:_]+\}")]
    SimpleRef,

    /// `{name/}` or `{name, args/}`
    ///
    /// Must outrank `OpenTag`: with inline arguments both patterns can match
    /// the same span, since the argument class admits `/`.
    #[regex(r"\{[A-Za-z:_!][A-Za-z0-9:_]*(\s*,[^{}]*)?/\}", priority = 10)]
    SelfClosing,

    /// `{name}` or `{name, args}` - opens a block body
    #[regex(r"\{[A-Za-z:_!][A-Za-z0-9:_]*(\s*,[^{}]*)?\}", priority = 5)]
    OpenTag,

    /// `{/name}` or `{/!name}` - closes a block body
    #[regex(r"\{/!?[A-Za-z:_][A-Za-z0-9:_]*\}", priority = 12)]
    CloseTag,

    /// A run of literal text containing no `{`
    #[regex(r"[^{]+")]
    Text,

    /// A `{` that starts no placeholder; passes through as literal text
    #[token("{")]
    Brace,
}

/// Lex a template into tokens with spans
pub fn lex(template: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(template)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(tokens("hello world"), vec![Token::Text]);
    }

    #[test]
    fn test_simple_refs() {
        assert_eq!(
            tokens("{$title}{@title}{#comments}"),
            vec![Token::SimpleRef, Token::SimpleRef, Token::SimpleRef]
        );
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(tokens("{title/}"), vec![Token::SelfClosing]);
        assert_eq!(tokens("{title, width=80/}"), vec![Token::SelfClosing]);
    }

    #[test]
    fn test_block_tags() {
        assert_eq!(
            tokens("{rows}x{/rows}"),
            vec![Token::OpenTag, Token::Text, Token::CloseTag]
        );
    }

    #[test]
    fn test_negated_block_tags() {
        assert_eq!(
            tokens("{!comments}x{/!comments}"),
            vec![Token::OpenTag, Token::Text, Token::CloseTag]
        );
    }

    #[test]
    fn test_open_tag_with_args() {
        assert_eq!(tokens("{rows, limit=3}"), vec![Token::OpenTag]);
    }

    #[test]
    fn test_stray_brace() {
        assert_eq!(tokens("a { b"), vec![Token::Text, Token::Brace, Token::Text]);
    }

    #[test]
    fn test_unterminated_tag_degrades_to_brace() {
        // `{title` never closes, so the `{` falls back to a lone brace
        assert_eq!(tokens("{title"), vec![Token::Brace, Token::Text]);
    }

    #[test]
    fn test_unknown_sigil_is_not_a_placeholder() {
        assert_eq!(tokens("{%title}"), vec![Token::Brace, Token::Text]);
    }

    #[test]
    fn test_mixed_template() {
        assert_eq!(
            tokens("<h1>{title/}</h1>{!comments}<span>{#comments}</span>{/!comments}"),
            vec![
                Token::Text,
                Token::SelfClosing,
                Token::Text,
                Token::OpenTag,
                Token::Text,
                Token::SimpleRef,
                Token::Text,
                Token::CloseTag,
            ]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let input = "a{$b}c";
        let spans: Vec<_> = lex(input).map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..1, 1..5, 5..6]);
    }

    #[test]
    fn test_multiline_body_text() {
        assert_eq!(
            tokens("{rows}\nline one\nline two\n{/rows}"),
            vec![Token::OpenTag, Token::Text, Token::CloseTag]
        );
    }
}
