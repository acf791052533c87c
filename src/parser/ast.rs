//! Placeholder match types produced by the parser
//!
//! Each placeholder carries an explicit kind discriminant rather than being
//! distinguished by match arity, so resolution is an exhaustive `match`.

use std::collections::BTreeMap;

/// Inline arguments parsed from a tag, as key/value pairs
pub type ArgMap = BTreeMap<String, String>;

/// One piece of a parsed template: literal text or a placeholder match
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Text outside any placeholder, emitted verbatim
    Literal(String),
    /// A placeholder to be resolved against the bound data
    Placeholder(Placeholder),
}

/// A single placeholder match
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder {
    /// `{$name}` or `{@name}` - plain value lookup
    Value { key: String, sigil: char },
    /// `{#name}` - count/length query
    Count { key: String },
    /// `{name/}` or `{name, args/}` - bare key reference
    Tag { key: String, args: ArgMap },
    /// `{name, args}...{/name}` - repeating/scoped section
    Block {
        key: String,
        args: ArgMap,
        /// Raw body text, sliced out unparsed; recursion happens at
        /// resolution time
        body: String,
    },
    /// `{!name}...{/!name}` - existence gate (the `!` is already stripped)
    NegatedBlock { key: String, body: String },
}

impl Placeholder {
    /// The data key this placeholder refers to
    pub fn key(&self) -> &str {
        match self {
            Placeholder::Value { key, .. }
            | Placeholder::Count { key }
            | Placeholder::Tag { key, .. }
            | Placeholder::Block { key, .. }
            | Placeholder::NegatedBlock { key, .. } => key,
        }
    }
}
