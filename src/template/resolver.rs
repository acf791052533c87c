//! Template resolution - recursive substitution against a bound data set
//!
//! The resolver owns one data set and renders templates against it. Each
//! placeholder match resolves independently; block bodies are re-parsed
//! recursively with a fresh resolver scoped to one sequence element, so
//! sibling iterations never see each other's data.

use crate::parser::{self, ArgMap, Placeholder, Segment};

use super::value::{Data, Value};

/// Fallback invoked when a referenced key has no bound value
///
/// Receives the key, the marker kind (the sigil for simple references, `$`
/// for self-closing tags) or the raw block body, and any parsed inline
/// arguments. Returning `None` yields an empty substitution.
pub type MissingHandler<'a> = dyn Fn(&str, &str, Option<&ArgMap>) -> Option<String> + 'a;

/// Resolves placeholder templates against a bound data set
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    data: Data,
}

impl Resolver {
    /// Create a resolver with no bound data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver owning the given data set
    pub fn with_data(data: Data) -> Self {
        Self { data }
    }

    /// Bind a value under a key; chains
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Replace the entire bound data set; chains
    pub fn set_data(&mut self, data: Data) -> &mut Self {
        self.data = data;
        self
    }

    /// The currently bound data set
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Parse a template, substituting every placeholder match
    ///
    /// Unresolvable placeholders become the empty string; text that does not
    /// match the grammar passes through verbatim.
    pub fn parse(&self, template: &str) -> String {
        self.render(template, None)
    }

    /// Parse a template with a missing-value fallback
    ///
    /// The handler lives for this call only; it is an explicit parameter,
    /// not resolver state, so sequential calls cannot contaminate each
    /// other. Recursive sub-parses of block bodies do not inherit it.
    pub fn parse_with(&self, template: &str, on_missing: &MissingHandler<'_>) -> String {
        self.render(template, Some(on_missing))
    }

    /// Replace literal occurrences of every bound key with its value
    ///
    /// Plain substring replacement in key order; no placeholder parsing.
    pub fn replace_literal(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.data {
            result = result.replace(key.as_str(), &value.to_string());
        }
        result
    }

    fn render(&self, template: &str, on_missing: Option<&MissingHandler<'_>>) -> String {
        let mut out = String::with_capacity(template.len());
        for segment in parser::parse(template) {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Placeholder(placeholder) => {
                    if let Some(text) = self.resolve(&placeholder, on_missing) {
                        out.push_str(&text);
                    }
                }
            }
        }
        out
    }

    /// Resolve one placeholder match to its replacement text
    ///
    /// `None` means empty substitution (absent key with no handler, or a
    /// gated-out block).
    fn resolve(
        &self,
        placeholder: &Placeholder,
        on_missing: Option<&MissingHandler<'_>>,
    ) -> Option<String> {
        match placeholder {
            Placeholder::Value { key, sigil } => match self.data.get(key) {
                Some(value) => Some(value.to_string()),
                None => {
                    let marker = sigil.to_string();
                    on_missing.and_then(|handler| handler(key, &marker, None))
                }
            },
            Placeholder::Count { key } => match self.data.get(key) {
                Some(value) => Some(value.count()),
                None => on_missing.and_then(|handler| handler(key, "#", None)),
            },
            Placeholder::Tag { key, args } => match self.data.get(key) {
                // Arguments are inert when the key is bound
                Some(value) => Some(value.to_string()),
                None => on_missing.and_then(|handler| handler(key, "$", Some(args))),
            },
            Placeholder::Block { key, args, body } => match self.data.get(key) {
                Some(value) => Some(self.repeat(value, body)),
                None => on_missing.and_then(|handler| handler(key, body, Some(args))),
            },
            Placeholder::NegatedBlock { key, body } => match self.data.get(key) {
                // Existence gate: the body is parsed once against the outer
                // data set, never per-element
                Some(value) if value.is_truthy() => Some(self.parse(body)),
                _ => None,
            },
        }
    }

    /// Expand a block body against the value bound under its key
    fn repeat(&self, value: &Value, body: &str) -> String {
        match value {
            Value::List(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Map(fields) => {
                            parts.push(Resolver::with_data(fields.clone()).parse(body));
                        }
                        // Broadcast fallback: a non-map element means this
                        // is not a sequence of rows, so the body renders
                        // once against the outer data set
                        _ => {
                            parts.push(self.parse(body));
                            break;
                        }
                    }
                }
                parts.join("\n")
            }
            // A single mapping behaves as a one-element sequence of itself
            Value::Map(fields) => Resolver::with_data(fields.clone()).parse(body),
            // Scalar under a block key: broadcast once
            _ => self.parse(body),
        }
    }
}
