//! Stencil - a minimal placeholder-template engine
//!
//! Given a template string containing placeholder markers and a bound data
//! set (scalars, nested mappings, and sequences of mappings), stencil
//! produces an output string by substituting, repeating, and conditionally
//! including template fragments.
//!
//! Placeholder forms:
//!
//! - `{$name}` / `{@name}` - plain value lookup
//! - `{#name}` - count/length query
//! - `{name/}`, `{name, args/}` - self-closing key reference
//! - `{name}...{/name}` - block, repeated per element of a bound sequence
//! - `{!name}...{/!name}` - existence gate on the bound value
//!
//! Anything that fails to match the grammar passes through as literal text;
//! unresolved placeholders render as the empty string (or whatever a
//! caller-supplied missing-value handler returns).
//!
//! # Example
//!
//! ```rust
//! use stencil::Resolver;
//!
//! let mut resolver = Resolver::new();
//! resolver.set("title", "Post 1").set("detail", "Some Post");
//! let html = resolver.parse("<h1>{$title}</h1><p>{detail/}</p>");
//! assert_eq!(html, "<h1>Post 1</h1><p>Some Post</p>");
//! ```

pub mod parser;
pub mod template;

pub use parser::{parse, ArgMap, Placeholder, Segment};
pub use template::{
    load_data, parse_data, render_file, Data, DataError, LoadError, MissingHandler, Resolver,
    Value,
};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in the file-rendering pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading or rendering the template file
    #[error("template error: {0}")]
    Template(#[from] LoadError),

    /// Error loading the data file
    #[error("data error: {0}")]
    Data(#[from] DataError),
}

/// Render a template string against a data set
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use stencil::{render, Data, Value};
///
/// let mut data = Data::new();
/// data.insert("name".to_string(), Value::from("world"));
/// assert_eq!(render("hello {$name}", data), "hello world");
/// ```
pub fn render(template: &str, data: Data) -> String {
    Resolver::with_data(data).parse(template)
}

/// Render a template file against a TOML data file
pub fn render_files(template: &Path, data: &Path) -> Result<String, RenderError> {
    let bindings = load_data(data)?;
    Ok(render_file(template, &bindings)?)
}
