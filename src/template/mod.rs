//! Template resolution against bound data
//!
//! This module provides the engine core: the [`Value`] data model, the
//! [`Resolver`] that performs recursive placeholder substitution, and the
//! file-template loader.
//!
//! # Example
//!
//! ```text
//! {rows}<h1>{title/}</h1>{!comments}<span>{#comments}</span>{/!comments}{/rows}
//! ```
//!
//! Bound to a `rows` sequence, the body renders once per element; the
//! negated block gates the span on each row having comments.

mod loader;
mod resolver;
mod value;

pub use loader::{render_file, LoadError};
pub use resolver::{MissingHandler, Resolver};
pub use value::{load_data, parse_data, Data, DataError, Value};
