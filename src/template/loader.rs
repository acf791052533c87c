//! File-template loader
//!
//! The host-side entry point: load a template file and render it against a
//! data set. Deliberately restricted to placeholder substitution; there is
//! no code evaluation of any kind.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::resolver::Resolver;
use super::value::Data;

/// Errors that can occur when rendering a template file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a template file and render it against the given data set
pub fn render_file(path: &Path, data: &Data) -> Result<String, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Resolver::with_data(data.clone()).parse(&contents))
}
