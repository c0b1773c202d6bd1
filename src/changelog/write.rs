//! Changelog persistence

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Write the rendered document to `path`, replacing any existing file.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
