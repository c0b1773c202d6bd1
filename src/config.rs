//! Run configuration resolution
//!
//! Validates caller-supplied inputs into an immutable [`RunConfig`] before
//! any network call is made.

use crate::error::{Error, Result};
use crate::types::RepoId;
use std::path::PathBuf;

/// Default output path for the rendered changelog
pub const DEFAULT_OUTPUT: &str = "CHANGELOG.md";

/// Validated inputs governing one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// GitHub personal access token
    pub token: String,
    /// Target repository
    pub repo: RepoId,
    /// Where the rendered changelog is written
    pub output: PathBuf,
    /// Group entries by conventional commit type
    pub grouped: bool,
    /// GitHub Enterprise hostname (`None` for github.com)
    pub host: Option<String>,
}

impl RunConfig {
    /// Validate raw inputs into a run configuration.
    ///
    /// Fails with [`Error::Config`] when the token is missing or blank, or
    /// when the repository identifier is not `owner/repo`. The output path
    /// defaults to [`DEFAULT_OUTPUT`].
    pub fn resolve(
        token: Option<String>,
        repo: Option<&str>,
        output: Option<PathBuf>,
        grouped: bool,
        host: Option<String>,
    ) -> Result<Self> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config("a GitHub token is required (--token)".to_string()))?;

        let repo: RepoId = repo
            .ok_or_else(|| Error::Config("a repository is required (--repo owner/repo)".to_string()))?
            .parse()?;

        Ok(Self {
            token,
            repo,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            grouped,
            host,
        })
    }
}
