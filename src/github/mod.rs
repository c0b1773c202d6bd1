//! GitHub commit history access
//!
//! The [`CommitSource`] trait seams the API off from the rest of the
//! pipeline, so rendering and writing can be tested without network access.

mod client;

pub use client::GitHubClient;

use crate::error::Result;
use crate::types::{CommitRecord, RepoId};
use async_trait::async_trait;

/// Source of commit history for a repository
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Fetch every commit of `repo` across all pages, in the API's native
    /// order (most recent first). An empty sequence is a valid result.
    async fn list_commits(&self, repo: &RepoId) -> Result<Vec<CommitRecord>>;
}
