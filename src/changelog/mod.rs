//! Changelog document pipeline
//!
//! Rendering and persistence of fetched commit history, plus the
//! fetch-render-write entry point driving one run.

mod category;
mod render;
mod write;

pub use category::Category;
pub use render::{render, Layout};
pub use write::write_document;

use crate::config::RunConfig;
use crate::error::Result;
use crate::github::CommitSource;

/// Outcome of a successful run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Number of rendered entries
    pub entries: usize,
    /// Size of the written document in bytes
    pub bytes: usize,
}

/// Fetch, render, and write the changelog for one run.
///
/// A failure in any stage aborts before the writer executes, so the output
/// file is never touched on a failed run.
pub async fn generate(source: &dyn CommitSource, config: &RunConfig) -> Result<RunSummary> {
    let commits = source.list_commits(&config.repo).await?;

    let layout = if config.grouped {
        Layout::Grouped
    } else {
        Layout::Flat
    };
    let doc = render(&commits, layout);

    write_document(&config.output, &doc)?;

    Ok(RunSummary {
        entries: commits.len(),
        bytes: doc.len(),
    })
}
