//! Changelog rendering
//!
//! Deterministic: an identical commit sequence always renders to identical
//! text. Entries keep the fetcher's ordering; the grouped layout only
//! buckets them, it never re-sorts within a section.

use crate::changelog::Category;
use crate::types::CommitRecord;

/// Document header, before any entries
const HEADER: &str =
    "# Changelog\n\nAll notable changes to this project will be documented in this file.\n";

/// How entries are arranged in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One list in fetcher order
    #[default]
    Flat,
    /// Sections by conventional commit type, fetcher order within each
    Grouped,
}

/// Render the changelog document for a commit sequence.
///
/// An empty sequence renders the header alone.
pub fn render(commits: &[CommitRecord], layout: Layout) -> String {
    let mut doc = String::from(HEADER);
    if commits.is_empty() {
        return doc;
    }

    doc.push('\n');
    match layout {
        Layout::Flat => render_flat(&mut doc, commits),
        Layout::Grouped => render_grouped(&mut doc, commits),
    }
    doc
}

/// One rendered entry: date, summary, abbreviated SHA, author
fn entry(record: &CommitRecord) -> String {
    format!(
        "- {} {} ({}) - {}\n",
        record.timestamp.format("%Y-%m-%d"),
        record.summary(),
        record.short_sha(),
        record.author
    )
}

fn render_flat(doc: &mut String, commits: &[CommitRecord]) {
    for record in commits {
        doc.push_str(&entry(record));
    }
}

fn render_grouped(doc: &mut String, commits: &[CommitRecord]) {
    let mut first = true;
    for category in Category::ORDER {
        let section: Vec<&CommitRecord> = commits
            .iter()
            .filter(|r| Category::of(r) == category)
            .collect();
        if section.is_empty() {
            continue;
        }

        if !first {
            doc.push('\n');
        }
        first = false;

        doc.push_str(category.heading());
        doc.push_str("\n\n");
        for record in section {
            doc.push_str(&entry(record));
        }
    }
}
