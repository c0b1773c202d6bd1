//! Test data factories for changelogup types
//!
//! These are test utilities - not every factory is used by every test file.

#![allow(dead_code)]

use changelogup::types::CommitRecord;

/// Create a commit record from literal parts
pub fn make_commit(sha: &str, author: &str, date: &str, message: &str) -> CommitRecord {
    CommitRecord {
        sha: sha.to_string(),
        author: author.to_string(),
        timestamp: date.parse().unwrap(),
        message: message.to_string(),
    }
}

/// Two commits of the `acme/widgets` repository, newest first
pub fn widgets_commits() -> Vec<CommitRecord> {
    vec![
        make_commit("abc123", "alice", "2024-01-05T12:00:00Z", "Fix bug"),
        make_commit("def456", "bob", "2024-01-04T12:00:00Z", "Add feature"),
    ]
}
