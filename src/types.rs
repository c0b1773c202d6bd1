//! Core types for changelogup

use crate::error::Error;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A repository identifier in `owner/repo` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Owner rules per GitHub: alphanumeric and hyphens, no leading hyphen
        let re = Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+)$").unwrap();
        let caps = re.captures(s).ok_or_else(|| {
            Error::Config(format!("repository must be in owner/repo form, got `{s}`"))
        })?;

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One commit from the target repository
///
/// Built by the fetcher from API response data; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit SHA (hex)
    pub sha: String,
    /// Author name
    pub author: String,
    /// When the commit was authored
    pub timestamp: DateTime<Utc>,
    /// Full commit message
    pub message: String,
}

impl CommitRecord {
    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Abbreviated SHA (first 7 characters)
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_repo_id() {
        let id: RepoId = "acme/widgets".parse().unwrap();
        assert_eq!(id.owner, "acme");
        assert_eq!(id.repo, "widgets");
        assert_eq!(id.to_string(), "acme/widgets");
    }

    #[test]
    fn test_parse_repo_id_with_dots_and_dashes() {
        let id: RepoId = "my-org/my.repo-name".parse().unwrap();
        assert_eq!(id.owner, "my-org");
        assert_eq!(id.repo, "my.repo-name");
    }

    #[test]
    fn test_parse_repo_id_rejects_missing_slash() {
        assert!("acmewidgets".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_parse_repo_id_rejects_extra_segments() {
        assert!("acme/widgets/extra".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_parse_repo_id_rejects_empty_segments() {
        assert!("/widgets".parse::<RepoId>().is_err());
        assert!("acme/".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_summary_is_first_line() {
        let record = CommitRecord {
            sha: "abc123def456".to_string(),
            author: "alice".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            message: "Fix bug\n\nLonger explanation.".to_string(),
        };
        assert_eq!(record.summary(), "Fix bug");
        assert_eq!(record.short_sha(), "abc123d");
    }

    #[test]
    fn test_short_sha_of_short_input() {
        let record = CommitRecord {
            sha: "abc".to_string(),
            author: "alice".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap(),
            message: String::new(),
        };
        assert_eq!(record.short_sha(), "abc");
        assert_eq!(record.summary(), "");
    }
}
