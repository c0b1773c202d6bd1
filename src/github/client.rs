//! GitHub REST client using reqwest

use crate::error::{Error, Result};
use crate::github::CommitSource;
use crate::types::{CommitRecord, RepoId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Commits requested per page (the API maximum)
const PER_PAGE: usize = 100;

/// GitHub client scoped to a single run
///
/// Constructed from the validated configuration and passed into the
/// pipeline; holds no process-wide state.
pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: String,
}

/// Raw commit entry from `GET /repos/{owner}/{repo}/commits`
#[derive(Deserialize)]
struct RawCommit {
    sha: String,
    commit: RawCommitDetail,
}

#[derive(Deserialize)]
struct RawCommitDetail {
    author: Option<RawSignature>,
    committer: Option<RawSignature>,
    message: String,
}

#[derive(Deserialize)]
struct RawSignature {
    name: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl RawCommit {
    /// Map the raw payload onto a [`CommitRecord`].
    ///
    /// The author signature is preferred; the committer signature fills in
    /// when the author block is absent. A commit with neither is a schema
    /// violation.
    fn into_record(self) -> Result<CommitRecord> {
        let author = self
            .commit
            .author
            .as_ref()
            .and_then(|s| s.name.clone())
            .or_else(|| self.commit.committer.as_ref().and_then(|s| s.name.clone()))
            .ok_or_else(|| Error::Schema(format!("commit {} has no author name", self.sha)))?;

        let timestamp = self
            .commit
            .author
            .as_ref()
            .and_then(|s| s.date)
            .or_else(|| self.commit.committer.as_ref().and_then(|s| s.date))
            .ok_or_else(|| Error::Schema(format!("commit {} has no author date", self.sha)))?;

        Ok(CommitRecord {
            sha: self.sha,
            author,
            timestamp,
            message: self.commit.message,
        })
    }
}

impl GitHubClient {
    /// Create a client for github.com, or for a GitHub Enterprise instance
    /// when `host` is given.
    pub fn new(token: &str, host: Option<String>) -> Result<Self> {
        let base_url = host.map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        );
        Self::with_base_url(token, base_url)
    }

    /// Create a client against an explicit base URL.
    ///
    /// Used by tests to point at a local mock server.
    pub fn with_base_url(token: &str, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("changelogup/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token: token.to_string(),
            base_url: base_url.into(),
        })
    }

    fn commits_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/commits", self.base_url, repo.owner, repo.repo)
    }

    /// Fetch one page of the commit listing.
    async fn fetch_page(&self, repo: &RepoId, page: u32) -> Result<Vec<RawCommit>> {
        let response = self
            .client
            .get(self.commits_url(repo))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .query(&[
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK => {}
            // GitHub answers 409 for a repository without commits
            StatusCode::CONFLICT => return Ok(Vec::new()),
            StatusCode::UNAUTHORIZED => {
                return Err(Error::Auth("token rejected by the GitHub API".to_string()));
            }
            StatusCode::NOT_FOUND => return Err(Error::NotFound(repo.to_string())),
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(Error::RateLimit("API quota exhausted".to_string()));
            }
            StatusCode::FORBIDDEN => {
                // 403 covers both quota exhaustion and missing token scopes
                let exhausted = response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    == Some("0");
                if exhausted {
                    return Err(Error::RateLimit("API quota exhausted".to_string()));
                }
                return Err(Error::Auth(
                    "access forbidden; the token may be missing the repo scope".to_string(),
                ));
            }
            other => {
                return Err(Error::Api(format!(
                    "GET {} answered {other}",
                    self.commits_url(repo)
                )));
            }
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Schema(format!("cannot decode commit listing page {page}: {e}")))
    }
}

/// Lazy, finite, non-restartable sequence of commit pages.
///
/// Each call to [`CommitPages::next_page`] issues one blocking fetch; a
/// short page ends the sequence. Once drained it cannot be rewound.
struct CommitPages<'a> {
    client: &'a GitHubClient,
    repo: &'a RepoId,
    next: Option<u32>,
}

impl<'a> CommitPages<'a> {
    const fn new(client: &'a GitHubClient, repo: &'a RepoId) -> Self {
        Self {
            client,
            repo,
            next: Some(1),
        }
    }

    async fn next_page(&mut self) -> Result<Option<Vec<RawCommit>>> {
        let Some(page) = self.next else {
            return Ok(None);
        };

        let raw = self.client.fetch_page(self.repo, page).await?;
        self.next = if raw.len() == PER_PAGE {
            Some(page + 1)
        } else {
            None
        };

        debug!("fetched commit page {page} ({} entries)", raw.len());
        Ok(Some(raw))
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn list_commits(&self, repo: &RepoId) -> Result<Vec<CommitRecord>> {
        let mut pages = CommitPages::new(self, repo);
        let mut commits = Vec::new();

        while let Some(raw) = pages.next_page().await? {
            for entry in raw {
                commits.push(entry.into_record()?);
            }
        }

        debug!("fetched {} commits for {repo}", commits.len());
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(name: Option<&str>, date: Option<&str>) -> RawSignature {
        RawSignature {
            name: name.map(ToString::to_string),
            date: date.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_record_mapping_prefers_author() {
        let raw = RawCommit {
            sha: "abc123".to_string(),
            commit: RawCommitDetail {
                author: Some(signature(Some("alice"), Some("2024-01-05T12:00:00Z"))),
                committer: Some(signature(Some("bot"), Some("2024-01-06T12:00:00Z"))),
                message: "Fix bug".to_string(),
            },
        };

        let record = raw.into_record().unwrap();
        assert_eq!(record.author, "alice");
        assert_eq!(record.timestamp.to_rfc3339(), "2024-01-05T12:00:00+00:00");
    }

    #[test]
    fn test_record_mapping_falls_back_to_committer() {
        let raw = RawCommit {
            sha: "abc123".to_string(),
            commit: RawCommitDetail {
                author: None,
                committer: Some(signature(Some("bot"), Some("2024-01-06T12:00:00Z"))),
                message: "Fix bug".to_string(),
            },
        };

        let record = raw.into_record().unwrap();
        assert_eq!(record.author, "bot");
    }

    #[test]
    fn test_record_mapping_fails_without_signature() {
        let raw = RawCommit {
            sha: "abc123".to_string(),
            commit: RawCommitDetail {
                author: None,
                committer: None,
                message: "Fix bug".to_string(),
            },
        };

        let err = raw.into_record().unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_enterprise_base_url() {
        let client =
            GitHubClient::new("token", Some("github.example.com".to_string())).unwrap();
        assert_eq!(
            client.commits_url(&"acme/widgets".parse().unwrap()),
            "https://github.example.com/api/v3/repos/acme/widgets/commits"
        );
    }
}
