//! Conventional-commit classification

use crate::types::CommitRecord;
use regex::Regex;
use std::sync::OnceLock;

/// Changelog section a commit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `feat:` commits
    Feature,
    /// `fix:` commits
    Fix,
    /// `docs:` commits
    Docs,
    /// `refactor:` commits
    Refactor,
    /// `test:` commits
    Test,
    /// `chore:` commits and anything unclassified
    Chore,
    /// `breaking:` commits or any type marked with `!`
    Breaking,
}

impl Category {
    /// Section render order
    pub const ORDER: [Self; 7] = [
        Self::Feature,
        Self::Fix,
        Self::Docs,
        Self::Refactor,
        Self::Test,
        Self::Chore,
        Self::Breaking,
    ];

    /// Markdown heading for this section
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Feature => "### ✨ New Features",
            Self::Fix => "### 🐛 Bug Fixes",
            Self::Docs => "### 📚 Documentation",
            Self::Refactor => "### ♻️ Code Refactoring",
            Self::Test => "### 🧪 Tests",
            Self::Chore => "### 🔧 Maintenance",
            Self::Breaking => "### ⚠️ Breaking Changes",
        }
    }

    /// Classify a commit by the conventional-commit prefix of its summary.
    ///
    /// `type(scope)!: subject` form; `!` marks a breaking change regardless
    /// of type. Summaries without a recognized prefix land in Maintenance.
    pub fn of(record: &CommitRecord) -> Self {
        static PREFIX: OnceLock<Regex> = OnceLock::new();
        let re = PREFIX.get_or_init(|| {
            Regex::new(r"^(feat|fix|docs|refactor|test|chore|breaking)(\([^)]*\))?(!)?: ").unwrap()
        });

        let Some(caps) = re.captures(record.summary()) else {
            return Self::Chore;
        };

        if caps.get(3).is_some() {
            return Self::Breaking;
        }

        match &caps[1] {
            "feat" => Self::Feature,
            "fix" => Self::Fix,
            "docs" => Self::Docs,
            "refactor" => Self::Refactor,
            "test" => Self::Test,
            "breaking" => Self::Breaking,
            _ => Self::Chore,
        }
    }
}
