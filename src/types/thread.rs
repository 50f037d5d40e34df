use std::fmt;

use super::common::Identity;

// ---------------------------------------------------------------------------
// Thread kind
// ---------------------------------------------------------------------------

/// Which kind of GitHub conversation a thread is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadKind {
    Issue,
    Discussion,
}

impl ThreadKind {
    /// Path segment used both on github.com and in the REST API.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Issue => "issues",
            Self::Discussion => "discussions",
        }
    }

    /// Map a URL path segment back to a kind.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "issues" => Some(Self::Issue),
            "discussions" => Some(Self::Discussion),
            _ => None,
        }
    }

    /// Capitalised label used in rendered headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Issue => "Issue",
            Self::Discussion => "Discussion",
        }
    }

    /// Lowercase singular form, used in file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Discussion => "discussion",
        }
    }
}

impl fmt::Display for ThreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ---------------------------------------------------------------------------
// Locator
// ---------------------------------------------------------------------------

/// A resolved reference to one issue or discussion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadLocator {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub kind: ThreadKind,
}

impl ThreadLocator {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Default file name for a saved rendering, e.g. `acme_widgets_issue_42.md`.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}_{}.md",
            self.owner,
            self.repo,
            self.kind.slug(),
            self.number
        )
    }
}

impl fmt::Display for ThreadLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {} #{}", self.owner, self.repo, self.kind, self.number)
    }
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// The root post of a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadHeader {
    pub kind: ThreadKind,
    pub title: String,
    pub body: String,
    pub number: u64,
    pub url: String,
    pub author: Identity,
    pub comment_count: u64,
}
