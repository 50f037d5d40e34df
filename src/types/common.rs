// ---------------------------------------------------------------------------
// Common supporting types
// ---------------------------------------------------------------------------

/// A GitHub account, identified by login only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub login: String,
}

impl Identity {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// A single reaction left on a comment.
///
/// `content` is GitHub's reaction label (`+1`, `heart`, `rocket`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub content: String,
    pub user: Identity,
}

/// A comment on an issue or discussion, in the order the API returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub body: String,
    pub author: Identity,
    /// Empty when reactions were not requested or the comment has none.
    pub reactions: Vec<Reaction>,
}

impl Comment {
    /// Consume the decoded comment and return it with `reactions` attached.
    pub fn with_reactions(self, reactions: Vec<Reaction>) -> Self {
        Self { reactions, ..self }
    }
}
