//! REST payload shapes, decoded with the exact field names GitHub uses and
//! converted into the shared domain types.

use serde::Deserialize;

use crate::types::{Comment, Identity, Reaction, ThreadHeader, ThreadKind};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiUser {
    pub login: String,
}

impl From<ApiUser> for Identity {
    fn from(user: ApiUser) -> Self {
        Identity { login: user.login }
    }
}

/// `GET /repos/{owner}/{repo}/issues/{number}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiIssue {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub number: u64,
    pub url: String,
    #[serde(default)]
    pub comments: u64,
    pub user: ApiUser,
}

impl ApiIssue {
    pub fn into_domain(self) -> ThreadHeader {
        ThreadHeader {
            kind: ThreadKind::Issue,
            title: self.title,
            body: self.body.unwrap_or_default(),
            number: self.number,
            url: self.url,
            author: self.user.into(),
            comment_count: self.comments,
        }
    }
}

/// `GET /repos/{owner}/{repo}/discussions/{number}`
#[derive(Debug, Deserialize)]
pub(crate) struct ApiDiscussion {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub number: u64,
    pub html_url: String,
    #[serde(default)]
    pub comments_count: u64,
    pub user: ApiUser,
}

impl ApiDiscussion {
    pub fn into_domain(self) -> ThreadHeader {
        ThreadHeader {
            kind: ThreadKind::Discussion,
            title: self.title,
            body: self.body.unwrap_or_default(),
            number: self.number,
            url: self.html_url,
            author: self.user.into(),
            comment_count: self.comments_count,
        }
    }
}

/// One element of an issue or discussion comment listing.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    pub user: ApiUser,
}

impl ApiComment {
    pub fn into_domain(self) -> Comment {
        Comment {
            id: self.id,
            body: self.body.unwrap_or_default(),
            author: self.user.into(),
            reactions: Vec::new(),
        }
    }
}

/// One element of `GET /repos/{owner}/{repo}/issues/comments/{id}/reactions`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiReaction {
    pub content: String,
    pub user: ApiUser,
}

impl ApiReaction {
    pub fn into_domain(self) -> Reaction {
        Reaction {
            content: self.content,
            user: self.user.into(),
        }
    }
}

/// Error payload GitHub attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
