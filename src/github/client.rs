use http::header::{ACCEPT, AUTHORIZATION};
use http::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::ThreadError;
use crate::github::link::next_page_url;
use crate::github::transport::{RawResponse, Transport};
use crate::github::types::{ApiComment, ApiDiscussion, ApiErrorBody, ApiIssue, ApiReaction};
use crate::markdown::RenderOptions;
use crate::types::{Comment, Reaction, ThreadHeader, ThreadKind, ThreadLocator};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Fetches a thread, its comments and their reactions through a [`Transport`].
///
/// Every request is issued one at a time, in order. The first failure aborts
/// the whole operation; partially collected data is dropped.
pub struct ThreadClient<T> {
    transport: T,
    api_url: String,
    token: Option<String>,
}

impl<T: Transport> ThreadClient<T> {
    /// Create a client for `api_url`, optionally sending `token` as a bearer
    /// credential on every request.
    pub fn new(transport: T, api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_owned();
        let token = token.filter(|t| !t.is_empty());
        Self {
            transport,
            api_url,
            token,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch the root post of an issue or discussion.
    pub async fn fetch_thread(&self, locator: &ThreadLocator) -> Result<ThreadHeader, ThreadError> {
        let response = self.get_ok(&self.thread_url(locator)).await?;

        let header = match locator.kind {
            ThreadKind::Issue => decode::<ApiIssue>(&response, "issue")?.into_domain(),
            ThreadKind::Discussion => {
                decode::<ApiDiscussion>(&response, "discussion")?.into_domain()
            }
        };
        tracing::debug!(
            "fetched {locator}: {:?} ({} comments reported)",
            header.title,
            header.comment_count
        );
        Ok(header)
    }

    /// Fetch every comment of a thread, following `Link: rel="next"` cursors.
    ///
    /// With `options.include_reactions`, each comment of a page is enriched
    /// with its reactions before the next page is requested.
    pub async fn fetch_comments(
        &self,
        locator: &ThreadLocator,
        options: &RenderOptions,
    ) -> Result<Vec<Comment>, ThreadError> {
        let mut comments = Vec::new();
        let mut cursor = Some(self.comments_url(locator));
        let mut page = 0_usize;

        while let Some(url) = cursor.take() {
            page += 1;
            let response = self.get_ok(&url).await?;
            let decoded = decode::<Vec<ApiComment>>(&response, "comment page")?;
            tracing::debug!("{locator}: comment page {page} has {} entries", decoded.len());

            for api_comment in decoded {
                let comment = api_comment.into_domain();
                let comment = if options.include_reactions {
                    let reactions = self
                        .fetch_reactions(&locator.owner, &locator.repo, comment.id)
                        .await?;
                    comment.with_reactions(reactions)
                } else {
                    comment
                };
                comments.push(comment);
            }

            cursor = next_page_url(&response.headers);
        }

        tracing::debug!("{locator}: {} comments across {page} page(s)", comments.len());
        Ok(comments)
    }

    /// Fetch the reactions of one comment, in API order.
    ///
    /// Reaction listings often need authentication even when the comment
    /// listing does not, so failures name the comment and point at the token.
    pub async fn fetch_reactions(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Vec<Reaction>, ThreadError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions",
            self.api_url
        );

        let response = self.get_ok(&url).await.map_err(|err| match err {
            ThreadError::Upstream { status, message } => ThreadError::Upstream {
                status,
                message: format!(
                    "fetching reactions for comment {comment_id}: {message} \
                     (a valid GITHUB_TOKEN may be required)"
                ),
            },
            other => other,
        })?;

        let reactions = decode::<Vec<ApiReaction>>(&response, "reactions")?
            .into_iter()
            .map(ApiReaction::into_domain)
            .collect();
        Ok(reactions)
    }

    fn thread_url(&self, locator: &ThreadLocator) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url,
            locator.full_name(),
            locator.kind.path_segment(),
            locator.number
        )
    }

    fn comments_url(&self, locator: &ThreadLocator) -> String {
        let base = format!("{}/comments", self.thread_url(locator));
        match locator.kind {
            ThreadKind::Issue => base,
            ThreadKind::Discussion => format!("{base}?state=all"),
        }
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("token contains invalid header characters, sending anonymously");
                }
            }
        }
        headers
    }

    /// GET `url`, turning any non-success status into [`ThreadError::Upstream`].
    async fn get_ok(&self, url: &str) -> Result<RawResponse, ThreadError> {
        tracing::debug!("GET {url}");
        let response = self.transport.get(url, self.request_headers()).await?;
        if response.status.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_owned()
            });
        tracing::debug!("GET {url} -> {}: {message}", response.status);
        Err(ThreadError::Upstream {
            status: response.status.as_u16(),
            message,
        })
    }
}

fn decode<D: DeserializeOwned>(response: &RawResponse, context: &str) -> Result<D, ThreadError> {
    serde_json::from_slice(&response.body).map_err(|source| ThreadError::Decode {
        context: context.to_owned(),
        source,
    })
}
