use std::collections::HashMap;
use std::sync::Mutex;

use http::header::LINK;
use http::{HeaderMap, HeaderValue, StatusCode};

use crate::error::ThreadError;

use super::transport::{RawResponse, Transport};

/// A request observed by [`StubTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// A stub transport that serves canned responses without any network calls.
///
/// Responses are keyed by the exact URL requested. Unknown URLs answer
/// `404 Not Found`. Useful for tests that must not require a `GITHUB_TOKEN`.
#[derive(Default)]
pub struct StubTransport {
    routes: HashMap<String, RawResponse>,
    failures: HashMap<String, String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with `200 OK` at `url`.
    pub fn json(self, url: &str, body: &serde_json::Value) -> Self {
        self.respond(url, RawResponse::new(StatusCode::OK, body.to_string()))
    }

    /// Serve `body` with `200 OK` at `url` and a `Link` header pointing at `next`.
    pub fn json_page(self, url: &str, body: &serde_json::Value, next: &str) -> Self {
        let link = format!("<{next}>; rel=\"next\"");
        let mut response = RawResponse::new(StatusCode::OK, body.to_string());
        if let Ok(value) = HeaderValue::from_str(&link) {
            response.headers.insert(LINK, value);
        }
        self.respond(url, response)
    }

    /// Serve an arbitrary response at `url`.
    pub fn respond(mut self, url: &str, response: RawResponse) -> Self {
        self.routes.insert(url.to_owned(), response);
        self
    }

    /// Make requests to `url` fail at the transport level.
    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.failures.insert(url.to_owned(), message.to_owned());
        self
    }

    /// Every request made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// URLs of every request made so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Transport for StubTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<RawResponse, ThreadError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                url: url.to_owned(),
                headers,
            });
        }

        if let Some(message) = self.failures.get(url) {
            return Err(ThreadError::Transport {
                url: url.to_owned(),
                source: message.clone().into(),
            });
        }

        Ok(self.routes.get(url).cloned().unwrap_or_else(|| {
            RawResponse::new(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#)
        }))
    }
}
