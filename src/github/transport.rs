use anyhow::Context;
use http::{HeaderMap, StatusCode};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;

use crate::error::ThreadError;

/// A fully-read HTTP response: status, headers and body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Build a response with an empty header map.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// The HTTP GET primitive the thread client is built on.
///
/// Implementations return non-success statuses as ordinary responses; only
/// network-level failures become [`ThreadError::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<RawResponse, ThreadError>;
}

/// Production transport backed by an unauthenticated Octocrab instance.
///
/// Credentials are supplied per request by the caller as an `Authorization`
/// header, so the same instance serves anonymous and token-backed reads.
pub struct OctocrabTransport {
    octocrab: Octocrab,
}

impl OctocrabTransport {
    /// Create a transport whose relative requests resolve against `base_uri`
    /// (e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`).
    ///
    /// Every request is sent exactly once; octocrab's retry layer is off.
    /// Must be called from within a Tokio runtime.
    pub fn new(base_uri: &str) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(base_uri)
            .with_context(|| format!("setting base URI {base_uri}"))?
            .build()
            .context("building octocrab instance")?;
        Ok(Self { octocrab })
    }
}

impl Transport for OctocrabTransport {
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<RawResponse, ThreadError> {
        let transport_err = |source: octocrab::Error| ThreadError::Transport {
            url: url.to_owned(),
            source: Box::new(source),
        };

        // Raw request: status mapping happens in the client, not in octocrab.
        let response = self
            .octocrab
            ._get_with_headers(url, Some(headers))
            .await
            .map_err(transport_err)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(transport_err)?;

        Ok(RawResponse {
            status,
            headers,
            body: body.into_bytes(),
        })
    }
}
