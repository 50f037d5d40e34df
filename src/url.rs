use crate::error::ThreadError;
use crate::types::{ThreadKind, ThreadLocator};

/// Parse a GitHub issue or discussion URL into a [`ThreadLocator`].
///
/// Supported patterns:
/// - `https://<host>/<owner>/<repo>/issues/<number>`
/// - `https://<host>/<owner>/<repo>/discussions/<number>`
///
/// Both `https://` and `http://` schemes are accepted. Query strings and
/// fragments (`#issuecomment-123`) are stripped before parsing, and leading or
/// trailing slashes on the path are ignored. Anything else, including extra
/// trailing segments such as `/files`, is rejected with
/// [`ThreadError::InvalidLocator`].
pub fn parse_thread_url(url: &str) -> Result<ThreadLocator, ThreadError> {
    let trimmed = url.trim();
    let after_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ThreadError::invalid_locator(url, "expected an http(s) URL"))?;

    // Split into host and remaining path.
    let (host, path) = after_scheme.split_once('/').unwrap_or((after_scheme, ""));
    if host.is_empty() {
        return Err(ThreadError::invalid_locator(url, "missing host"));
    }

    // Strip query string and fragment before splitting into segments.
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let path = path.split_once('#').map_or(path, |(p, _)| p);

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let [owner, repo, kind, number] = segments.as_slice() else {
        return Err(ThreadError::invalid_locator(
            url,
            format!(
                "expected <owner>/<repo>/<issues|discussions>/<number>, got {} path segment(s)",
                segments.len()
            ),
        ));
    };

    if owner.is_empty() || repo.is_empty() {
        return Err(ThreadError::invalid_locator(url, "empty owner or repository"));
    }

    let kind = ThreadKind::from_path_segment(kind).ok_or_else(|| {
        ThreadError::invalid_locator(
            url,
            format!("unsupported thread type {kind:?}, expected \"issues\" or \"discussions\""),
        )
    })?;

    let number = number
        .parse::<u64>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ThreadError::invalid_locator(url, format!("invalid number {number:?}")))?;

    Ok(ThreadLocator {
        owner: (*owner).to_owned(),
        repo: (*repo).to_owned(),
        number,
        kind,
    })
}
