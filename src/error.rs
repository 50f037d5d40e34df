use thiserror::Error;

/// Boxed error from the underlying HTTP primitive.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can abort a thread conversion.
///
/// None of these are retried; the first one encountered ends the whole
/// operation and no Markdown is produced.
#[derive(Debug, Error)]
pub enum ThreadError {
    #[error("invalid GitHub thread URL \"{input}\": {reason}")]
    InvalidLocator { input: String, reason: String },

    #[error("GitHub API returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("decoding {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl ThreadError {
    pub(crate) fn invalid_locator(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLocator {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    /// HTTP status for `Upstream` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_locator_message_carries_input() {
        let err = ThreadError::invalid_locator("https://github.com/x", "expected 4 path segments");
        let msg = err.to_string();
        assert!(msg.contains("https://github.com/x"), "{msg}");
        assert!(msg.contains("expected 4 path segments"), "{msg}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn upstream_exposes_status() {
        let err = ThreadError::Upstream {
            status: 404,
            message: "Not Found".to_owned(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "GitHub API returned status 404: Not Found");
    }
}
