// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod convert;
pub mod error;
pub mod github;
pub mod markdown;
pub mod types;
pub mod url;

pub use convert::thread_to_markdown;
pub use error::ThreadError;
pub use markdown::RenderOptions;
pub use url::parse_thread_url;
