use serde::Deserialize;

use crate::github::client::DEFAULT_API_URL;
use crate::markdown::RenderOptions;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub github: GitHubConfig,
    pub defaults: Defaults,
}

// ---------------------------------------------------------------------------
// GitHub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Host passed to `gh auth token --hostname`.
    pub host: String,
    /// REST API root. Use `https://<host>/api/v3` for GitHub Enterprise.
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            host: "github.com".to_owned(),
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub enable_reactions: bool,
    pub enable_user_links: bool,
}

impl Defaults {
    /// Combine config defaults with command-line flags. Flags can only turn
    /// options on.
    pub fn render_options(self, enable_reactions: bool, enable_user_links: bool) -> RenderOptions {
        RenderOptions {
            include_reactions: self.enable_reactions || enable_reactions,
            include_author_links: self.enable_user_links || enable_user_links,
        }
    }
}
