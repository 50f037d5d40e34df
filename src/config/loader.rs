use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::AppConfig;

/// Name of the repo-local config file.
pub const LOCAL_CONFIG_FILE: &str = ".issue2md.toml";

/// Discover and load the app config.
///
/// Priority:
/// 1. `--config` flag (explicit path)
/// 2. `.issue2md.toml` in the current Git repository
/// 3. `$ISSUE2MD_CONFIG` environment variable
/// 4. `$XDG_CONFIG_HOME/issue2md/config.toml`
/// 5. `~/.config/issue2md/config.toml`
///
/// If both a global and a repo-local config exist, each section of the
/// repo-local file replaces its global counterpart when it differs from the
/// built-in default.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    // If an explicit path was given, just load that.
    if let Some(path) = explicit_path {
        return read_config(path);
    }

    let cwd = std::env::current_dir().ok();
    let local_path = cwd.as_deref().and_then(find_repo_local_config);
    let global_path = find_global_config();

    let config = match (global_path, local_path) {
        (Some(global), Some(local)) => merge_configs(read_config(&global)?, read_config(&local)?),
        (Some(path), None) | (None, Some(path)) => read_config(&path)?,
        // No config found, use defaults.
        (None, None) => AppConfig::default(),
    };
    Ok(config)
}

/// Read and parse one TOML config file.
pub fn read_config(path: &Path) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parsing TOML from {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Merge repo-local config on top of global config, section by section.
fn merge_configs(global: AppConfig, local: AppConfig) -> AppConfig {
    let defaults = AppConfig::default();
    AppConfig {
        github: if local.github == defaults.github {
            global.github
        } else {
            local.github
        },
        defaults: if local.defaults == defaults.defaults {
            global.defaults
        } else {
            local.defaults
        },
    }
}

/// Walk up from `start` looking for `.issue2md.toml`, stopping at the git root.
pub fn find_repo_local_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(LOCAL_CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            // Reached git root without finding config.
            return None;
        }
        if !dir.pop() {
            return None;
        }
    }
}

fn find_global_config() -> Option<PathBuf> {
    // $ISSUE2MD_CONFIG
    if let Ok(path) = std::env::var("ISSUE2MD_CONFIG") {
        let p = PathBuf::from(&path);
        if p.is_file() {
            return Some(p);
        }
    }

    // $XDG_CONFIG_HOME/issue2md/config.toml
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let p = PathBuf::from(xdg).join("issue2md/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    // ~/.config/issue2md/config.toml
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        let p = home.join(".config/issue2md/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{Defaults, GitHubConfig};

    #[test]
    fn local_sections_override_global_when_set() {
        let global = AppConfig {
            github: GitHubConfig {
                host: "ghe.example.com".to_owned(),
                api_url: "https://ghe.example.com/api/v3".to_owned(),
            },
            defaults: Defaults {
                enable_reactions: true,
                enable_user_links: false,
            },
        };
        let local = AppConfig {
            github: GitHubConfig::default(),
            defaults: Defaults {
                enable_reactions: false,
                enable_user_links: true,
            },
        };

        let merged = merge_configs(global.clone(), local.clone());
        assert_eq!(merged.github, global.github);
        assert_eq!(merged.defaults, local.defaults);
    }
}
