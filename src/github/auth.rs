use std::process::Command;

use anyhow::{Context, Result, bail};

/// Resolve an optional GitHub auth token for the given host.
///
/// Priority:
/// 1. `gh auth token --hostname {host}` (gh CLI)
/// 2. `GH_TOKEN` environment variable
/// 3. `GITHUB_TOKEN` environment variable
///
/// Returns `None` when nothing is configured; public threads can still be
/// read anonymously, but reaction listings usually need a token.
pub fn resolve_token(host: &str) -> Option<String> {
    // Try gh CLI first.
    match token_from_gh_cli(host) {
        Ok(token) => return Some(token),
        Err(e) => tracing::debug!("gh CLI token unavailable: {e:#}"),
    }

    // Fall back to environment variables.
    let token = token_from_env(["GH_TOKEN", "GITHUB_TOKEN"]);
    if token.is_none() {
        tracing::debug!("no GitHub token found for host {host:?}, continuing anonymously");
    }
    token
}

/// First non-empty value among the given environment variables.
fn token_from_env<const N: usize>(names: [&str; N]) -> Option<String> {
    names
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|token| token.trim().to_owned())
        .find(|token| !token.is_empty())
}

fn token_from_gh_cli(host: &str) -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        .context("failed to run `gh auth token`")?;

    if !output.status.success() {
        bail!("gh auth token exited with non-zero status");
    }

    let token = String::from_utf8(output.stdout)
        .context("gh auth token produced non-UTF-8 output")?
        .trim()
        .to_owned();

    if token.is_empty() {
        bail!("gh auth token returned empty string");
    }

    Ok(token)
}
