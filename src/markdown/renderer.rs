use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::types::{Comment, Identity, Reaction, ThreadHeader};

/// Base of the canonical profile URL, `{base}/{login}`.
pub const PROFILE_BASE_URL: &str = "https://github.com";

/// Output toggles shared by the fetcher and the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fetch reactions for every comment and render a reactions block.
    pub include_reactions: bool,
    /// Render authors and reaction voters as profile links.
    pub include_author_links: bool,
}

/// Render a login either bare or as a `[login](https://github.com/login)` link.
pub fn author_mention(identity: &Identity, options: &RenderOptions) -> String {
    if options.include_author_links {
        format!("[{0}]({PROFILE_BASE_URL}/{0})", identity.login)
    } else {
        identity.login.clone()
    }
}

/// Render a thread and its comments as a Markdown document.
///
/// Pure and deterministic: the same inputs always produce the same bytes.
pub fn render(header: &ThreadHeader, comments: &[Comment], options: &RenderOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}\n", header.title);
    let _ = writeln!(out, "**{} Number**: #{}", header.kind.label(), header.number);
    let _ = writeln!(out, "**URL**: {}", header.url);
    let _ = writeln!(
        out,
        "**Created by**: {}\n",
        author_mention(&header.author, options)
    );
    let _ = writeln!(out, "## Description\n\n{}\n", header.body);

    if comments.is_empty() {
        return out;
    }

    out.push_str("## Comments\n\n");
    for (index, comment) in comments.iter().enumerate() {
        let _ = writeln!(
            out,
            "### Comment {} by {}\n",
            index + 1,
            author_mention(&comment.author, options)
        );
        let _ = writeln!(out, "{}\n", comment.body);
        if options.include_reactions {
            write_reactions(&mut out, &comment.reactions, options);
        }
    }

    out
}

/// Reactions grouped by label; labels sorted bytewise, voters kept in API order.
fn group_reactions(reactions: &[Reaction]) -> BTreeMap<&str, Vec<&Identity>> {
    let mut groups: BTreeMap<&str, Vec<&Identity>> = BTreeMap::new();
    for reaction in reactions {
        groups
            .entry(reaction.content.as_str())
            .or_default()
            .push(&reaction.user);
    }
    groups
}

fn write_reactions(out: &mut String, reactions: &[Reaction], options: &RenderOptions) {
    if reactions.is_empty() {
        return;
    }

    out.push_str("**Reactions:**\n");
    for (content, users) in group_reactions(reactions) {
        let _ = writeln!(out, "- :{content}: by {} user(s):", users.len());
        for user in users {
            let _ = writeln!(out, "  - {}", author_mention(user, options));
        }
    }
    out.push('\n');
}
