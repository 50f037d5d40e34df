use crate::error::ThreadError;
use crate::github::{ThreadClient, Transport};
use crate::markdown::{self, RenderOptions};
use crate::types::ThreadLocator;

/// Fetch a thread with all of its comments and render it as Markdown.
///
/// Runs the thread fetch, the paginated comment fetch (with reaction
/// enrichment when requested) and the renderer strictly in sequence. Any
/// failure returns early; no Markdown is produced from partial data.
pub async fn thread_to_markdown<T: Transport>(
    client: &ThreadClient<T>,
    locator: &ThreadLocator,
    options: &RenderOptions,
) -> Result<String, ThreadError> {
    let header = client.fetch_thread(locator).await?;
    let comments = client.fetch_comments(locator, options).await?;
    tracing::info!(
        "rendering {locator}: {} comment(s), reactions={}, author_links={}",
        comments.len(),
        options.include_reactions,
        options.include_author_links
    );
    Ok(markdown::render(&header, &comments, options))
}
