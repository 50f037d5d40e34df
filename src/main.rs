use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use issue2md::config::loader;
use issue2md::github::{OctocrabTransport, ThreadClient, auth};
use issue2md::types::ThreadLocator;
use issue2md::{RenderOptions, parse_thread_url, thread_to_markdown};

#[derive(Parser)]
#[command(
    name = "issue2md",
    version,
    about = "Convert a GitHub issue or discussion into Markdown"
)]
struct Cli {
    /// GitHub issue or discussion URL.
    #[arg(value_name = "THREAD_URL")]
    url: String,

    /// Output file. Markdown goes to stdout when omitted.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Write to `<owner>_<repo>_<kind>_<number>.md` in the current directory.
    #[arg(long, conflicts_with = "output")]
    save: bool,

    /// Include reactions on each comment (usually needs a token).
    #[arg(long)]
    enable_reactions: bool,

    /// Render authors and reaction voters as profile links.
    #[arg(long)]
    enable_user_links: bool,

    /// Path to config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging to debug.log.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    if cli.debug {
        let file = std::fs::File::create("debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(file)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let locator = parse_thread_url(&cli.url)?;

    // Load config.
    let config = loader::load_config(cli.config.as_deref())?;
    let options = config
        .defaults
        .render_options(cli.enable_reactions, cli.enable_user_links);

    let token = auth::resolve_token(&config.github.host);

    // Install the rustls CryptoProvider before any TLS client is constructed.
    // A provider installed earlier (e.g. by a dependency) is fine.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    tracing::info!("issue2md converting {locator}");

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let markdown = runtime.block_on(convert(&config.github.api_url, token, &locator, &options))?;

    let output = if cli.save {
        Some(PathBuf::from(locator.file_name()))
    } else {
        cli.output
    };

    match output {
        Some(path) => {
            write_file(&path, &markdown)?;
            eprintln!("{locator} saved as Markdown in {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .context("writing to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }

    Ok(())
}

/// Build the Octocrab-backed client and run the full conversion.
async fn convert(
    api_url: &str,
    token: Option<String>,
    locator: &ThreadLocator,
    options: &RenderOptions,
) -> Result<String> {
    let transport = OctocrabTransport::new(api_url)?;
    let client = ThreadClient::new(transport, api_url, token);
    if options.include_reactions && !client.has_token() {
        eprintln!("hint: reactions usually require GH_TOKEN or GITHUB_TOKEN to be set");
    }
    thread_to_markdown(&client, locator, options)
        .await
        .with_context(|| format!("converting {locator}"))
}

fn write_file(path: &Path, markdown: &str) -> Result<()> {
    std::fs::write(path, markdown).with_context(|| format!("writing {}", path.display()))
}
