//! `favorites render` - render a feed into the full page HTML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use favorites_app::{FavoritesClient, DEFAULT_DATA_URL};
use favorites_domain::FavoritesData;
use favorites_markup::render_page;

use crate::output::Output;

#[derive(Args)]
pub struct RenderArgs {
    /// Feed URL or local file path
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub feed: String,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: RenderArgs, output: &Output) -> Result<()> {
    let data = load_feed(&args.feed, output).await?;
    output.debug(&format!("{} item(s) in feed", data.items.len()));

    let html = render_page(&data.items);

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output.success(&format!(
                "Rendered {} card(s) to {}",
                data.items.len(),
                path.display()
            ));
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// Load a feed from a URL or a local path.
pub(crate) async fn load_feed(feed: &str, output: &Output) -> Result<FavoritesData> {
    let client = FavoritesClient::new();
    let data = if feed.starts_with("http://") || feed.starts_with("https://") {
        output.debug(&format!("fetching {feed}"));
        client
            .fetch(feed)
            .await
            .with_context(|| format!("failed to load feed from {feed}"))?
    } else {
        output.debug(&format!("reading {feed}"));
        client
            .load_from_path(Path::new(feed))
            .with_context(|| format!("failed to load feed from {feed}"))?
    };
    Ok(data)
}
