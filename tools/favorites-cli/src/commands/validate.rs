//! `favorites validate` - shape-check a feed and report its contents.

use anyhow::Result;
use clap::Args;

use favorites_app::DEFAULT_DATA_URL;

use crate::commands::render::load_feed;
use crate::output::Output;

#[derive(Args)]
pub struct ValidateArgs {
    /// Feed URL or local file path
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub feed: String,
}

pub async fn run(args: ValidateArgs, output: &Output) -> Result<()> {
    let data = load_feed(&args.feed, output).await?;

    let total = data.items.len();
    let out_of_stock = data.items.iter().filter(|p| !p.in_stock).count();
    let unrated = data.items.iter().filter(|p| p.rating.is_none()).count();

    output.success(&format!("Feed shape OK: {total} item(s)"));
    output.info(&format!("{} in stock, {out_of_stock} out of stock", total - out_of_stock));
    if unrated > 0 {
        output.info(&format!("{unrated} item(s) without a rating"));
    }

    for product in &data.items {
        if !product.sizes.is_empty() && !product.has_available_sizes() {
            output.warn(&format!(
                "Product {} (\"{}\") has sizes but none are available",
                product.id, product.title
            ));
        }
    }
    Ok(())
}
