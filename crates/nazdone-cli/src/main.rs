mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nazdone-cli")]
#[command(about = "Extract normalized product records from product pages")]
struct Cli {
    /// Override `NAZDONE_PRICE_MARKUP` for this run.
    #[arg(long, global = true)]
    markup: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the extraction engine over a saved HTML page.
    Extract {
        /// URL the page was fetched from (used for the product id).
        #[arg(long)]
        url: String,
        /// HTML file to read; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Fetch product pages and extract each one.
    Scrape {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Show the rank of each size label and which one is largest.
    Rank {
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = nazdone_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut pricing = config.pricing();
    if let Some(markup) = cli.markup {
        pricing.markup = markup;
    }

    match cli.command {
        Commands::Extract { url, file } => {
            commands::run_extract(&url, file.as_deref(), &pricing)?;
        }
        Commands::Scrape { urls } => commands::run_scrape(&config, &urls, &pricing).await?,
        Commands::Rank { labels } => commands::run_rank(&labels)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
