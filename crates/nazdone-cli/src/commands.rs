use std::io::Read;
use std::path::Path;

use anyhow::Context;
use futures::stream::{self, StreamExt};
use nazdone_core::{AppConfig, PricingConfig, ProductBatch, ProductRecord, SizeVariant};
use nazdone_scraper::{
    extract_product, pick_largest_size, scrape_product, size_rank, PageContent, PageFetcher,
    ScraperError,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct LabelRank {
    pub label: String,
    pub rank: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct RankReport {
    pub labels: Vec<LabelRank>,
    pub largest: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_html(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read HTML from {}", path.display())),
        None => {
            let mut html = String::new();
            std::io::stdin()
                .read_to_string(&mut html)
                .context("failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}

pub(crate) fn extract_html(url: &str, html: &str, pricing: &PricingConfig) -> ProductBatch {
    let page = PageContent::from_html(html, url);
    ProductBatch::new(vec![extract_product(&page, pricing)])
}

pub(crate) fn run_extract(
    url: &str,
    file: Option<&Path>,
    pricing: &PricingConfig,
) -> anyhow::Result<()> {
    let html = read_html(file)?;
    print_json(&extract_html(url, &html, pricing))
}

/// Scrapes every URL with bounded concurrency, keeping input order.
///
/// Failures are logged and counted; the batch holds only the pages that
/// succeeded.
pub(crate) async fn scrape_urls(
    fetcher: &PageFetcher,
    urls: &[String],
    concurrency: usize,
    pricing: &PricingConfig,
) -> (ProductBatch, usize) {
    let outcomes: Vec<(&String, Result<ProductRecord, ScraperError>)> = stream::iter(urls)
        .map(|url| {
            let fut = scrape_product(fetcher, url, pricing);
            async move { (url, fut.await) }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut products = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;
    for (url, outcome) in outcomes {
        match outcome {
            Ok(record) => {
                tracing::info!(url = %url, sizes = record.size_count(), "scraped product page");
                products.push(record);
            }
            Err(e) => {
                failed += 1;
                tracing::error!(url = %url, error = %e, "failed to scrape product page");
            }
        }
    }

    (ProductBatch::new(products), failed)
}

pub(crate) async fn run_scrape(
    config: &AppConfig,
    urls: &[String],
    pricing: &PricingConfig,
) -> anyhow::Result<()> {
    let fetcher = PageFetcher::from_app_config(config)?;
    let (batch, failed) =
        scrape_urls(&fetcher, urls, config.fetch_max_concurrency, pricing).await;
    print_json(&batch)?;

    if failed > 0 {
        anyhow::bail!("{failed} of {} product pages failed", urls.len());
    }
    Ok(())
}

pub(crate) fn build_rank_report(labels: &[String]) -> RankReport {
    let sizes: Vec<SizeVariant> = labels
        .iter()
        .map(|label| SizeVariant {
            label: label.clone(),
            price: None,
            colors: Vec::new(),
        })
        .collect();

    RankReport {
        labels: labels
            .iter()
            .map(|label| LabelRank {
                label: label.clone(),
                rank: size_rank(label),
            })
            .collect(),
        largest: pick_largest_size(&sizes).map(|size| size.label.clone()),
    }
}

pub(crate) fn run_rank(labels: &[String]) -> anyhow::Result<()> {
    print_json(&build_rank_report(labels))
}
