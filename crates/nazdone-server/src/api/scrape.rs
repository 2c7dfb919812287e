//! `POST /api/v1/scrape`: fetch product pages and run the engine over each.

use axum::{extract::State, Extension, Json};
use futures::stream::{self, StreamExt};
use nazdone_core::{ProductBatch, ProductRecord};
use nazdone_scraper::{scrape_product, validate_url, ScraperError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{validate_batch_size, ApiError, ApiResponse, AppState, ResponseMeta};

const PRODUCT_MODE: &str = "product";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScrapeRequest {
    pub mode: String,
    #[serde(default)]
    pub product_urls: Vec<String>,
}

fn validate_mode(req_id: &str, mode: &str) -> Result<(), ApiError> {
    if mode == PRODUCT_MODE {
        Ok(())
    } else {
        Err(ApiError::new(
            req_id,
            "validation_error",
            format!("mode must be '{PRODUCT_MODE}', got '{mode}'"),
        ))
    }
}

fn validate_product_urls(req_id: &str, urls: &[String]) -> Result<(), ApiError> {
    for url in urls {
        if let Err(e) = validate_url(url) {
            return Err(ApiError::new(req_id, "validation_error", e.to_string()));
        }
    }
    Ok(())
}

fn map_scraper_error(req_id: &str, url: &str, error: &ScraperError) -> ApiError {
    tracing::warn!(url, error = %error, "product page fetch failed");
    match error {
        ScraperError::InvalidUrl { .. } => {
            ApiError::new(req_id, "validation_error", error.to_string())
        }
        _ => ApiError::new(
            req_id,
            "upstream_error",
            format!("failed to fetch {url}: {error}"),
        ),
    }
}

/// Fetches every URL (bounded concurrency, input order kept) and extracts
/// one record per page. The first failing URL fails the whole request.
pub(super) async fn scrape_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ScrapeRequest>,
) -> Result<Json<ApiResponse<ProductBatch>>, ApiError> {
    let rid = &req_id.0;
    validate_mode(rid, &body.mode)?;
    validate_batch_size(
        rid,
        "productUrls",
        body.product_urls.len(),
        state.config.max_urls_per_request,
    )?;
    validate_product_urls(rid, &body.product_urls)?;

    let pricing = state.config.pricing();
    let fetcher = &state.fetcher;
    let pricing_ref = &pricing;
    let concurrency = state.config.fetch_max_concurrency.max(1);

    let results: Vec<Result<ProductRecord, (String, ScraperError)>> =
        stream::iter(body.product_urls)
            .map(|url| async move {
                scrape_product(fetcher, &url, pricing_ref)
                    .await
                    .map_err(|e| (url, e))
            })
            .buffered(concurrency)
            .collect()
            .await;

    let products = results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|(url, e)| map_scraper_error(rid, &url, &e))?;

    tracing::info!(request_id = %rid, products = products.len(), "scrape request complete");

    Ok(Json(ApiResponse {
        data: ProductBatch::new(products),
        meta: ResponseMeta::new(req_id.0),
    }))
}
