//! `POST /api/v1/extract`: run the engine over page material supplied by
//! the caller, with no network access.

use axum::{extract::State, Extension, Json};
use nazdone_core::{ProductBatch, ProductRecord};
use nazdone_scraper::{extract_product, PageContent};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{validate_batch_size, ApiError, ApiResponse, AppState, ResponseMeta};

/// One page as sent by the caller: raw HTML, or material a browser already
/// extracted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum PageInput {
    Html { url: String, html: String },
    Content(PageContent),
}

impl PageInput {
    fn into_page_content(self) -> PageContent {
        match self {
            PageInput::Html { url, html } => PageContent::from_html(&html, &url),
            PageInput::Content(content) => content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ExtractRequest {
    pub pages: Vec<PageInput>,
}

pub(super) async fn extract_pages(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ExtractRequest>,
) -> Result<Json<ApiResponse<ProductBatch>>, ApiError> {
    let rid = &req_id.0;
    validate_batch_size(
        rid,
        "pages",
        body.pages.len(),
        state.config.max_urls_per_request,
    )?;

    let pricing = state.config.pricing();
    let products: Vec<ProductRecord> = body
        .pages
        .into_iter()
        .map(|page| extract_product(&page.into_page_content(), &pricing))
        .collect();

    tracing::info!(request_id = %rid, products = products.len(), "extract request complete");

    Ok(Json(ApiResponse {
        data: ProductBatch::new(products),
        meta: ResponseMeta::new(req_id.0),
    }))
}
