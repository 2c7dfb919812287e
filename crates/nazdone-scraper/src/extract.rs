//! The per-page extraction pipeline.
//!
//! locate embedded data → resolve variants (with price fallback) → rank →
//! price, with the ACF payload built from the resolved sizes alongside.
//! Pure and synchronous: each call builds a fresh record and shares no
//! state with other calls.

use std::sync::LazyLock;

use nazdone_core::{ExtractionResult, PricingConfig, ProductRecord};
use regex::Regex;

use crate::acf::build_external_fields;
use crate::embedded::locate_embedded_data;
use crate::images::normalize_images;
use crate::page::PageContent;
use crate::pricing::calculate_price;
use crate::variants::resolve_variants;

static PRODUCT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/product/(\d+)/").expect("valid regex"));

/// Returns the numeric id from a `/product/<digits>/` URL segment.
#[must_use]
pub fn extract_product_id(url: &str) -> Option<String> {
    PRODUCT_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Runs the extraction engine over one page's raw material.
///
/// Always returns a record; missing embedded data or prices show up as
/// empty sizes or `None` prices rather than errors.
#[must_use]
pub fn extract_product(page: &PageContent, pricing: &PricingConfig) -> ProductRecord {
    let embedded = locate_embedded_data(&page.script_texts);
    let variants = resolve_variants(embedded.as_ref(), page.price_fallback_text.as_deref());

    let result = ExtractionResult {
        product_id: extract_product_id(&page.url),
        url: page.url.clone(),
        title: page.title.clone(),
        description_html: page.description_html.clone(),
        images: normalize_images(&page.images),
        sizes: variants.sizes,
        colors_flat: variants.colors_flat,
    };

    let calc = calculate_price(&result.sizes, pricing);
    let external_fields = build_external_fields(&result.sizes);

    tracing::info!(
        url = %result.url,
        product_id = result.product_id.as_deref().unwrap_or("-"),
        embedded = embedded.is_some(),
        sizes = result.sizes.len(),
        chosen_size = calc.chosen_size_label.as_deref().unwrap_or("-"),
        final_price = ?calc.final_price,
        "extracted product"
    );

    ProductRecord::assemble(result, calc, external_fields)
}
