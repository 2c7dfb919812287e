use serde::{Deserialize, Serialize};

use crate::acf::ExternalFieldPayload;

/// One colour option of a size, as found in the page's embedded variant data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    pub title: String,
    /// Colour indicator (hex, name, or CSS value) with any `background:`
    /// prefix removed.
    pub swatch_value: String,
    pub stock_id: String,
}

/// One size of a product together with its colour options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeVariant {
    /// Free-text size label, e.g. `"XL"`, `"110"`, `"FREESIZE"`, `"5 سال"`.
    pub label: String,
    /// Integer price in the page's own unit. `None` until embedded data or
    /// the page-level fallback supplies one.
    pub price: Option<u64>,
    pub colors: Vec<ColorVariant>,
}

impl SizeVariant {
    /// Fills `price` from `fallback` only when no price is set yet.
    ///
    /// Returns `true` if the price was filled.
    pub fn fill_missing_price(&mut self, fallback: Option<u64>) -> bool {
        match (self.price, fallback) {
            (None, Some(price)) => {
                self.price = Some(price);
                true
            }
            _ => false,
        }
    }
}

/// Normalized product data extracted from a single page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Numeric id taken from a `/product/<digits>/` URL segment.
    pub product_id: Option<String>,
    pub url: String,
    pub title: String,
    pub description_html: String,
    /// Unique image URLs with thumbnail suffixes stripped, in first-seen order.
    pub images: Vec<String>,
    pub sizes: Vec<SizeVariant>,
    /// Unique colour titles, in first-seen order.
    pub colors_flat: Vec<String>,
}

/// Price derived from the largest size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalculation {
    pub chosen_size_label: Option<String>,
    pub base_price: Option<u64>,
    /// `base_price + markup`, or `None` when there is no base price.
    pub final_price: Option<u64>,
}

/// The full per-page output record handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_id: Option<String>,
    pub url: String,
    pub title: String,
    pub description_html: String,
    pub images: Vec<String>,
    pub colors_flat: Vec<String>,
    pub sizes: Vec<SizeVariant>,
    pub calc: PriceCalculation,
    pub external_fields: ExternalFieldPayload,
}

impl ProductRecord {
    /// Merges the extraction, price, and external payload into one record.
    #[must_use]
    pub fn assemble(
        result: ExtractionResult,
        calc: PriceCalculation,
        external_fields: ExternalFieldPayload,
    ) -> Self {
        Self {
            product_id: result.product_id,
            url: result.url,
            title: result.title,
            description_html: result.description_html,
            images: result.images,
            colors_flat: result.colors_flat,
            sizes: result.sizes,
            calc,
            external_fields,
        }
    }

    /// Returns the total number of size variants for this product.
    #[must_use]
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }
}

/// Envelope for a batch of extracted products: `{ "ok": true, "products": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBatch {
    pub ok: bool,
    pub products: Vec<ProductRecord>,
}

impl ProductBatch {
    #[must_use]
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { ok: true, products }
    }
}
