//! Raw page material handed to the extraction engine.
//!
//! [`PageContent`] is the only input the engine sees. It can arrive
//! pre-extracted (e.g. from a headless browser, as JSON) or be built from a
//! static HTML document with [`PageContent::from_html`].

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("valid selector"));
static PRODUCT_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".product-title").expect("valid selector"));
static DESCRIPTION_SELECTORS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        ".product-description",
        "#tab-description",
        ".woocommerce-Tabs-panel--description",
    ]
    .map(|css| Selector::parse(css).expect("valid selector"))
});
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("valid selector"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("valid selector"));
static PRICE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".price, .product-price, .woocommerce-Price-amount")
        .expect("valid selector")
});
static IMAGE_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:jpg|jpeg|png|webp)$").expect("valid regex"));

/// Already-extracted raw material from one product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// Final page URL (after redirects).
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description_html: String,
    /// Candidate image URLs, possibly with thumbnail suffixes and duplicates.
    #[serde(default)]
    pub images: Vec<String>,
    /// Inline `<script>` bodies in document order.
    #[serde(default)]
    pub script_texts: Vec<String>,
    /// Text of the first page-level price element, if one exists.
    #[serde(default)]
    pub price_fallback_text: Option<String>,
}

impl PageContent {
    /// Builds page content from a static HTML document.
    ///
    /// - title: trimmed text of the first `h1`, else of `.product-title`
    /// - description: inner HTML of the first existing description container
    /// - images: `src` (or `data-src`) of every `img` with an image extension
    /// - scripts: text of every `<script>`, in document order
    /// - price fallback: text of the first price element in document order
    #[must_use]
    pub fn from_html(html: &str, url: &str) -> Self {
        let document = Html::parse_document(html);

        let content = Self {
            url: url.to_string(),
            title: extract_title(&document),
            description_html: extract_description(&document),
            images: extract_image_urls(&document),
            script_texts: document
                .select(&SCRIPT_SELECTOR)
                .map(|el| element_text(&el))
                .collect(),
            price_fallback_text: document
                .select(&PRICE_SELECTOR)
                .next()
                .map(|el| element_text(&el)),
        };

        tracing::debug!(
            url,
            images = content.images.len(),
            scripts = content.script_texts.len(),
            has_price_text = content.price_fallback_text.is_some(),
            "parsed page content from HTML"
        );
        content
    }
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

fn extract_title(document: &Html) -> String {
    [&*TITLE_SELECTOR, &*PRODUCT_TITLE_SELECTOR]
        .into_iter()
        .filter_map(|selector| document.select(selector).next())
        .map(|el| element_text(&el).trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn extract_description(document: &Html) -> String {
    DESCRIPTION_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
        .map(|el| el.inner_html())
        .unwrap_or_default()
}

fn extract_image_urls(document: &Html) -> Vec<String> {
    document
        .select(&IMG_SELECTOR)
        .filter_map(|img| {
            let attrs = img.value();
            attrs
                .attr("src")
                .filter(|src| !src.is_empty())
                .or_else(|| attrs.attr("data-src"))
        })
        .filter(|src| IMAGE_EXTENSION_RE.is_match(src))
        .map(str::to_string)
        .collect()
}
