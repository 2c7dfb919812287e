//! Resolution of size/colour variants from located embedded data.
//!
//! The embedded object has no fixed schema, so the resolver probes a short,
//! ordered list of key paths and maps whatever array it finds first. Field
//! names inside each entry are likewise probed from a list of aliases.

use nazdone_core::{ColorVariant, SizeVariant};
use serde_json::Value;

use crate::parse_helpers::{
    digits_only_integer, first_non_null, first_text, json_price, json_text,
    strip_background_prefix,
};

/// Key paths probed for the size array, in priority order.
pub const SIZE_PATHS: [&[&str]; 6] = [
    &["product", "sizes"],
    &["sizes"],
    &["data", "sizes"],
    &["variants", "sizes"],
    &["product", "variants"],
    &["variants"],
];

/// Key paths probed for a page-level colour list, in priority order.
pub const COLOR_PATHS: [&[&str]; 3] = [&["product", "colors"], &["colors"], &["data", "colors"]];

const LABEL_KEYS: [&str; 3] = ["label", "title", "name"];
const PRICE_KEYS: [&str; 3] = ["price", "maxPrice", "minPrice"];
const COLOR_TITLE_KEYS: [&str; 2] = ["title", "name"];
const SWATCH_KEYS: [&str; 2] = ["codeColor1", "color"];
const STOCK_ID_KEYS: [&str; 2] = ["stockId", "id"];

/// Output of [`resolve_variants`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVariants {
    pub sizes: Vec<SizeVariant>,
    pub colors_flat: Vec<String>,
}

/// Follows `path` through nested objects, returning `None` as soon as a
/// segment is missing.
#[must_use]
pub fn resolve_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |current, key| current.get(*key))
}

/// Returns the first path whose value is a non-empty array.
fn first_non_empty_array<'a>(root: &'a Value, paths: &[&[&str]]) -> Option<&'a Vec<Value>> {
    paths.iter().find_map(|path| {
        resolve_path(root, path)
            .and_then(Value::as_array)
            .filter(|arr| !arr.is_empty())
    })
}

/// Resolves sizes and the flat colour list from the located embedded
/// object, then fills missing prices from the page-level price text.
///
/// Never fails: a missing object or unrecognised shape produces empty
/// output, and a missing price stays `None`.
#[must_use]
pub fn resolve_variants(
    embedded: Option<&Value>,
    price_fallback_text: Option<&str>,
) -> ResolvedVariants {
    let mut sizes = embedded.map(resolve_sizes).unwrap_or_default();
    if embedded.is_some() && sizes.is_empty() {
        tracing::debug!("no size array found under any known key path");
    }

    apply_fallback_price(&mut sizes, price_fallback_text);

    let colors_flat = embedded
        .and_then(page_level_colors)
        .filter(|colors| !colors.is_empty())
        .unwrap_or_else(|| flatten_size_colors(&sizes));

    ResolvedVariants { sizes, colors_flat }
}

/// Maps the first non-empty size array found under [`SIZE_PATHS`].
#[must_use]
pub fn resolve_sizes(embedded: &Value) -> Vec<SizeVariant> {
    first_non_empty_array(embedded, &SIZE_PATHS)
        .map(|entries| entries.iter().map(map_size).collect())
        .unwrap_or_default()
}

fn map_size(entry: &Value) -> SizeVariant {
    let colors = entry
        .get("colors")
        .and_then(Value::as_array)
        .map(|colors| colors.iter().map(map_color).collect())
        .unwrap_or_default();

    SizeVariant {
        label: first_text(entry, &LABEL_KEYS).unwrap_or_default(),
        price: first_non_null(entry, &PRICE_KEYS).and_then(json_price),
        colors,
    }
}

fn map_color(entry: &Value) -> ColorVariant {
    let swatch = first_text(entry, &SWATCH_KEYS).unwrap_or_default();
    ColorVariant {
        title: first_text(entry, &COLOR_TITLE_KEYS).unwrap_or_default(),
        swatch_value: strip_background_prefix(&swatch).to_string(),
        stock_id: first_text(entry, &STOCK_ID_KEYS).unwrap_or_default(),
    }
}

/// Reads the page-level colour list, if the first populated colour path
/// holds an array.
///
/// The first path with a usable (non-null, non-empty, non-false) value is
/// the only one considered; if it is not an array the list is unusable.
fn page_level_colors(embedded: &Value) -> Option<Vec<String>> {
    let candidate = COLOR_PATHS
        .iter()
        .find_map(|path| resolve_path(embedded, path).filter(|v| is_truthy(v)))?;
    let entries = candidate.as_array()?;

    let titles = entries
        .iter()
        .filter_map(|c| first_text(c, &COLOR_TITLE_KEYS).or_else(|| json_text(c)))
        .collect::<Vec<_>>();
    Some(dedup_preserving_order(titles))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    }
}

/// Collects unique, non-empty colour titles across all sizes.
#[must_use]
pub fn flatten_size_colors(sizes: &[SizeVariant]) -> Vec<String> {
    let titles = sizes
        .iter()
        .flat_map(|s| s.colors.iter())
        .filter(|c| !c.title.is_empty())
        .map(|c| c.title.clone())
        .collect::<Vec<_>>();
    dedup_preserving_order(titles)
}

/// Fills every missing size price with the integer parsed from the single
/// page-level price text.
///
/// The same page-level value applies to each size that lacks a price;
/// sizes that already carry a price are left alone.
pub fn apply_fallback_price(sizes: &mut [SizeVariant], price_fallback_text: Option<&str>) {
    if sizes.iter().all(|s| s.price.is_some()) {
        return;
    }

    let fallback = price_fallback_text.and_then(digits_only_integer);
    if fallback.is_none() {
        tracing::debug!(
            has_text = price_fallback_text.is_some(),
            "page-level price fallback unavailable; missing prices stay empty"
        );
        return;
    }

    let filled = sizes
        .iter_mut()
        .map(|size| size.fill_missing_price(fallback))
        .filter(|filled| *filled)
        .count();
    tracing::debug!(filled, "applied page-level fallback price");
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
#[path = "variants_test.rs"]
mod tests;
