//! Payload shape expected by the downstream ACF (Advanced Custom Fields)
//! repeater import.
//!
//! The field keys are generated by the target CMS and are an integration
//! contract: they carry no meaning of their own and must be reproduced
//! verbatim. Renaming any of them silently breaks the import.

use serde::{Deserialize, Serialize};

/// Outer repeater holding one row per size.
pub const SIZES_REPEATER_KEY: &str = "field_652e80a54a437";
/// Size label inside a size row.
pub const SIZE_LABEL_KEY: &str = "field_652e834f4a43a";
/// Inner repeater holding one row per colour of a size.
pub const COLORS_REPEATER_KEY: &str = "field_652e83674a43b";
/// Colour title inside a colour row.
pub const COLOR_TITLE_KEY: &str = "field_652e83834a43c";
/// Colour code (swatch value) inside a colour row.
pub const COLOR_CODE_KEY: &str = "field_652e83994a43d";
/// Stock identifier inside a colour row.
pub const COLOR_STOCK_ID_KEY: &str = "field_stock_id";

// serde `rename` needs literals; `acf_keys_match_constants` keeps them in
// sync with the constants above.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFieldPayload {
    #[serde(rename = "field_652e80a54a437")]
    pub sizes: Vec<ExternalSizeEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSizeEntry {
    #[serde(rename = "field_652e834f4a43a")]
    pub label: String,
    #[serde(rename = "field_652e83674a43b")]
    pub colors: Vec<ExternalColorEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalColorEntry {
    #[serde(rename = "field_652e83834a43c")]
    pub title: String,
    #[serde(rename = "field_652e83994a43d")]
    pub code: String,
    #[serde(rename = "field_stock_id")]
    pub stock_id: String,
}
