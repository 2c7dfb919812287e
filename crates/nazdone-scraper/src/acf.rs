//! Mapping from normalized sizes to the ACF repeater payload.

use nazdone_core::{ExternalColorEntry, ExternalFieldPayload, ExternalSizeEntry, SizeVariant};

use crate::parse_helpers::strip_background_prefix;

/// Builds the ACF payload mirroring `sizes`: one size row per size, one
/// colour row per colour.
///
/// Total over its input. A size without colours gets an empty colour
/// repeater, and every field is a plain string.
#[must_use]
pub fn build_external_fields(sizes: &[SizeVariant]) -> ExternalFieldPayload {
    ExternalFieldPayload {
        sizes: sizes
            .iter()
            .map(|size| ExternalSizeEntry {
                label: size.label.clone(),
                colors: size
                    .colors
                    .iter()
                    .map(|color| ExternalColorEntry {
                        title: color.title.clone(),
                        code: strip_background_prefix(&color.swatch_value).to_string(),
                        stock_id: color.stock_id.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
