//! Image URL normalization.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// `-<w>x<h>` immediately before a supported image extension at the end of
/// the URL, e.g. the `-300x300` in `dress-300x300.jpg`.
static THUMBNAIL_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-\d+x\d+(\.(?:jpg|jpeg|png|webp))$").expect("valid regex")
});

/// Removes the resized-thumbnail suffix from an image URL, if present.
#[must_use]
pub fn strip_thumbnail_suffix(url: &str) -> String {
    THUMBNAIL_SUFFIX_RE.replace(url, "$1").into_owned()
}

/// Strips thumbnail suffixes and collapses duplicates, keeping the first
/// occurrence of each resulting URL. Empty entries are dropped.
#[must_use]
pub fn normalize_images<S: AsRef<str>>(images: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    images
        .iter()
        .map(|url| url.as_ref().trim())
        .filter(|url| !url.is_empty())
        .map(strip_thumbnail_suffix)
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thumbnail_suffix_before_extension() {
        assert_eq!(strip_thumbnail_suffix("a-300x300.jpg"), "a.jpg");
        assert_eq!(
            strip_thumbnail_suffix("https://cdn.example/u/dress-1024x768.WEBP"),
            "https://cdn.example/u/dress.WEBP"
        );
    }

    #[test]
    fn leaves_urls_without_suffix_untouched() {
        assert_eq!(strip_thumbnail_suffix("b.png"), "b.png");
        assert_eq!(strip_thumbnail_suffix("a-300x300.gif"), "a-300x300.gif");
        assert_eq!(
            strip_thumbnail_suffix("a-300x300.jpg?v=2"),
            "a-300x300.jpg?v=2"
        );
    }

    #[test]
    fn only_the_trailing_suffix_is_removed() {
        assert_eq!(strip_thumbnail_suffix("x-10x10-300x300.png"), "x-10x10.png");
    }

    #[test]
    fn duplicates_after_stripping_collapse() {
        let images = ["a-300x300.jpg", "a.jpg", "b.png"];
        assert_eq!(normalize_images(&images), vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn empty_entries_are_dropped() {
        let images = ["", "  ", "c.jpeg"];
        assert_eq!(normalize_images(&images), vec!["c.jpeg"]);
    }
}
