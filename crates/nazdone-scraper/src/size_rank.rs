//! Ordering over free-text size labels.
//!
//! Labels mix clothing codes (`"XL"`), numeric measurements (`"110"`,
//! `"6-7"`), one-size markers (`"FREESIZE"`) and Persian age phrases
//! (`"5 سال"`, "5 years"). [`size_rank`] maps each onto a single `f64` scale:
//!
//! | kind           | rank            |
//! |----------------|-----------------|
//! | numeric        | `1000 + value`  |
//! | age in years   | `500 + years`   |
//! | code table     | `1.0 ..= 8.0`   |
//! | anything else  | `0`             |
//!
//! Numeric labels therefore always outrank everything else.

use std::sync::LazyLock;

use nazdone_core::SizeVariant;
use regex::Regex;

use crate::parse_helpers::{fold_digits, parse_leading_decimal};

static AGE_YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*سال").expect("valid regex"));

const NUMERIC_BASE: f64 = 1000.0;
const AGE_BASE: f64 = 500.0;

fn code_rank(code: &str) -> Option<f64> {
    let rank = match code {
        "XS" => 1.0,
        "S" => 2.0,
        "FREE" | "FREESIZE" => 2.5,
        "M" => 3.0,
        "L" => 4.0,
        "XL" => 5.0,
        "XXL" | "2XL" => 6.0,
        "XXXL" | "3XL" => 7.0,
        "4XL" => 8.0,
        _ => return None,
    };
    Some(rank)
}

/// Ranks a size label; higher means larger.
///
/// The label is trimmed, uppercased, and has Persian/Arabic-Indic digits
/// folded to ASCII. Exact code-table entries (including digit-bearing
/// codes such as `2XL`) and age phrases are recognised before the generic
/// numeric rule, which would otherwise swallow them.
#[must_use]
pub fn size_rank(label: &str) -> f64 {
    let label = fold_digits(label.trim()).to_uppercase();

    if let Some(rank) = code_rank(&label) {
        return rank;
    }

    if let Some(years) = AGE_YEARS_RE
        .captures(&label)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
    {
        return AGE_BASE + f64::from(years);
    }

    let numeric: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if let Some(value) = parse_leading_decimal(&numeric) {
        return NUMERIC_BASE + value;
    }

    0.0
}

/// Returns the size with the highest [`size_rank`].
///
/// Ties keep the earliest size: a later size replaces the current choice
/// only when it ranks strictly higher. Returns `None` for an empty slice.
#[must_use]
pub fn pick_largest_size(sizes: &[SizeVariant]) -> Option<&SizeVariant> {
    let mut chosen: Option<(&SizeVariant, f64)> = None;
    for size in sizes {
        let rank = size_rank(&size.label);
        match chosen {
            Some((_, best)) if rank <= best => {}
            _ => chosen = Some((size, rank)),
        }
    }
    chosen.map(|(size, _)| size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(label: &str) -> SizeVariant {
        SizeVariant {
            label: label.to_string(),
            price: None,
            colors: vec![],
        }
    }

    #[test]
    fn code_table_matches_exactly() {
        let expected = [
            ("XS", 1.0),
            ("S", 2.0),
            ("M", 3.0),
            ("L", 4.0),
            ("XL", 5.0),
            ("XXL", 6.0),
            ("2XL", 6.0),
            ("XXXL", 7.0),
            ("3XL", 7.0),
            ("4XL", 8.0),
            ("FREE", 2.5),
            ("FREESIZE", 2.5),
        ];
        for (label, rank) in expected {
            assert!(
                (size_rank(label) - rank).abs() < f64::EPSILON,
                "{label} ranked {} (expected {rank})",
                size_rank(label)
            );
        }
    }

    #[test]
    fn codes_are_case_insensitive_and_trimmed() {
        assert!((size_rank("  xl ") - 5.0).abs() < f64::EPSILON);
        assert!((size_rank("2xl") - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn numeric_labels_rank_at_least_one_thousand() {
        assert!((size_rank("110") - 1110.0).abs() < f64::EPSILON);
        assert!((size_rank("6-7") - 1067.0).abs() < f64::EPSILON);
        assert!((size_rank("42.5") - 1042.5).abs() < f64::EPSILON);
        assert!((size_rank("۳۸") - 1038.0).abs() < f64::EPSILON);
        assert!(size_rank("0") >= 1000.0);
    }

    #[test]
    fn age_phrases_rank_from_five_hundred() {
        assert!((size_rank("5 سال") - 505.0).abs() < f64::EPSILON);
        assert!((size_rank("۱۲سال") - 512.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_labels_rank_zero() {
        assert!(size_rank("").abs() < f64::EPSILON);
        assert!(size_rank("Large").abs() < f64::EPSILON);
        assert!(size_rank("5XL").abs() > 0.0, "5XL carries digits and is numeric");
    }

    #[test]
    fn numeric_outranks_age_outranks_codes() {
        assert!(size_rank("1") > size_rank("12 سال"));
        assert!(size_rank("1 سال") > size_rank("4XL"));
    }

    #[test]
    fn age_phrase_stays_below_numeric_band() {
        let age = size_rank("12 سال");
        assert!((age - 512.0).abs() < f64::EPSILON);
        assert!(age < NUMERIC_BASE, "age phrase must not be read as a numeric label");
    }

    #[test]
    fn pick_largest_prefers_bare_number_over_age_phrase() {
        let sizes = vec![size("12 سال"), size("1")];
        assert_eq!(pick_largest_size(&sizes).map(|s| s.label.as_str()), Some("1"));
    }

    #[test]
    fn pick_largest_prefers_first_on_ties() {
        let sizes = vec![size("M"), size("L"), size("L")];
        let chosen = pick_largest_size(&sizes).expect("non-empty");
        assert!(std::ptr::eq(chosen, &sizes[1]));
    }

    #[test]
    fn pick_largest_with_all_zero_ranks_keeps_first() {
        let sizes = vec![size("one"), size("two")];
        let chosen = pick_largest_size(&sizes).expect("non-empty");
        assert_eq!(chosen.label, "one");
    }

    #[test]
    fn pick_largest_mixed_labels() {
        let sizes = vec![size("XL"), size("5 سال"), size("110"), size("FREESIZE")];
        assert_eq!(pick_largest_size(&sizes).map(|s| s.label.as_str()), Some("110"));
    }

    #[test]
    fn pick_largest_empty_is_none() {
        assert!(pick_largest_size(&[]).is_none());
    }
}
