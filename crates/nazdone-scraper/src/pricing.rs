use nazdone_core::{PriceCalculation, PricingConfig, SizeVariant};

use crate::size_rank::pick_largest_size;

/// Derives the quoted price from the largest size.
///
/// `base_price` is the chosen size's price as scraped; `final_price` adds
/// the configured markup. Both stay `None` when there are no sizes or the
/// chosen size has no price. A price of `0` is a real price. An empty
/// chosen label is reported as `None`.
#[must_use]
pub fn calculate_price(sizes: &[SizeVariant], pricing: &PricingConfig) -> PriceCalculation {
    let Some(chosen) = pick_largest_size(sizes) else {
        return PriceCalculation::default();
    };

    let base_price = chosen.price;
    PriceCalculation {
        chosen_size_label: Some(chosen.label.clone()).filter(|label| !label.is_empty()),
        base_price,
        final_price: base_price.map(|base| base.saturating_add(pricing.markup)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(label: &str, price: Option<u64>) -> SizeVariant {
        SizeVariant {
            label: label.to_string(),
            price,
            colors: vec![],
        }
    }

    #[test]
    fn largest_size_price_plus_default_markup() {
        let sizes = vec![size("M", Some(100_000)), size("XL", Some(150_000))];
        let calc = calculate_price(&sizes, &PricingConfig::default());
        assert_eq!(calc.chosen_size_label.as_deref(), Some("XL"));
        assert_eq!(calc.base_price, Some(150_000));
        assert_eq!(calc.final_price, Some(350_000));
    }

    #[test]
    fn custom_markup_is_applied() {
        let sizes = vec![size("L", Some(90_000))];
        let calc = calculate_price(&sizes, &PricingConfig { markup: 10_000 });
        assert_eq!(calc.final_price, Some(100_000));
    }

    #[test]
    fn chosen_size_without_price_yields_no_prices() {
        let sizes = vec![size("M", Some(100_000)), size("XL", None)];
        let calc = calculate_price(&sizes, &PricingConfig::default());
        assert_eq!(calc.chosen_size_label.as_deref(), Some("XL"));
        assert!(calc.base_price.is_none());
        assert!(calc.final_price.is_none());
    }

    #[test]
    fn zero_price_is_kept() {
        let sizes = vec![size("L", Some(0))];
        let calc = calculate_price(&sizes, &PricingConfig::default());
        assert_eq!(calc.base_price, Some(0));
        assert_eq!(calc.final_price, Some(200_000));
    }

    #[test]
    fn empty_chosen_label_is_reported_as_none() {
        let sizes = vec![size("", Some(90_000))];
        let calc = calculate_price(&sizes, &PricingConfig::default());
        assert!(calc.chosen_size_label.is_none());
        assert_eq!(calc.base_price, Some(90_000));
        assert_eq!(calc.final_price, Some(290_000));
    }

    #[test]
    fn no_sizes_yields_empty_calculation() {
        assert_eq!(
            calculate_price(&[], &PricingConfig::default()),
            PriceCalculation::default()
        );
    }

    #[test]
    fn markup_addition_saturates() {
        let sizes = vec![size("L", Some(u64::MAX))];
        let calc = calculate_price(&sizes, &PricingConfig::default());
        assert_eq!(calc.final_price, Some(u64::MAX));
    }
}
