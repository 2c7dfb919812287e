//! Pricing configuration shared by the engine and its callers.

/// Markup applied to the base price when no override is configured.
pub const DEFAULT_MARKUP: u64 = 200_000;

/// Settings for deriving the quoted price from a scraped base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Fixed amount added to the base price, in the page's own currency unit.
    pub markup: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            markup: DEFAULT_MARKUP,
        }
    }
}
