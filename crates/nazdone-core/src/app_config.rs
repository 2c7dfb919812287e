use std::net::SocketAddr;

use crate::pricing::PricingConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Amount added to the largest size's price to produce the quoted price.
    pub price_markup: u64,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_secs: u64,
    pub fetch_max_concurrency: usize,
    /// Upper bound on `productUrls` accepted by a single scrape request.
    pub max_urls_per_request: usize,
}

impl AppConfig {
    /// Pricing settings derived from this configuration.
    #[must_use]
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            markup: self.price_markup,
        }
    }
}
