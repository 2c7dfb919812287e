pub mod acf;
pub mod app_config;
pub mod config;
pub mod pricing;
pub mod products;

pub use acf::{ExternalColorEntry, ExternalFieldPayload, ExternalSizeEntry};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use pricing::{PricingConfig, DEFAULT_MARKUP};
pub use products::{
    ColorVariant, ExtractionResult, PriceCalculation, ProductBatch, ProductRecord, SizeVariant,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
