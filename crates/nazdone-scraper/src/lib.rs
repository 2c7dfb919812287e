pub mod acf;
pub mod embedded;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod images;
mod parse_helpers;
pub mod page;
pub mod pricing;
mod retry;
pub mod size_rank;
pub mod variants;

pub use acf::build_external_fields;
pub use embedded::{locate_embedded_data, EmbeddedStrategy};
pub use error::ScraperError;
pub use extract::{extract_product, extract_product_id};
pub use fetch::{scrape_product, validate_url, PageFetcher};
pub use images::normalize_images;
pub use page::PageContent;
pub use pricing::calculate_price;
pub use size_rank::{pick_largest_size, size_rank};
pub use variants::{resolve_variants, ResolvedVariants};
