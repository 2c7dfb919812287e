use std::time::Duration;

use nazdone_core::{AppConfig, PricingConfig, ProductRecord};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::extract::extract_product;
use crate::page::PageContent;
use crate::retry::retry_with_backoff;

/// HTTP client that downloads product pages as static HTML.
///
/// No JavaScript is executed: the page content is whatever the server
/// returns. Transient failures (network errors, 429, 5xx) are retried with
/// exponential backoff up to `max_retries` additional attempts.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl PageFetcher {
    /// Creates a fetcher with the given timeout, `User-Agent`, and retry
    /// policy. `max_retries = 0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Creates a fetcher from the `NAZDONE_FETCH_*` settings.
    ///
    /// # Errors
    ///
    /// See [`PageFetcher::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.fetch_timeout_secs,
            &config.fetch_user_agent,
            config.fetch_max_retries,
            config.fetch_backoff_base_secs,
        )
    }

    /// Downloads `url` and parses it into [`PageContent`].
    ///
    /// The page URL recorded in the content is the final URL after
    /// redirects.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` is not an absolute http(s) URL.
    /// - [`ScraperError::NotFound`]: HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status after
    ///   retries.
    /// - [`ScraperError::Http`]: network or TLS failure after retries.
    pub async fn fetch_page(&self, url: &str) -> Result<PageContent, ScraperError> {
        let parsed = validate_url(url)?;

        let (final_url, body) = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let parsed = parsed.clone();
            async move {
                let response = self
                    .client
                    .get(parsed.clone())
                    .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ScraperError::NotFound {
                        url: parsed.to_string(),
                    });
                }
                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: parsed.to_string(),
                    });
                }

                let final_url = response.url().to_string();
                let body = response.text().await?;
                Ok((final_url, body))
            }
        })
        .await?;

        tracing::debug!(url, final_url, bytes = body.len(), "fetched product page");
        Ok(PageContent::from_html(&body, &final_url))
    }
}

/// Checks that `url` is an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] with the parse failure or the
/// rejected scheme as the reason.
pub fn validate_url(url: &str) -> Result<Url, ScraperError> {
    let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    Ok(parsed)
}

/// Fetches one product page and runs the extraction engine over it.
///
/// # Errors
///
/// Propagates any error from [`PageFetcher::fetch_page`]. Extraction itself
/// cannot fail.
pub async fn scrape_product(
    fetcher: &PageFetcher,
    url: &str,
    pricing: &PricingConfig,
) -> Result<ProductRecord, ScraperError> {
    let page = fetcher.fetch_page(url).await?;
    Ok(extract_product(&page, pricing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_accepts_http_and_https() {
        assert!(validate_url("https://shop.example/product/1/a/").is_ok());
        assert!(validate_url("http://shop.example/").is_ok());
    }

    #[test]
    fn validate_url_rejects_relative_and_other_schemes() {
        assert!(matches!(
            validate_url("/product/1/"),
            Err(ScraperError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("ftp://shop.example/a"),
            Err(ScraperError::InvalidUrl { ref reason, .. }) if reason.contains("ftp")
        ));
    }
}
