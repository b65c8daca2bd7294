//! Product loading by slug.

use async_trait::async_trait;
use turbo_commerce::catalog::{normalize_product_with, NormalizeOptions, RawProduct};
use turbo_commerce::catalog::Product;
use turbo_commerce::ProductSlug;
use turbo_data::{envelope, FetchClient, FetchError};
use turbo_observability::StructuredLogger;

use crate::config::PdpConfig;

/// Somewhere raw product records can be looked up by slug.
///
/// `Ok(None)` means the source answered and has no such product.
#[async_trait(?Send)]
pub trait ProductSource {
    async fn fetch(&self, slug: &ProductSlug) -> Result<Option<RawProduct>, FetchError>;
}

/// The storefront API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: FetchClient,
    config: PdpConfig,
}

impl HttpProductSource {
    pub fn new(config: &PdpConfig) -> Self {
        let client = FetchClient::new()
            .with_base_url(config.api_base.clone())
            .with_timeout(config.request_timeout());
        Self {
            client,
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl ProductSource for HttpProductSource {
    async fn fetch(&self, slug: &ProductSlug) -> Result<Option<RawProduct>, FetchError> {
        let response = self
            .client
            .get(self.config.product_path_for(slug))
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?;

        // A record that is present but unreadable counts as absent.
        Ok(envelope::unwrap_data(&response.body).unwrap_or(None))
    }
}

/// Loads and normalizes products, folding every failure into "absent".
pub struct ProductLoader<S> {
    source: S,
    options: NormalizeOptions,
    logger: StructuredLogger,
}

impl<S: ProductSource> ProductLoader<S> {
    pub fn new(source: S, options: NormalizeOptions, logger: StructuredLogger) -> Self {
        Self {
            source,
            options,
            logger,
        }
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Fetch the product for `slug`.
    ///
    /// Transport errors, error statuses and missing records all yield
    /// `None`; failures are logged with the slug.
    pub async fn load(&self, slug: &ProductSlug) -> Option<Product> {
        self.logger
            .debug_builder("Product load started")
            .field("slug", slug.as_str())
            .emit();

        match self.source.fetch(slug).await {
            Ok(Some(raw)) => {
                let product = normalize_product_with(raw, &self.options);
                self.logger
                    .info_builder("Product loaded")
                    .field("slug", slug.as_str())
                    .field("product_id", product.id.as_str())
                    .field_bool("multi_variant", product.is_multi_variant())
                    .field_i64("variants", product.variants.len() as i64)
                    .emit();
                Some(product)
            }
            Ok(None) => {
                self.logger
                    .warn_builder("Product not found")
                    .field("slug", slug.as_str())
                    .emit();
                None
            }
            Err(e) => {
                let mut entry = self
                    .logger
                    .error_builder("Product load error")
                    .field("slug", slug.as_str())
                    .field("error", e.to_string());
                if let Some(status) = e.status() {
                    entry = entry.field_i64("status", i64::from(status));
                }
                entry.emit();
                None
            }
        }
    }
}
