//! HTTP client utilities for TurboCommerce.
//!
//! Provides a small builder API for outbound requests. Native builds send
//! through `reqwest`; Spin WASM builds use Spin's outbound HTTP.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use turbo_data::{envelope, FetchClient};
//!
//! let client = FetchClient::new()
//!     .with_base_url("https://api.example.com")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let response = client
//!     .get("/products/productslug/linen-shirt")
//!     .accept("application/json")
//!     .send()
//!     .await?
//!     .error_for_status()?;
//!
//! let record: Option<serde_json::Value> = envelope::unwrap_data(&response.body)?;
//! ```

pub mod envelope;
mod error;
mod request;
mod response;

use std::time::Duration;

pub use error::FetchError;
pub use request::{encode_path_segment, RequestBuilder};
pub use response::Response;

/// HTTP client for outbound GET lookups.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    timeout: Option<Duration>,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Default timeout for every request. Ignored by Spin's outbound HTTP.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a GET request. Relative URLs are joined to the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        ClientRequestBuilder {
            builder,
            #[cfg(not(target_arch = "wasm32"))]
            http: self.http.clone(),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl ClientRequestBuilder {
    /// The request as built so far.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and buffer the response.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            url,
            headers,
            timeout,
        } = self.builder;

        let mut request = self.http.get(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, body))
    }

    /// Send the request through Spin's outbound HTTP.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        let mut request = Request::builder();
        request.method(Method::Get).uri(&self.builder.url);
        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(request.build())
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        Ok(Response::new(status, response.into_body()))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}
