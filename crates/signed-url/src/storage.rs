//! Client for storage objects behind a shared signing endpoint.
//!
//! The signing service exposes a single `getSignedURL` route. Every object
//! lookup resolves a URL through it and then talks to storage directly.

use crate::error::Result;
use crate::transport;
use crate::types::{ClientConfig, ObjectRef, SignedUrl};

/// Route on the signing service that issues signed URLs.
const SIGNED_URL_ROUTE: &str = "getSignedURL";

/// Client that resolves storage objects through a signing endpoint.
///
/// The client only holds immutable configuration, so clones are cheap and
/// calls may run concurrently.
///
/// # Example
///
/// ```ignore
/// let client = SignedUrlClient::new("https://api.example.com");
/// let object = ObjectRef::new("models", "chair.glb");
/// if client.file_exists(&object).await {
///     let bytes = client.download_file(&object).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SignedUrlClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SignedUrlClient {
    /// Create a client for the given API base URL.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_base_url))
    }

    /// Create a client from an existing config.
    ///
    /// Any auth token in the config is ignored; the signing route is public.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS).
    #[must_use]
    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a signed URL for an object.
    ///
    /// The signing route takes no parameters, so `object` is not sent; the
    /// service decides which object the URL grants access to.
    pub async fn get_signed_url(&self, object: &ObjectRef) -> Result<SignedUrl> {
        let url = self.config.endpoint(SIGNED_URL_ROUTE);
        tracing::debug!(%object, "object reference not forwarded to signing route");

        transport::fetch_text(self.http.get(&url), &url)
            .await
            .map(SignedUrl::from)
            .inspect_err(|e| tracing::error!(%object, error = %e, "failed to get signed url"))
    }

    /// Check whether an object exists.
    ///
    /// Never fails: any error along the way is logged and reported as `false`.
    pub async fn file_exists(&self, object: &ObjectRef) -> bool {
        let signed_url = match self.get_signed_url(object).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(%object, error = %e, "existence check failed");
                return false;
            }
        };

        match transport::head_ok(&self.http, signed_url.as_str()).await {
            Ok(exists) => {
                tracing::debug!(%object, exists, "existence check complete");
                exists
            }
            Err(e) => {
                tracing::warn!(%object, error = %e, "existence check failed");
                false
            }
        }
    }

    /// Download an object's full contents.
    pub async fn download_file(&self, object: &ObjectRef) -> Result<Vec<u8>> {
        let signed_url = self.get_signed_url(object).await?;

        transport::fetch_bytes(&self.http, signed_url.as_str())
            .await
            .inspect_err(|e| tracing::error!(%object, error = %e, "failed to download file"))
    }
}
