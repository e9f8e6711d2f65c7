//! Client for 3D assets behind an authenticated per-asset signing route.

use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::error::Result;
use crate::transport;
use crate::types::{ClientConfig, SignedUrl};

/// Client that resolves asset ids to signed URLs with a bearer token.
///
/// # Example
///
/// ```ignore
/// let client = TokenedAssetClient::new("https://assets.example.com/v1/assets", token);
/// let signed = client.get_signed_url("asset42").await?;
/// if client.file_exists(&signed).await {
///     let bytes = client.download_file("asset42").await?;
/// }
/// ```
#[derive(Clone)]
pub struct TokenedAssetClient {
    http: reqwest::Client,
    config: ClientConfig,
    bearer: String,
}

impl TokenedAssetClient {
    /// Create a client for the given API base URL and bearer token.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let auth_token = auth_token.into();
        let bearer = format!("Bearer {auth_token}");
        let config = ClientConfig::new(api_base_url).with_auth_token(auth_token);

        tracing::debug!(api_base_url = config.api_base_url(), "asset client initialized");

        Self {
            http: reqwest::Client::new(),
            config,
            bearer,
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

    /// Request a signed URL for an asset.
    pub async fn get_signed_url(&self, asset_id: &str) -> Result<SignedUrl> {
        let url = self.config.endpoint(asset_id);
        let request = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.bearer);

        transport::fetch_text(request, &url)
            .await
            .map(SignedUrl::from)
            .inspect_err(|e| tracing::error!(asset_id, error = %e, "failed to get signed url"))
    }

    /// Check whether the object behind an already-resolved signed URL exists.
    ///
    /// Takes the signed URL itself, not an asset id. Never fails: errors are
    /// logged and reported as `false`.
    pub async fn file_exists(&self, signed_url: impl AsRef<str>) -> bool {
        let signed_url = signed_url.as_ref();
        match transport::head_ok(&self.http, signed_url).await {
            Ok(exists) => {
                tracing::debug!(exists, "existence check complete");
                exists
            }
            Err(e) => {
                tracing::warn!(error = %e, "existence check failed");
                false
            }
        }
    }

    /// Download an asset's full contents.
    pub async fn download_file(&self, asset_id: &str) -> Result<Vec<u8>> {
        let signed_url = self.get_signed_url(asset_id).await?;

        transport::fetch_bytes(&self.http, signed_url.as_str())
            .await
            .inspect_err(|e| tracing::error!(asset_id, error = %e, "failed to download file"))
    }
}

// Keep the token out of debug output.
impl std::fmt::Debug for TokenedAssetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenedAssetClient")
            .field("api_base_url", &self.config.api_base_url())
            .finish_non_exhaustive()
    }
}
