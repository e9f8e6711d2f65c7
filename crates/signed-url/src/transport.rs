//! Single-attempt HTTP helpers used by both clients.

use crate::error::{Error, Result};

/// Send a prepared request and return the body as text, untouched.
pub(crate) async fn fetch_text(request: reqwest::RequestBuilder, url: &str) -> Result<String> {
    tracing::debug!(url, "fetching signed url");

    let response = request
        .send()
        .await
        .map_err(|e| Error::transport(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::request(url, status));
    }

    response.text().await.map_err(|e| Error::transport(url, &e))
}

/// GET a URL and return the full body.
pub(crate) async fn fetch_bytes(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    tracing::debug!(url, "downloading");

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| Error::transport(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::request(url, status));
    }

    let data = response
        .bytes()
        .await
        .map_err(|e| Error::transport(url, &e))?;
    Ok(data.to_vec())
}

/// HEAD a URL and report whether the status was a success.
pub(crate) async fn head_ok(http: &reqwest::Client, url: &str) -> Result<bool> {
    tracing::debug!(url, "checking existence");

    let response = http
        .head(url)
        .send()
        .await
        .map_err(|e| Error::transport(url, &e))?;

    Ok(response.status().is_success())
}
