//! Value types shared by the clients.

use std::fmt;

/// Connection settings for a client.
///
/// Set once at construction and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    auth_token: Option<String>,
}

impl ClientConfig {
    /// Create a config for the given API base URL.
    ///
    /// A single trailing `/` is dropped so endpoint paths can be appended
    /// with `{base}/{segment}`.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let mut api_base_url = api_base_url.into();
        if api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self {
            api_base_url,
            auth_token: None,
        }
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Build `{base}/{segment}`.
    pub(crate) fn endpoint(&self, segment: &str) -> String {
        format!("{}/{segment}", self.api_base_url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// A pre-authorized URL returned by the signing service.
///
/// The value is kept exactly as the service sent it. Its validity window is
/// controlled by the service and is not tracked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedUrl(String);

impl SignedUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SignedUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for SignedUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

/// A storage object addressed by bucket and object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Bucket holding the object.
    pub bucket: String,
    /// Object name within the bucket.
    pub object: String,
}

impl ObjectRef {
    #[must_use]
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.object)
    }
}
