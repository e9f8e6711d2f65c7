//! Error types for the signed-url crate.

use std::fmt;

/// Result type for signed-url operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or fetching a signed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request never produced a response (DNS, connection, timeout,
    /// malformed URL, or a failure while reading the body).
    Transport {
        /// The URL that failed.
        url: String,
        /// The error message.
        message: String,
    },
    /// A response was received but its status was not a success.
    Request {
        /// The URL that returned the error.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The reason phrase for the status, e.g. `Not Found`.
        status_text: String,
    },
}

impl Error {
    pub(crate) fn transport(url: &str, err: &reqwest::Error) -> Self {
        Error::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn request(url: &str, status: reqwest::StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), str::to_string);
        Error::Request {
            url: url.to_string(),
            status: status.as_u16(),
            status_text,
        }
    }

    /// The URL the failing request was sent to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Error::Transport { url, .. } | Error::Request { url, .. } => url,
        }
    }

    /// The HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            Error::Transport { .. } => None,
        }
    }

    /// The status reason phrase, if a response was received.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Error::Request { status_text, .. } => Some(status_text),
            Error::Transport { .. } => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self, Error::Request { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { url, message } => {
                write!(f, "http request to {url} failed: {message}")
            }
            Error::Request {
                url,
                status,
                status_text,
            } => {
                write!(f, "http request to {url} returned {status} {status_text}")
            }
        }
    }
}

impl std::error::Error for Error {}
