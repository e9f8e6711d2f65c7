//! Async clients that resolve signed URLs and fetch the objects behind them.
//!
//! Two clients are provided:
//!
//! - [`SignedUrlClient`]: storage objects resolved through a shared
//!   `getSignedURL` route.
//! - [`TokenedAssetClient`]: 3D assets resolved through an authenticated
//!   per-asset route (`{base}/{asset_id}`).
//!
//! Each call is a single linear sequence of at most two requests with no
//! retries and no caching.
//!
//! # Error contract
//!
//! - `get_signed_url` and `download_file` return [`Error::Transport`] when no
//!   response arrived and [`Error::Request`] on a non-success status.
//! - `file_exists` never fails. Every error is logged and reported as `false`.
//!
//! Diagnostics are emitted as `tracing` events; install a subscriber to see
//! them.
//!
//! # Example
//!
//! ```ignore
//! use signed_url::{ObjectRef, SignedUrlClient};
//!
//! let client = SignedUrlClient::new("https://api.example.com");
//! let bytes = client.download_file(&ObjectRef::new("models", "chair.glb")).await?;
//! ```

mod asset;
mod error;
mod storage;
mod transport;
pub mod types;

pub use asset::TokenedAssetClient;
pub use error::{Error, Result};
pub use storage::SignedUrlClient;
pub use types::{ClientConfig, ObjectRef, SignedUrl};
