//! HTTP client for the chkok admin API
//!
//! Wraps a single request/response cycle: the request side attaches the
//! current session token, the response side classifies failures into
//! [`ApiError`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use reqwest::Method;

// Callers create tokens to tie requests to their owner's lifetime.
pub use tokio_util::sync::CancellationToken;
