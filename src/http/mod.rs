//! HTTP transport module
//!
//! The resource facades talk to the API through the [`Transport`] trait.
//! [`HttpClient`] is the reqwest-backed implementation used in production;
//! tests can substitute their own.
//!
//! # Behaviour
//!
//! - **One call, one request**: no retries, no batching, no caching
//! - **Bearer auth**: the configured token is attached to every request
//! - **Status handling**: any non-2xx answer becomes `Error::HttpStatus`
//! - **No Content**: `204` is a successful, empty result

mod client;
mod transport;

pub use client::HttpClient;
pub use transport::{RequestConfig, Transport};

pub(crate) use transport::{execute, fetch};

#[cfg(test)]
mod tests;
