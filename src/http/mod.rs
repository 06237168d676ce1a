//! HTTP transport core
//!
//! Provides the API client, its rate limiter, and the request descriptor
//! contract every endpoint's parameters implement.
//!
//! # Features
//!
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Query Flattening**: Descriptors rendered to flat query parameters
//! - **Authentication**: `token` and `expand` added to every call
//! - **Error Envelopes**: Non-200 GET responses decoded into [`crate::ApiError`]

mod client;
mod rate_limit;
mod request;

pub use client::{Client, EXPAND};
pub use rate_limit::RateLimiter;
pub use request::{ApiRequest, Query};
