//! # Eventbrite client
//!
//! Typed async bindings for the Eventbrite v3 REST API.
//!
//! ## Features
//!
//! - **Rate Limiting**: Token bucket shared by every call made through one client
//! - **Typed Descriptors**: Endpoint parameters as plain structs, flattened to
//!   query strings for GET and sent as JSON bodies for POST
//! - **Cancellation**: Every call takes a [`Context`] with optional deadline
//!   and cancel handle
//! - **Structured Errors**: API error envelopes surface as [`ApiError`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventbrite_client::{Client, ClientConfig, Context, Result};
//! use eventbrite_client::resources::EventSearchRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_config(
//!         ClientConfig::builder().token("MY_TOKEN").rate_limit(5).build(),
//!     )?;
//!
//!     let ctx = Context::background().with_timeout(std::time::Duration::from_secs(10));
//!     let req = EventSearchRequest {
//!         query: "jazz".into(),
//!         ..Default::default()
//!     };
//!     let found = client.search_events(&ctx, &req).await?;
//!     for event in found.events {
//!         println!("{}", event.name.text);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Per-call cancellation
pub mod context;

/// Transport core: client, rate limiter, request descriptors
pub mod http;

/// Endpoint bindings grouped by API resource
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use context::{CancelHandle, Context};
pub use error::{ApiError, Error, ErrorKind, Result};
pub use http::{ApiRequest, Client, Query};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
