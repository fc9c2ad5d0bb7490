//! External-collaborator edge for the Ink catalog platform.
//!
//! The catalog core performs no I/O of its own; everything it needs from the
//! outside world crosses one of the seams defined here:
//!
//! - [`FetchClient`] — single-shot outbound HTTP with JSON decoding, backed
//!   by Spin's host call on `wasm32` and stubbed natively.
//! - [`AnalyticsSink`] — fire-and-forget event recording that the engines
//!   must never depend on for correctness.
//!
//! # Example
//!
//! ```rust,ignore
//! use ink_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("https://api.example.com");
//! let designs: Vec<Design> = client
//!     .get("/designs?page=1&pageSize=12")
//!     .send()?
//!     .json()?;
//! ```

mod analytics;
mod client;
mod error;

pub use analytics::{AnalyticsSink, MemorySink, NullSink};
pub use client::{FetchClient, GetRequest, Response};
pub use error::FetchError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{AnalyticsSink, FetchClient, FetchError, MemorySink, NullSink, Response};
}
