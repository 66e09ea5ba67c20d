//! Core components shared by every stage of the pipeline:
//! - The crate-wide [`TrackerError`] type.
//! - HTTP client construction, endpoint defaults and [`CacheMode`].
//! - Internal networking helpers.

/// HTTP client settings, endpoint constants and cache policy.
pub mod client;
/// The primary error type (`TrackerError`) for the crate.
pub mod error;

pub(crate) mod net;

pub use client::CacheMode;
pub use error::TrackerError;
