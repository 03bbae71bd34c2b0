//! Core components of the `fmp-financials` crate.
//!
//! This module contains the foundational building blocks:
//! - The [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - The on-disk [`DiskCache`] and [`CacheMode`].
//! - Internal networking and payload parsing.

/// The HTTP client (`FmpClient`), builder, and default constants.
pub mod client;
/// The primary error type (`FmpError`) for the crate.
pub mod error;
/// Per-symbol JSON cache on disk.
pub mod cache;
/// The `FinancialSource` seam and its network implementation for `FmpClient`.
pub mod services;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "dataframe")]
pub mod dataframe;

pub use cache::{CacheMode, DiskCache, Resource};
pub use client::{FmpClient, FmpClientBuilder};
pub use error::FmpError;
