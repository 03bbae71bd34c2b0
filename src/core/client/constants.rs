//! Centralized constants for default endpoints and UA.

/// Identifies this client to the API.
pub(crate) const USER_AGENT: &str = concat!("fmp-financials/", env!("CARGO_PKG_VERSION"));

/// FMP "stable" API base (endpoint names are joined onto it, so the trailing slash matters).
pub(crate) const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/stable/";

/// Per-request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Optional environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "FMP_BASE_URL";

pub(crate) const PROFILE_ENDPOINT: &str = "profile";
pub(crate) const INCOME_STATEMENT_ENDPOINT: &str = "income-statement";
