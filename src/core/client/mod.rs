//! Public client surface + builder.
//! Defaults (base URL, UA, timeout, env var names) live in `constants`.

pub(crate) mod constants;

use crate::core::FmpError;
use constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the Financial Modeling Prep API.
///
/// The client only talks to the network. Disk caching is layered on top of it by
/// [`CachedSource`](crate::CachedSource).
#[derive(Clone)]
pub struct FmpClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the URL for `endpoint` with the given query pairs, followed by the API key.
    ///
    /// Without a key the `apikey` parameter is omitted entirely; the API then rejects the
    /// request and the caller sees an empty or invalid payload.
    pub(crate) fn endpoint_url(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, FmpError> {
        let mut url = self.base_url.join(endpoint)?;
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
            if let Some(key) = &self.api_key {
                qp.append_pair("apikey", key);
            }
        }
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FmpClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FmpClientBuilder {
    /// Seed the builder from `FMP_API_KEY` and, if set, `FMP_BASE_URL`.
    ///
    /// A missing API key is not an error here.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::Url`] if `FMP_BASE_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, FmpError> {
        let base_url = match std::env::var(BASE_URL_ENV) {
            Ok(raw) => Some(Url::parse(&raw)?),
            Err(_) => None,
        };
        Ok(Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            base_url,
            ..Self::default()
        })
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://financialmodelingprep.com/stable/`).
    ///
    /// Endpoint names are joined onto this URL, so it should end with `/`.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key sent as the `apikey` query parameter.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<FmpClient, FmpError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FmpClient {
            http,
            base_url,
            api_key: self.api_key,
        })
    }
}
