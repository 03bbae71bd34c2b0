//! Disk cache in front of a [`FinancialSource`].

use crate::core::services::{FinancialSource, check_symbol, check_years};
use crate::core::{CacheMode, DiskCache, FmpError, Resource};
use crate::fundamentals::IncomeStatement;
use crate::profile::CompanyProfile;

/// Wraps a source with the per-symbol disk cache.
///
/// With the default [`CacheMode::Use`] a cached entry is returned without touching the
/// inner source. Only successful, non-empty results are written back.
///
/// The income-statement cache key is the symbol alone: a statement cached with one year
/// count is reused as-is for any other year count.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache: DiskCache,
    mode: CacheMode,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, cache: DiskCache) -> Self {
        Self {
            inner,
            cache,
            mode: CacheMode::Use,
        }
    }

    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn cache(&self) -> &DiskCache {
        &self.cache
    }

    async fn lookup<T: serde::de::DeserializeOwned>(
        &self,
        resource: Resource,
        symbol: &str,
    ) -> Result<Option<T>, FmpError> {
        if self.mode == CacheMode::Bypass {
            return Ok(None);
        }
        self.cache.ensure_dir().await?;
        if self.mode == CacheMode::Refresh {
            return Ok(None);
        }
        self.cache.read(resource, symbol).await
    }
}

impl<S: FinancialSource + Sync> FinancialSource for CachedSource<S> {
    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, FmpError> {
        check_symbol(symbol)?;
        if let Some(hit) = self.lookup::<CompanyProfile>(Resource::Profile, symbol).await? {
            return Ok(Some(hit));
        }

        let fetched = self.inner.profile(symbol).await?;
        if let Some(p) = &fetched
            && self.mode != CacheMode::Bypass
        {
            self.cache.write(Resource::Profile, symbol, p).await?;
        }
        Ok(fetched)
    }

    #[tracing::instrument(level = "debug", skip(self), err)]
    async fn income_statement(
        &self,
        symbol: &str,
        years: u32,
    ) -> Result<Option<IncomeStatement>, FmpError> {
        check_symbol(symbol)?;
        check_years(years)?;
        if let Some(hit) = self.lookup::<IncomeStatement>(Resource::IncomeStatement, symbol).await? {
            if hit.is_empty() {
                tracing::warn!(symbol, "Empty or invalid income statement");
                return Ok(None);
            }
            return Ok(Some(hit));
        }

        let fetched = self.inner.income_statement(symbol, years).await?;
        if let Some(t) = &fetched
            && !t.is_empty()
            && self.mode != CacheMode::Bypass
        {
            self.cache.write(Resource::IncomeStatement, symbol, t).await?;
        }
        Ok(fetched)
    }
}
