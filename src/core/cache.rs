//! Per-symbol JSON cache on disk.
//!
//! One file per (resource, symbol): `profile_{SYMBOL}.json` and `income_{SYMBOL}.json`.
//! A present file is returned as-is. Unless a maximum age is configured there is no
//! expiry, checksum or schema tag, so a stale file is indistinguishable from a fresh one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Serialize, de::DeserializeOwned};

use crate::core::FmpError;

/// Defines how a [`CachedSource`](crate::CachedSource) uses the disk cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if an entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

/// The two kinds of payload kept in the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Profile,
    /// Annual income statements. The key does not include the requested year count.
    IncomeStatement,
}

impl Resource {
    const fn prefix(self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::IncomeStatement => "income",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
    max_age: Option<Duration>,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_age: None,
        }
    }

    /// Treat entries older than `age` (by file modification time) as missing.
    /// `None` keeps entries forever.
    #[must_use]
    pub fn max_age(mut self, age: Option<Duration>) -> Self {
        self.max_age = age;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for `(resource, symbol)`. The symbol is form-urlencoded, so plain tickers
    /// (`AAPL`, `BRK.B`, `BRK-B`) keep their name and distinct symbols never share a file.
    pub fn path_for(&self, resource: Resource, symbol: &str) -> PathBuf {
        let safe: String = url::form_urlencoded::byte_serialize(symbol.as_bytes()).collect();
        self.dir.join(format!("{}_{safe}.json", resource.prefix()))
    }

    pub async fn ensure_dir(&self) -> Result<(), FmpError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| FmpError::io(&self.dir, e))
    }

    /// Load a cached entry. `Ok(None)` means no usable entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid JSON for `T`.
    pub async fn read<T: DeserializeOwned>(
        &self,
        resource: Resource,
        symbol: &str,
    ) -> Result<Option<T>, FmpError> {
        let path = self.path_for(resource, symbol);

        if let Some(limit) = self.max_age {
            match tokio::fs::metadata(&path).await {
                Ok(meta) => {
                    let age = meta
                        .modified()
                        .ok()
                        .and_then(|m| SystemTime::now().duration_since(m).ok())
                        .unwrap_or_default();
                    if age > limit {
                        tracing::debug!(path = %path.display(), ?age, "cache entry expired");
                        return Ok(None);
                    }
                }
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(FmpError::io(&path, e)),
            }
        }

        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FmpError::io(&path, e)),
        };
        tracing::debug!(path = %path.display(), "cache hit");
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    pub async fn write<T: Serialize + ?Sized>(
        &self,
        resource: Resource,
        symbol: &str,
        value: &T,
    ) -> Result<(), FmpError> {
        self.ensure_dir().await?;
        let path = self.path_for(resource, symbol);
        let bytes = serde_json::to_vec(value)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FmpError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "cache entry written");
        Ok(())
    }
}
