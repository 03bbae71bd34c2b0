//! Batch driver: symbol list in, merged CSV out.
//!
//! Symbols are processed one at a time. A symbol whose profile or income statement is
//! unavailable is skipped with a warning; any `Err` from the source ends the run before
//! the output file is touched.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::services::{DEFAULT_YEARS, FinancialSource};
use crate::core::{CacheMode, DiskCache, FmpError};
use crate::financials::{self, FinancialTable};

/// Where the pipeline reads, caches and writes, and how many years it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Text file holding one comma-separated line of ticker symbols.
    pub symbols_path: PathBuf,
    /// Directory for the per-symbol JSON cache.
    pub cache_dir: PathBuf,
    /// Destination CSV. Overwritten on every successful run.
    pub output_path: PathBuf,
    /// Annual statements requested per symbol.
    pub years: u32,
    pub cache_mode: CacheMode,
    /// Cache entries older than this are refetched. `None` keeps them forever.
    pub cache_max_age: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            symbols_path: PathBuf::from("data/valid_symbols.txt"),
            cache_dir: PathBuf::from("data/raw"),
            output_path: PathBuf::from("data/processed/company_financials.csv"),
            years: DEFAULT_YEARS,
            cache_mode: CacheMode::Use,
            cache_max_age: None,
        }
    }
}

impl PipelineConfig {
    pub fn disk_cache(&self) -> DiskCache {
        DiskCache::new(&self.cache_dir).max_age(self.cache_max_age)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Symbols that contributed rows, in processing order.
    pub processed: Vec<String>,
    /// Symbols dropped because their profile or income statement was unavailable.
    pub skipped: Vec<String>,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Splits a comma-separated symbol list, trimming whitespace and keeping only the first
/// occurrence of each symbol. Empty entries are ignored.
pub fn parse_symbols(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for s in input.split([',', '\n']).map(str::trim) {
        if !s.is_empty() && !out.iter().any(|seen| seen == s) {
            out.push(s.to_string());
        }
    }
    out
}

pub async fn read_symbols(path: &Path) -> Result<Vec<String>, FmpError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FmpError::io(path, e))?;
    Ok(parse_symbols(&raw))
}

/// Fetches and merges every symbol, returning the combined table sorted by symbol along
/// with the symbols that were skipped.
///
/// # Errors
///
/// Propagates the first `Err` from `source`, and returns [`FmpError::NoData`] when no
/// symbol produced any rows.
pub async fn collect<S: FinancialSource>(
    source: &S,
    symbols: &[String],
    years: u32,
) -> Result<(FinancialTable, Vec<String>), FmpError> {
    let mut frames = Vec::new();
    let mut skipped = Vec::new();

    for symbol in symbols {
        tracing::info!(%symbol, "Processing");
        let profile = source.profile(symbol).await?;
        let income = source.income_statement(symbol, years).await?;

        let (Some(profile), Some(income)) = (profile, income) else {
            tracing::warn!(%symbol, "Skipping due to missing data");
            skipped.push(symbol.clone());
            continue;
        };

        let table = financials::merge(symbol, &profile, &income);
        if table.is_empty() {
            tracing::warn!(%symbol, "Skipping due to empty merge result");
            skipped.push(symbol.clone());
            continue;
        }
        frames.push(table);
    }

    if frames.is_empty() {
        return Err(FmpError::NoData);
    }

    let mut combined = FinancialTable::concat(frames);
    combined.sort_by_symbol();
    Ok((combined, skipped))
}

/// Writes `table` as CSV to `path`, creating the parent directory if needed.
pub async fn write_output(table: &FinancialTable, path: &Path) -> Result<(), FmpError> {
    let mut buf = Vec::new();
    table.write_csv(&mut buf)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FmpError::io(parent, e))?;
    }
    tokio::fs::write(path, buf)
        .await
        .map_err(|e| FmpError::io(path, e))
}

/// Runs the whole batch: read symbols, fetch + merge each, write the CSV.
///
/// # Errors
///
/// Returns the first fatal error. The output file is only written once every symbol has
/// been processed, so a failed run leaves any previous output untouched.
pub async fn run<S: FinancialSource>(
    source: &S,
    config: &PipelineConfig,
) -> Result<RunSummary, FmpError> {
    let symbols = read_symbols(&config.symbols_path).await?;
    tracing::info!(count = symbols.len(), "Loaded symbols");

    let (table, skipped) = collect(source, &symbols, config.years).await?;
    write_output(&table, &config.output_path).await?;
    tracing::info!(rows = table.len(), path = %config.output_path.display(), "Wrote csv file");

    let processed = symbols
        .into_iter()
        .filter(|s| !skipped.contains(s))
        .collect();
    Ok(RunSummary {
        processed,
        skipped,
        rows_written: table.len(),
        output_path: config.output_path.clone(),
    })
}
