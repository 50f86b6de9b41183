//! Market data port
//!
//! Defines the interface for fetching a price snapshot for a ticker. The
//! reference adapter is a synthetic generator; a live quote API can be
//! substituted without touching the orchestrators.

use super::SourceError;
use async_trait::async_trait;
use pulse_domain::StockSnapshot;

/// Provider of point-in-time market data
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch a snapshot for the given ticker
    ///
    /// Fails with [`SourceError::Unavailable`] when no data can be
    /// produced. Callers absorb this at the orchestration boundary.
    async fn fetch(&self, ticker: &str) -> Result<StockSnapshot, SourceError>;
}
