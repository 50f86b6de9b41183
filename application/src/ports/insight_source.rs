//! Insight source port
//!
//! Defines the interface for fetching aggregated free-text insight about a
//! company. In production this would sit in front of a web-aggregation or
//! LLM pipeline; tests and the simulation substitute deterministic stubs.

use super::SourceError;
use async_trait::async_trait;

/// Source of aggregated free-text insight for a company
#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Fetch aggregated insight text for the named company
    async fn fetch_insight(&self, company_name: &str) -> Result<String, SourceError>;
}
