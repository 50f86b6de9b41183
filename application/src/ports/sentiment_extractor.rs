//! Sentiment extractor port
//!
//! Defines the interface for turning free-text insight into structured
//! trends and key aspects. The core never interprets text itself; it only
//! validates that the extractor returned structurally complete output.

use super::SourceError;
use async_trait::async_trait;
use pulse_domain::InsightReport;

/// Extractor of structured sentiment signal from raw insight text
#[async_trait]
pub trait SentimentExtractor: Send + Sync {
    /// Extract per-aspect trends and key aspects from insight text
    ///
    /// Fails with [`SourceError::ExtractionFailed`] when the text yields no
    /// structured output at all. An empty-but-well-formed report is valid.
    async fn extract(&self, company_name: &str, text: &str)
        -> Result<InsightReport, SourceError>;
}
