//! Ports - collaborator interfaces consumed by the use cases
//!
//! Implementations (adapters) live in the infrastructure layer. Every port
//! is fallible and asynchronous; the use cases decide what each failure
//! means for the request as a whole.

pub mod insight_source;
pub mod market_data;
pub mod progress;
pub mod sentiment_extractor;

pub use insight_source::InsightSource;
pub use market_data::MarketDataProvider;
pub use progress::{NoProgress, ProgressNotifier};
pub use sentiment_extractor::SentimentExtractor;

use thiserror::Error;

/// Errors an external source can fail with
///
/// Shared by all data-source ports; the orchestrators translate these into
/// the request-level error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be reached or produced no data
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// Structured extraction produced no usable output
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// Anything unanticipated; message preserved for diagnostics
    #[error("{0}")]
    Other(String),
}
