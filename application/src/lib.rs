//! Application layer for company-pulse
//!
//! This crate owns the orchestration of the insight pipeline: the ports
//! (collaborator interfaces) and the use cases that fan out to them,
//! tolerate partial failure, and compose the final results.
//!
//! # Partial-failure policy
//!
//! The two orchestrators apply different, deliberate policies:
//!
//! - [`AnalyzeCompanyUseCase`] splits its sources asymmetrically: insight
//!   text is on the critical path (its absence voids the request), while
//!   market data is supplementary (its absence degrades the result).
//! - [`CompareCompaniesUseCase`] isolates failures per item: one failed
//!   fetch becomes a placeholder in its own position and never affects any
//!   other position.

pub mod analyzer;
pub mod ports;
pub mod use_cases;

pub use analyzer::{AnalyzedInsights, InsightAnalyzer};
pub use ports::{
    InsightSource, MarketDataProvider, NoProgress, ProgressNotifier, SentimentExtractor,
    SourceError,
};
pub use use_cases::{
    analyze_company::{AnalyzeCompanyError, AnalyzeCompanyInput, AnalyzeCompanyUseCase},
    compare_companies::{CompareCompaniesError, CompareCompaniesInput, CompareCompaniesUseCase},
};
