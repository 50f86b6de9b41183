//! Analysis request and result types

pub mod company;
pub mod result;

pub use company::CompanyName;
pub use result::{AnalysisResult, ComparisonItem, InsightReport};

/// Minimum number of characters of raw insight text required for an
/// analysis to proceed. Shorter insight is treated as insufficient data.
pub const MIN_INSIGHT_LEN: usize = 50;
