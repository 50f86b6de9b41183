//! Domain layer for company-pulse
//!
//! This crate contains the core types and pure algorithms of the insight
//! pipeline. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Sentiment
//!
//! Raw signal arrives as [`SentimentTrend`]s — per-aspect observations with
//! occurrence counts. [`classify`] deterministically folds a trend set into
//! a single [`OverallSentiment`], which is always derived and never supplied
//! by a caller.
//!
//! ## Market
//!
//! [`StockSnapshot`] is a point-in-time quote plus its intraday history.
//! [`resolve_ticker`] maps a company name to a ticker symbol by rule lookup
//! with a deterministic fallback.
//!
//! ## Analysis
//!
//! [`AnalysisResult`] is the composed sentiment report for one company.
//! Its `stock` field is optional: absence means market data was unavailable,
//! a degraded but valid outcome. [`ComparisonItem`] is one position of a
//! multi-company comparison — a quote or an error placeholder.

pub mod analysis;
pub mod error;
pub mod market;
pub mod sentiment;

pub use analysis::{
    company::CompanyName,
    result::{AnalysisResult, ComparisonItem, InsightReport},
    MIN_INSIGHT_LEN,
};
pub use error::DomainError;
pub use market::{
    snapshot::{PricePoint, StockSnapshot},
    ticker::resolve_ticker,
};
pub use sentiment::{
    score::classify,
    types::{KeyAspect, OverallSentiment, Sentiment, SentimentTrend},
};
