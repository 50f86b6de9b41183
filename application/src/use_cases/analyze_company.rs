//! Analyze Company use case
//!
//! Orchestrates the single-company pipeline: fan out to the insight source
//! and the market data provider in parallel, join both, then apply the
//! asymmetric partial-failure policy — insight is fatal when missing,
//! market data merely degrades the result.

use crate::analyzer::InsightAnalyzer;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::{InsightSource, MarketDataProvider, SentimentExtractor, SourceError};
use pulse_domain::{
    resolve_ticker, AnalysisResult, CompanyName, DomainError, MIN_INSIGHT_LEN,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can surface from a company analysis request
#[derive(Error, Debug)]
pub enum AnalyzeCompanyError {
    /// Malformed caller input; surfaced verbatim, never retried
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// The insight source returned too little signal for this request
    #[error("Could not find enough information about this company. Please try a different one.")]
    InsufficientData,

    /// Anything unanticipated; original cause preserved
    #[error("An error occurred during analysis: {0}. Please try again.")]
    Unknown(#[source] SourceError),
}

/// Input for the [`AnalyzeCompanyUseCase`]
#[derive(Debug, Clone)]
pub struct AnalyzeCompanyInput {
    /// The company to analyze; validated before any I/O
    pub company_name: String,
}

impl AnalyzeCompanyInput {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
        }
    }
}

/// Use case for producing a sentiment report for one company
///
/// Protocol:
/// 1. Validate the company name — fail fast, no I/O on invalid input.
/// 2. Fetch insight text and market data concurrently; both tasks always
///    settle, neither cancels the other.
/// 3. Missing or too-short insight is fatal ([`InsufficientData`]).
/// 4. Analyze the insight text into trends, key aspects and an overall
///    sentiment.
/// 5. Missing market data only drops the `stock` field (warning logged).
///
/// [`InsufficientData`]: AnalyzeCompanyError::InsufficientData
pub struct AnalyzeCompanyUseCase {
    insight_source: Arc<dyn InsightSource>,
    analyzer: InsightAnalyzer,
    market_data: Arc<dyn MarketDataProvider>,
}

impl AnalyzeCompanyUseCase {
    pub fn new(
        insight_source: Arc<dyn InsightSource>,
        extractor: Arc<dyn SentimentExtractor>,
        market_data: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            insight_source,
            analyzer: InsightAnalyzer::new(extractor),
            market_data,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: AnalyzeCompanyInput,
    ) -> Result<AnalysisResult, AnalyzeCompanyError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AnalyzeCompanyInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnalysisResult, AnalyzeCompanyError> {
        let company = CompanyName::new(input.company_name)?;
        let ticker = resolve_ticker(company.as_str());

        info!("Starting analysis for {} ({})", company, ticker);
        progress.on_fetch_start("insight");
        progress.on_fetch_start("market data");

        // Two independent tasks with no data dependency; join both before
        // any decision logic runs, so a fatal insight failure never cuts
        // the market fetch short.
        let (insight_result, market_result) = tokio::join!(
            self.insight_source.fetch_insight(company.as_str()),
            self.market_data.fetch(&ticker),
        );

        progress.on_fetch_settled("insight", insight_result.is_ok());
        progress.on_fetch_settled("market data", market_result.is_ok());

        let insight = match insight_result {
            Ok(text) if text.chars().count() >= MIN_INSIGHT_LEN => text,
            Ok(text) => {
                warn!(
                    "Insight for {} too short ({} chars, need {})",
                    company,
                    text.chars().count(),
                    MIN_INSIGHT_LEN
                );
                return Err(AnalyzeCompanyError::InsufficientData);
            }
            Err(e) => {
                warn!("Insight source failed for {}: {}", company, e);
                return Err(AnalyzeCompanyError::InsufficientData);
            }
        };

        let analyzed = self
            .analyzer
            .analyze(company.as_str(), &insight)
            .await
            .map_err(|e| match e {
                // No usable structured output is the same dead end as no text
                SourceError::ExtractionFailed(reason) => {
                    warn!("Extraction failed for {}: {}", company, reason);
                    AnalyzeCompanyError::InsufficientData
                }
                other => AnalyzeCompanyError::Unknown(other),
            })?;

        let stock = match market_result {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                // Degraded, not failed: the report stands without a quote
                warn!("Market data unavailable for {}: {}", ticker, e);
                None
            }
        };

        debug!(
            "Analysis for {} complete: {} ({} trends, market data: {})",
            company,
            analyzed.overall_sentiment,
            analyzed.sentiment_trends.len(),
            stock.is_some()
        );

        Ok(AnalysisResult {
            company_name: company.into_inner(),
            overall_sentiment: analyzed.overall_sentiment,
            sentiment_trends: analyzed.sentiment_trends,
            key_aspects: analyzed.key_aspects,
            stock,
        })
    }
}
