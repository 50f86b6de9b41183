//! Insight analyzer
//!
//! Turns raw insight text into structured trends and key aspects by
//! delegating to a [`SentimentExtractor`], then attaches the derived
//! overall sentiment. Text understanding stays entirely behind the port;
//! this component only validates structure and scores.

use crate::ports::{SentimentExtractor, SourceError};
use pulse_domain::{classify, KeyAspect, OverallSentiment, SentimentTrend};
use std::sync::Arc;
use tracing::debug;

/// Structured insight with the derived overall sentiment attached
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedInsights {
    pub overall_sentiment: OverallSentiment,
    pub sentiment_trends: Vec<SentimentTrend>,
    pub key_aspects: Vec<KeyAspect>,
}

/// Analyzer that composes extraction with sentiment scoring
pub struct InsightAnalyzer {
    extractor: Arc<dyn SentimentExtractor>,
}

impl InsightAnalyzer {
    pub fn new(extractor: Arc<dyn SentimentExtractor>) -> Self {
        Self { extractor }
    }

    /// Analyze raw insight text for one company
    ///
    /// Propagates [`SourceError::ExtractionFailed`] when the extractor
    /// returns no structured output; otherwise classifies the trend set
    /// and returns the full analyzed bundle.
    pub async fn analyze(
        &self,
        company_name: &str,
        raw_insight: &str,
    ) -> Result<AnalyzedInsights, SourceError> {
        let report = self.extractor.extract(company_name, raw_insight).await?;
        let overall_sentiment = classify(&report.sentiment_trends);
        debug!(
            "Classified {} trends for {} as {}",
            report.sentiment_trends.len(),
            company_name,
            overall_sentiment
        );
        Ok(AnalyzedInsights {
            overall_sentiment,
            sentiment_trends: report.sentiment_trends,
            key_aspects: report.key_aspects,
        })
    }
}
