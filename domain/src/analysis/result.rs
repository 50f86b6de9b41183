//! Analysis result types - immutable outputs of the orchestration layer
//!
//! - [`InsightReport`] - structured extractor output before scoring
//! - [`AnalysisResult`] - the composed per-company sentiment report
//! - [`ComparisonItem`] - one position of a multi-company comparison

use crate::market::snapshot::StockSnapshot;
use crate::sentiment::types::{KeyAspect, OverallSentiment, SentimentTrend};
use serde::{Deserialize, Serialize};

/// Structured output of a sentiment extractor
///
/// Both arrays must be well-formed but may be empty; structural completeness
/// is the only thing the core validates about extractor output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    /// Per-aspect sentiment observations in extractor order
    pub sentiment_trends: Vec<SentimentTrend>,
    /// Notable aspects with perception summaries
    pub key_aspects: Vec<KeyAspect>,
}

impl InsightReport {
    pub fn new(sentiment_trends: Vec<SentimentTrend>, key_aspects: Vec<KeyAspect>) -> Self {
        Self {
            sentiment_trends,
            key_aspects,
        }
    }
}

/// The composed sentiment report for one company
///
/// `stock` is optional by design: market data is supplementary, and its
/// absence is a degraded outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The company this report describes
    pub company_name: String,
    /// Derived overall sentiment
    pub overall_sentiment: OverallSentiment,
    /// Per-aspect sentiment observations
    pub sentiment_trends: Vec<SentimentTrend>,
    /// Notable aspects with perception summaries
    pub key_aspects: Vec<KeyAspect>,
    /// Market data, when it could be obtained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<StockSnapshot>,
}

impl AnalysisResult {
    /// Whether market data was obtained for this report
    pub fn has_market_data(&self) -> bool {
        self.stock.is_some()
    }
}

/// One position of a multi-company comparison
///
/// A comparison result always has the same length and order as the
/// requested company list; a failed fetch yields an `Unavailable`
/// placeholder in its position rather than shrinking the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonItem {
    /// Market data was obtained for this company
    Quote(StockSnapshot),
    /// The fetch failed; the placeholder keeps the resolved ticker
    Unavailable { ticker: String, error: String },
}

impl ComparisonItem {
    /// The ticker this position refers to, available in both outcomes
    pub fn ticker(&self) -> &str {
        match self {
            ComparisonItem::Quote(snapshot) => &snapshot.ticker,
            ComparisonItem::Unavailable { ticker, .. } => ticker,
        }
    }

    /// Whether this position carries a quote
    pub fn is_available(&self) -> bool {
        matches!(self, ComparisonItem::Quote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::snapshot::PricePoint;
    use crate::sentiment::types::Sentiment;

    fn snapshot(ticker: &str) -> StockSnapshot {
        StockSnapshot {
            ticker: ticker.to_string(),
            price: 100.0,
            currency: "USD".to_string(),
            change: 1.0,
            change_percent: 1.0,
            day_high: 101.0,
            day_low: 99.0,
            market_cap: "1.00T".to_string(),
            historical: vec![PricePoint::new("09:00", 99.5)],
        }
    }

    #[test]
    fn test_degraded_result_omits_stock_field() {
        let result = AnalysisResult {
            company_name: "Initech".to_string(),
            overall_sentiment: OverallSentiment::Neutral,
            sentiment_trends: vec![SentimentTrend::new("product", Sentiment::Neutral, 1)],
            key_aspects: vec![],
            stock: None,
        };
        assert!(!result.has_market_data());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("stock").is_none());
    }

    #[test]
    fn test_comparison_item_ticker() {
        let quote = ComparisonItem::Quote(snapshot("MSFT"));
        assert_eq!(quote.ticker(), "MSFT");
        assert!(quote.is_available());

        let placeholder = ComparisonItem::Unavailable {
            ticker: "TOTA".to_string(),
            error: "source unavailable".to_string(),
        };
        assert_eq!(placeholder.ticker(), "TOTA");
        assert!(!placeholder.is_available());
    }

    #[test]
    fn test_placeholder_serializes_as_error_object() {
        let placeholder = ComparisonItem::Unavailable {
            ticker: "TOTA".to_string(),
            error: "source unavailable".to_string(),
        };
        let json = serde_json::to_value(&placeholder).unwrap();
        assert_eq!(json["ticker"], "TOTA");
        assert_eq!(json["error"], "source unavailable");
        assert!(json.get("price").is_none());
    }
}
