//! Sentiment value objects
//!
//! These types carry the structured signal produced by a sentiment
//! extractor: per-aspect trends with occurrence counts, and key-aspect
//! summaries. They are immutable, request-scoped data.

use serde::{Deserialize, Serialize};

/// Sentiment expressed about a single aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Overall sentiment classification for a company
///
/// Always derived from a trend set via [`classify`](super::score::classify),
/// never supplied directly by a caller. `Mixed` means positive and negative
/// signal are too close to call either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallSentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl std::fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallSentiment::Positive => write!(f, "positive"),
            OverallSentiment::Negative => write!(f, "negative"),
            OverallSentiment::Neutral => write!(f, "neutral"),
            OverallSentiment::Mixed => write!(f, "mixed"),
        }
    }
}

/// A single (aspect, sentiment, occurrence-count) observation
///
/// Multiple trends may share an aspect or a sentiment. Order is the
/// extractor's insertion order and carries no meaning.
///
/// # Example
///
/// ```
/// use pulse_domain::{Sentiment, SentimentTrend};
///
/// let trend = SentimentTrend::new("pricing", Sentiment::Negative, 12);
/// assert_eq!(trend.occurrences, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTrend {
    /// The aspect of the company being discussed
    pub aspect: String,
    /// The sentiment expressed about the aspect
    pub sentiment: Sentiment,
    /// How many times this sentiment was expressed
    pub occurrences: u32,
}

impl SentimentTrend {
    /// Create a new sentiment trend
    pub fn new(aspect: impl Into<String>, sentiment: Sentiment, occurrences: u32) -> Self {
        Self {
            aspect: aspect.into(),
            sentiment,
            occurrences,
        }
    }
}

/// A notable aspect of a company with a summary of perceptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAspect {
    /// The key aspect of the company
    pub aspect: String,
    /// A summary of perceptions of this aspect
    pub description: String,
}

impl KeyAspect {
    /// Create a new key aspect
    pub fn new(aspect: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            aspect: aspect.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");

        let json = serde_json::to_string(&OverallSentiment::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
    }

    #[test]
    fn test_trend_roundtrip() {
        let trend = SentimentTrend::new("support", Sentiment::Neutral, 3);
        let json = serde_json::to_string(&trend).unwrap();
        let back: SentimentTrend = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trend);
    }

    #[test]
    fn test_key_aspect_creation() {
        let aspect = KeyAspect::new("pricing", "Users find the tiers confusing.");
        assert_eq!(aspect.aspect, "pricing");
    }
}
