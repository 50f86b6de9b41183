//! Lexicon-based sentiment extractor
//!
//! Keyword-table extraction standing in for the production NLP service.
//! Sentences are scanned for aspect terms and sentiment cue words; each
//! (sentence, aspect) pair contributes one trend observation weighted by
//! its cue hits. The tables capture the product-feedback vocabulary the
//! simulated insight source speaks; both are product content and may grow.

use async_trait::async_trait;
use pulse_application::{SentimentExtractor, SourceError};
use pulse_domain::{InsightReport, KeyAspect, Sentiment, SentimentTrend};
use tracing::debug;

/// Aspects and the terms that indicate them. First match per sentence wins
/// per aspect; one sentence can mention several aspects.
const ASPECT_TERMS: &[(&str, &[&str])] = &[
    (
        "product quality",
        &["product quality", "product design", "feature set", "features", "quality", "product"],
    ),
    ("pricing", &["pricing", "price", "expensive", "cost", "subscription"]),
    ("support", &["support", "helpdesk", "response time"]),
    ("reliability", &["reliability", "uptime", "outage", "outages", "stability"]),
    ("leadership", &["leadership", "management", "roadmap"]),
    ("innovation", &["innovation", "innovative", "ai features", "pace"]),
];

const POSITIVE_CUES: &[&str] = &[
    "praise", "praised", "excellent", "impressive", "improved", "strong", "responsive",
    "helpful", "intuitive", "focused", "clear", "steady", "growth", "love", "loved",
];

const NEGATIVE_CUES: &[&str] = &[
    "complain", "complains", "complaints", "frustrated", "frustrating", "expensive",
    "outage", "outages", "slow", "confusing", "buggy", "bugs", "decline", "churn",
];

/// Lexicon [`SentimentExtractor`]
pub struct LexiconSentimentExtractor;

impl LexiconSentimentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconSentimentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentExtractor for LexiconSentimentExtractor {
    async fn extract(
        &self,
        company_name: &str,
        text: &str,
    ) -> Result<InsightReport, SourceError> {
        if text.trim().is_empty() {
            return Err(SourceError::ExtractionFailed(format!(
                "No insight text for {company_name}"
            )));
        }

        let mut trends: Vec<SentimentTrend> = Vec::new();

        for sentence in text.split(['.', '!', '?']) {
            let sentence = sentence.to_lowercase();
            if sentence.trim().is_empty() {
                continue;
            }

            let positive_hits = count_hits(&sentence, POSITIVE_CUES);
            let negative_hits = count_hits(&sentence, NEGATIVE_CUES);

            for (aspect, terms) in ASPECT_TERMS {
                if !terms.iter().any(|term| sentence.contains(term)) {
                    continue;
                }
                let (sentiment, weight) = if positive_hits > negative_hits {
                    (Sentiment::Positive, positive_hits)
                } else if negative_hits > positive_hits {
                    (Sentiment::Negative, negative_hits)
                } else {
                    (Sentiment::Neutral, 1)
                };
                accumulate(&mut trends, aspect, sentiment, weight);
            }
        }

        if trends.is_empty() {
            return Err(SourceError::ExtractionFailed(format!(
                "No recognizable sentiment signal about {company_name}"
            )));
        }

        let key_aspects = summarize_aspects(&trends);
        debug!(
            "Extracted {} trends across {} aspects for {}",
            trends.len(),
            key_aspects.len(),
            company_name
        );
        Ok(InsightReport::new(trends, key_aspects))
    }
}

fn count_hits(sentence: &str, cues: &[&str]) -> u32 {
    cues.iter()
        .map(|cue| sentence.matches(cue).count() as u32)
        .sum()
}

/// Fold an observation into the trend list, keeping insertion order
fn accumulate(trends: &mut Vec<SentimentTrend>, aspect: &str, sentiment: Sentiment, weight: u32) {
    if let Some(existing) = trends
        .iter_mut()
        .find(|t| t.aspect == aspect && t.sentiment == sentiment)
    {
        existing.occurrences += weight;
    } else {
        trends.push(SentimentTrend::new(aspect, sentiment, weight));
    }
}

/// One key aspect per distinct aspect, in first-observed order
fn summarize_aspects(trends: &[SentimentTrend]) -> Vec<KeyAspect> {
    let mut aspects: Vec<&str> = Vec::new();
    for trend in trends {
        if !aspects.contains(&trend.aspect.as_str()) {
            aspects.push(&trend.aspect);
        }
    }

    aspects
        .into_iter()
        .map(|aspect| {
            let count = |sentiment: Sentiment| -> u32 {
                trends
                    .iter()
                    .filter(|t| t.aspect == aspect && t.sentiment == sentiment)
                    .map(|t| t.occurrences)
                    .sum()
            };
            let positive = count(Sentiment::Positive);
            let negative = count(Sentiment::Negative);

            let description = if positive > negative {
                format!("Discussion skews positive ({positive} positive vs {negative} negative signals).")
            } else if negative > positive {
                format!("Discussion skews negative ({negative} negative vs {positive} positive signals).")
            } else {
                "Mentioned without a clear sentiment lean.".to_string()
            };
            KeyAspect::new(aspect, description)
        })
        .collect()
}
