//! Overall-sentiment classifier
//!
//! Folds a set of [`SentimentTrend`]s into one [`OverallSentiment`] using a
//! ratio/dominance/closeness rule. Pure and total: any trend set, including
//! an empty one, classifies to exactly one value.

use super::types::{OverallSentiment, Sentiment, SentimentTrend};

/// A sentiment must hold more than this share of all occurrences to be
/// considered dominant.
pub const DOMINANCE_RATIO: f64 = 0.6;

/// A dominant sentiment must additionally exceed its opposite by this factor.
pub const DOMINANCE_FACTOR: f64 = 2.0;

/// Positive and negative shares closer than this margin classify as mixed.
pub const MIXED_MARGIN: f64 = 0.15;

/// Occurrence totals per sentiment bucket
///
/// Fixed enumeration with an accumulator per bucket; missing buckets stay 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTotals {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentTotals {
    /// Sum occurrences across all trends into per-sentiment buckets
    pub fn tally(trends: &[SentimentTrend]) -> Self {
        let mut totals = Self::default();
        for trend in trends {
            let count = u64::from(trend.occurrences);
            match trend.sentiment {
                Sentiment::Positive => totals.positive += count,
                Sentiment::Negative => totals.negative += count,
                Sentiment::Neutral => totals.neutral += count,
            }
        }
        totals
    }

    /// Total occurrences across all buckets
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Share of positive occurrences (0.0 when empty)
    pub fn positive_ratio(&self) -> f64 {
        ratio(self.positive, self.total())
    }

    /// Share of negative occurrences (0.0 when empty)
    pub fn negative_ratio(&self) -> f64 {
        ratio(self.negative, self.total())
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Classify a trend set into an overall sentiment.
///
/// Rules, in precedence order:
/// 1. No occurrences at all → `Neutral`.
/// 2. Positive share > 0.6 and more than twice the negative share → `Positive`.
/// 3. Negative share > 0.6 and more than twice the positive share → `Negative`.
/// 4. Positive and negative shares within 0.15 of each other → `Mixed`.
/// 5. Otherwise → `Neutral`.
///
/// The dominance checks deliberately run before the closeness check, so a
/// lopsided trend set can never classify as mixed.
///
/// # Example
///
/// ```
/// use pulse_domain::{classify, OverallSentiment, Sentiment, SentimentTrend};
///
/// let trends = vec![
///     SentimentTrend::new("product", Sentiment::Positive, 80),
///     SentimentTrend::new("pricing", Sentiment::Negative, 10),
///     SentimentTrend::new("support", Sentiment::Neutral, 10),
/// ];
/// assert_eq!(classify(&trends), OverallSentiment::Positive);
/// ```
pub fn classify(trends: &[SentimentTrend]) -> OverallSentiment {
    let totals = SentimentTotals::tally(trends);
    if totals.total() == 0 {
        return OverallSentiment::Neutral;
    }

    let positive = totals.positive_ratio();
    let negative = totals.negative_ratio();

    if positive > DOMINANCE_RATIO && positive > DOMINANCE_FACTOR * negative {
        OverallSentiment::Positive
    } else if negative > DOMINANCE_RATIO && negative > DOMINANCE_FACTOR * positive {
        OverallSentiment::Negative
    } else if (positive - negative).abs() < MIXED_MARGIN {
        OverallSentiment::Mixed
    } else {
        OverallSentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trends(positive: u32, negative: u32, neutral: u32) -> Vec<SentimentTrend> {
        vec![
            SentimentTrend::new("product", Sentiment::Positive, positive),
            SentimentTrend::new("pricing", Sentiment::Negative, negative),
            SentimentTrend::new("support", Sentiment::Neutral, neutral),
        ]
    }

    #[test]
    fn test_empty_trend_set_is_neutral() {
        assert_eq!(classify(&[]), OverallSentiment::Neutral);
    }

    #[test]
    fn test_zero_occurrences_is_neutral() {
        assert_eq!(classify(&trends(0, 0, 0)), OverallSentiment::Neutral);
    }

    #[test]
    fn test_dominant_positive() {
        assert_eq!(classify(&trends(80, 10, 10)), OverallSentiment::Positive);
    }

    #[test]
    fn test_dominant_negative() {
        assert_eq!(classify(&trends(10, 80, 10)), OverallSentiment::Negative);
    }

    #[test]
    fn test_close_ratios_are_mixed() {
        // ~0.34 vs ~0.33, difference below the mixed margin
        assert_eq!(classify(&trends(34, 33, 33)), OverallSentiment::Mixed);
    }

    #[test]
    fn test_even_split_is_mixed() {
        assert_eq!(classify(&trends(50, 50, 0)), OverallSentiment::Mixed);
    }

    #[test]
    fn test_moderate_lead_is_neutral() {
        // 0.55 vs 0.45 fails dominance and is not close enough for mixed
        assert_eq!(classify(&trends(55, 45, 0)), OverallSentiment::Neutral);
    }

    #[test]
    fn test_dominance_needs_both_conditions() {
        // 0.65 share but under 2x the negative share -> not dominant,
        // and a 0.3 gap is not mixed either
        assert_eq!(classify(&trends(65, 35, 0)), OverallSentiment::Neutral);
    }

    #[test]
    fn test_split_trends_accumulate_per_bucket() {
        let trends = vec![
            SentimentTrend::new("product", Sentiment::Positive, 40),
            SentimentTrend::new("innovation", Sentiment::Positive, 40),
            SentimentTrend::new("pricing", Sentiment::Negative, 10),
            SentimentTrend::new("support", Sentiment::Neutral, 10),
        ];
        assert_eq!(classify(&trends), OverallSentiment::Positive);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let set = trends(21, 19, 7);
        let first = classify(&set);
        for _ in 0..10 {
            assert_eq!(classify(&set), first);
        }
    }

    #[test]
    fn test_tally_totals() {
        let totals = SentimentTotals::tally(&trends(3, 4, 5));
        assert_eq!(totals.total(), 12);
        assert_eq!(totals.positive, 3);
        assert_eq!(totals.negative, 4);
        assert_eq!(totals.neutral, 5);
    }
}
