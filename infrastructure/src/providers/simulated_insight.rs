//! Simulated insight source
//!
//! Stands in for the production web-aggregation pipeline: composes an
//! aggregated-insight paragraph for a company from a fixed phrase bank.
//! Deterministic under a fixed seed, so a full pipeline run can be
//! reproduced exactly.

use super::seed_for;
use async_trait::async_trait;
use pulse_application::{InsightSource, SourceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Observations the simulation can "find on the web". Each sentence carries
/// aspect terms and sentiment cues the lexicon extractor understands.
pub(crate) const OBSERVATIONS: &[&str] = &[
    "Many users praise the product quality and call the feature set excellent.",
    "Several reviewers complain that pricing is expensive for small teams.",
    "Support response times draw frequent complaints from frustrated customers.",
    "The support team is often praised as responsive and helpful.",
    "Reliability has improved, with customers noting strong uptime this year.",
    "Recent outages have left some users frustrated about reliability.",
    "Commentators describe the leadership as focused, with a clear roadmap.",
    "Analysts note impressive innovation and a strong pace on AI features.",
    "Some long-time customers mention slow releases and a confusing roadmap.",
    "Forum posts praise the intuitive product design and steady growth.",
];

/// Number of observations composed into one insight paragraph
const OBSERVATIONS_PER_INSIGHT: usize = 5;

/// Simulated [`InsightSource`]
pub struct SimulatedInsightSource {
    seed: Option<u64>,
    failure_rate: f64,
}

impl SimulatedInsightSource {
    /// Create a source drawing fresh entropy per fetch
    pub fn new() -> Self {
        Self {
            seed: None,
            failure_rate: 0.0,
        }
    }

    /// Create a deterministic source for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            failure_rate: 0.0,
        }
    }

    /// Make a share of fetches fail (clamped to [0, 1])
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    fn rng_for(&self, company_name: &str) -> StdRng {
        match self.seed {
            Some(base) => StdRng::seed_from_u64(seed_for(base, company_name)),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SimulatedInsightSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightSource for SimulatedInsightSource {
    async fn fetch_insight(&self, company_name: &str) -> Result<String, SourceError> {
        let mut rng = self.rng_for(company_name);

        if self.failure_rate > 0.0 && rng.gen_range(0.0..1.0) < self.failure_rate {
            return Err(SourceError::Unavailable(format!(
                "Simulated aggregation outage for {company_name}"
            )));
        }

        let mut sentences = Vec::with_capacity(OBSERVATIONS_PER_INSIGHT + 1);
        sentences.push(format!(
            "Aggregated insights about {company_name} from recent public discussion:"
        ));
        // Draw distinct observations; order follows the draw
        let mut remaining: Vec<&str> = OBSERVATIONS.to_vec();
        for _ in 0..OBSERVATIONS_PER_INSIGHT.min(remaining.len()) {
            let index = rng.gen_range(0..remaining.len());
            sentences.push(remaining.swap_remove(index).to_string());
        }

        let insight = sentences.join(" ");
        debug!(
            "Composed {} chars of insight for {}",
            insight.chars().count(),
            company_name
        );
        Ok(insight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_domain::MIN_INSIGHT_LEN;

    #[tokio::test]
    async fn test_seeded_insight_is_deterministic() {
        let source = SimulatedInsightSource::from_seed(42);
        let first = source.fetch_insight("Initech").await.unwrap();
        let second = source.fetch_insight("Initech").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_insight_mentions_company_and_meets_minimum_length() {
        let insight = SimulatedInsightSource::from_seed(7)
            .fetch_insight("Alphabet Inc")
            .await
            .unwrap();
        assert!(insight.contains("Alphabet Inc"));
        assert!(insight.chars().count() >= MIN_INSIGHT_LEN);
    }

    #[tokio::test]
    async fn test_observations_are_distinct() {
        let insight = SimulatedInsightSource::from_seed(9)
            .fetch_insight("Initech")
            .await
            .unwrap();
        for observation in OBSERVATIONS {
            assert!(insight.matches(observation).count() <= 1);
        }
    }

    #[tokio::test]
    async fn test_full_failure_rate_always_fails() {
        let source = SimulatedInsightSource::from_seed(1).with_failure_rate(1.0);
        let err = source.fetch_insight("Initech").await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
