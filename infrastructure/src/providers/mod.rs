//! Source adapters implementing the application ports

pub mod lexicon_extractor;
pub mod simulated_insight;
pub mod synthetic_market;

pub use lexicon_extractor::LexiconSentimentExtractor;
pub use simulated_insight::SimulatedInsightSource;
pub use synthetic_market::SyntheticMarketData;

use std::hash::{DefaultHasher, Hash, Hasher};

/// Derive a stable per-key seed from a base seed, so simulated providers
/// produce the same output for the same input under a fixed seed,
/// independent of call order.
pub(crate) fn seed_for(base: u64, key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    base ^ hasher.finish()
}
