//! Sentiment types and the overall-sentiment classifier

pub mod score;
pub mod types;

pub use score::classify;
pub use types::{KeyAspect, OverallSentiment, Sentiment, SentimentTrend};
