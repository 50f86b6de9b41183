//! Infrastructure layer for company-pulse
//!
//! Adapters implementing the application ports, plus configuration loading.
//! The data-source adapters here are simulations standing in for live
//! collaborators (a quote API, a web-aggregation pipeline, an NLP service);
//! swapping in real implementations touches only this crate.

pub mod config;
pub mod providers;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use providers::{
    lexicon_extractor::LexiconSentimentExtractor,
    simulated_insight::SimulatedInsightSource,
    synthetic_market::SyntheticMarketData,
};
