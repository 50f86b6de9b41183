//! Compare Companies use case
//!
//! Orchestrates the N-company batch pipeline: one market-data fetch per
//! company, launched concurrently, with per-item failure isolation. The
//! output always has the same length and order as the input; a failed
//! fetch becomes a placeholder in its own position.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::MarketDataProvider;
use pulse_domain::{resolve_ticker, ComparisonItem, DomainError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can surface from a comparison request
#[derive(Error, Debug)]
pub enum CompareCompaniesError {
    /// Malformed caller input (empty company list)
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// Anything unanticipated outside the per-item isolation boundary
    #[error("An error occurred during comparison: {0}. Please try again.")]
    Unknown(String),
}

/// Input for the [`CompareCompaniesUseCase`]
#[derive(Debug, Clone)]
pub struct CompareCompaniesInput {
    /// Companies to compare, in the order results must be returned
    pub company_names: Vec<String>,
}

impl CompareCompaniesInput {
    pub fn new(company_names: Vec<String>) -> Self {
        Self { company_names }
    }
}

/// Use case for comparing market data across many companies
///
/// Defining property: per-item isolation. One fetch failing never aborts,
/// blocks or reorders any other item — each position independently holds
/// either a quote or an error placeholder carrying the resolved ticker.
pub struct CompareCompaniesUseCase {
    market_data: Arc<dyn MarketDataProvider>,
}

impl CompareCompaniesUseCase {
    pub fn new(market_data: Arc<dyn MarketDataProvider>) -> Self {
        Self { market_data }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: CompareCompaniesInput,
    ) -> Result<Vec<ComparisonItem>, CompareCompaniesError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: CompareCompaniesInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<ComparisonItem>, CompareCompaniesError> {
        if input.company_names.is_empty() {
            return Err(DomainError::EmptyCompanyList.into());
        }

        info!("Comparing {} companies", input.company_names.len());

        let mut join_set = JoinSet::new();

        for (index, name) in input.company_names.iter().enumerate() {
            let provider = Arc::clone(&self.market_data);
            let ticker = resolve_ticker(name);
            progress.on_fetch_start(&ticker);

            join_set.spawn(async move {
                let result = provider.fetch(&ticker).await;
                (index, ticker, result)
            });
        }

        // Tasks settle in completion order; index-keyed slots restore the
        // input order.
        let mut slots: Vec<Option<ComparisonItem>> =
            input.company_names.iter().map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, ticker, Ok(snapshot))) => {
                    progress.on_fetch_settled(&ticker, true);
                    slots[index] = Some(ComparisonItem::Quote(snapshot));
                }
                Ok((index, ticker, Err(e))) => {
                    warn!("Market data for {} unavailable: {}", ticker, e);
                    progress.on_fetch_settled(&ticker, false);
                    slots[index] = Some(ComparisonItem::Unavailable {
                        ticker,
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    // A panicked task never reported its index; its slot is
                    // backfilled below. Isolation still holds.
                    warn!("Comparison task failed to join: {}", e);
                }
            }
        }

        let items = input
            .company_names
            .iter()
            .zip(slots)
            .map(|(name, slot)| {
                slot.unwrap_or_else(|| ComparisonItem::Unavailable {
                    ticker: resolve_ticker(name),
                    error: "Fetch task failed unexpectedly".to_string(),
                })
            })
            .collect();

        Ok(items)
    }
}
