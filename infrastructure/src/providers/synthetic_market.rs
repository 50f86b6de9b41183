//! Synthetic market data provider
//!
//! Generates plausible intraday quote data instead of calling a live API.
//! The generator is deterministic under a fixed seed (per ticker), which is
//! what the orchestrator tests and the parity tests rely on. A real quote
//! client can replace this adapter without touching any use case.

use super::seed_for;
use async_trait::async_trait;
use pulse_application::{MarketDataProvider, SourceError};
use pulse_domain::{PricePoint, StockSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Number of intraday ticks per session
const SESSION_TICKS: usize = 24;

/// Session open, 24-hour clock
const SESSION_OPEN_HOUR: usize = 9;

/// Synthetic [`MarketDataProvider`]
///
/// - Unseeded, every fetch draws fresh entropy.
/// - Seeded, the snapshot for a given ticker is a pure function of
///   (seed, ticker) regardless of concurrent call order.
/// - `failure_rate` makes a share of fetches fail with
///   [`SourceError::Unavailable`], to exercise the degraded and isolated
///   failure paths end to end.
pub struct SyntheticMarketData {
    seed: Option<u64>,
    failure_rate: f64,
}

impl SyntheticMarketData {
    /// Create a provider drawing fresh entropy per fetch
    pub fn new() -> Self {
        Self {
            seed: None,
            failure_rate: 0.0,
        }
    }

    /// Create a deterministic provider for the given seed
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

    fn rng_for(&self, ticker: &str) -> StdRng {
        match self.seed {
            Some(base) => StdRng::seed_from_u64(seed_for(base, ticker)),
            None => StdRng::from_entropy(),
        }
    }

    fn generate(&self, ticker: &str, rng: &mut StdRng) -> StockSnapshot {
        let base_price = rng.gen_range(50.0..550.0);
        let change = rng.gen_range(-5.0..5.0);
        let price = base_price + change;
        let change_percent = change / base_price * 100.0;

        // Half-hour ticks from the open, independent jitter plus a linear
        // drift toward the day's change.
        let historical: Vec<PricePoint> = (0..SESSION_TICKS)
            .map(|i| {
                let hour = SESSION_OPEN_HOUR + i / 2;
                let minute = if i % 2 == 0 { "00" } else { "30" };
                let jitter = rng.gen_range(-2.5..2.5);
                let drift = (i as f64 / SESSION_TICKS as f64) * change;
                PricePoint::new(
                    format!("{hour:02}:{minute}"),
                    round2(base_price + jitter + drift),
                )
            })
            .collect();

        let day_high = historical
            .iter()
            .map(|p| p.price)
            .fold(round2(price), f64::max);
        let day_low = historical
            .iter()
            .map(|p| p.price)
            .fold(round2(price), f64::min);

        StockSnapshot {
            ticker: ticker.to_string(),
            price: round2(price),
            currency: "USD".to_string(),
            change: round2(change),
            change_percent: round2(change_percent),
            day_high: round2(day_high),
            day_low: round2(day_low),
            market_cap: format!("{:.2}T", rng.gen_range(0.5..2.5)),
            historical,
        }
    }
}

impl Default for SyntheticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for SyntheticMarketData {
    async fn fetch(&self, ticker: &str) -> Result<StockSnapshot, SourceError> {
        let mut rng = self.rng_for(ticker);

        if self.failure_rate > 0.0 && rng.gen_range(0.0..1.0) < self.failure_rate {
            return Err(SourceError::Unavailable(format!(
                "Simulated quote outage for {ticker}"
            )));
        }

        let snapshot = self.generate(ticker, &mut rng);
        debug!(
            "Generated snapshot for {}: {} {} ({:+.2})",
            ticker, snapshot.price, snapshot.currency, snapshot.change
        );
        Ok(snapshot)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_two_dp(value: f64) -> bool {
        (value * 100.0 - (value * 100.0).round()).abs() < 1e-9
    }

    #[tokio::test]
    async fn test_seeded_fetch_is_deterministic_per_ticker() {
        let provider = SyntheticMarketData::from_seed(42);
        let first = provider.fetch("GOOGL").await.unwrap();
        let second = provider.fetch("GOOGL").await.unwrap();
        assert_eq!(first, second);

        let other = provider.fetch("MSFT").await.unwrap();
        assert_ne!(first, other);
    }

    #[tokio::test]
    async fn test_snapshot_shape() {
        let snapshot = SyntheticMarketData::from_seed(7).fetch("TSLA").await.unwrap();

        assert_eq!(snapshot.ticker, "TSLA");
        assert_eq!(snapshot.currency, "USD");
        assert_eq!(snapshot.historical.len(), SESSION_TICKS);
        assert_eq!(snapshot.historical[0].time, "09:00");
        assert_eq!(snapshot.historical[1].time, "09:30");
        assert_eq!(snapshot.historical[23].time, "20:30");
        assert!(snapshot.market_cap.ends_with('T'));
    }

    #[tokio::test]
    async fn test_range_invariants_hold() {
        // Spot-check several seeds; the invariant must hold for all of them
        for seed in 0..50 {
            let snapshot = SyntheticMarketData::from_seed(seed)
                .fetch("AAPL")
                .await
                .unwrap();
            assert!(
                snapshot.covers_intraday_range(),
                "seed {seed} violated day range"
            );
            assert!(snapshot.day_low <= snapshot.day_high);
        }
    }

    #[tokio::test]
    async fn test_values_are_rounded_to_two_decimals() {
        let snapshot = SyntheticMarketData::from_seed(3).fetch("AMZN").await.unwrap();
        assert!(is_two_dp(snapshot.price));
        assert!(is_two_dp(snapshot.change));
        assert!(is_two_dp(snapshot.change_percent));
        assert!(is_two_dp(snapshot.day_high));
        assert!(is_two_dp(snapshot.day_low));
        for point in &snapshot.historical {
            assert!(is_two_dp(point.price));
        }
    }

    #[tokio::test]
    async fn test_price_stays_in_generated_band() {
        for seed in 0..20 {
            let snapshot = SyntheticMarketData::from_seed(seed)
                .fetch("NFLX")
                .await
                .unwrap();
            // base in [50, 550) plus change in [-5, 5)
            assert!(snapshot.price > 45.0 && snapshot.price < 555.0);
            assert!(snapshot.change >= -5.0 && snapshot.change < 5.0);
        }
    }

    #[tokio::test]
    async fn test_full_failure_rate_always_fails() {
        let provider = SyntheticMarketData::from_seed(1).with_failure_rate(1.0);
        let err = provider.fetch("GOOGL").await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_zero_failure_rate_never_fails() {
        let provider = SyntheticMarketData::from_seed(1).with_failure_rate(0.0);
        for ticker in ["GOOGL", "MSFT", "AAPL", "TSLA"] {
            assert!(provider.fetch(ticker).await.is_ok());
        }
    }
}
