//! Stock snapshot value objects
//!
//! A [`StockSnapshot`] is a point-in-time market reading plus its intraday
//! history. Field names serialize in camelCase to match the report format
//! consumed by presentation layers.

use serde::{Deserialize, Serialize};

/// One point of the intraday price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Clock label for this tick, e.g. "09:30"
    pub time: String,
    /// Price at this tick
    pub price: f64,
}

impl PricePoint {
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }
}

/// Point-in-time market data for one ticker
///
/// `change` is a source-provided fact (price minus price at open) and is
/// never recomputed here. `day_high`/`day_low` are expected to bound both
/// the intraday series and the closing price; [`covers_intraday_range`]
/// checks that invariant.
///
/// [`covers_intraday_range`]: StockSnapshot::covers_intraday_range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    /// Ticker symbol this snapshot belongs to
    pub ticker: String,
    /// Current price
    pub price: f64,
    /// Quote currency, e.g. "USD"
    pub currency: String,
    /// Absolute change since open
    pub change: f64,
    /// Change since open as a percentage of the opening price
    pub change_percent: f64,
    /// Session high
    pub day_high: f64,
    /// Session low
    pub day_low: f64,
    /// Formatted market capitalization, e.g. "1.84T"
    pub market_cap: String,
    /// Intraday price series in session order
    pub historical: Vec<PricePoint>,
}

impl StockSnapshot {
    /// Whether the session high/low bound every intraday point and the
    /// closing price.
    pub fn covers_intraday_range(&self) -> bool {
        let prices = self.historical.iter().map(|p| p.price);
        let high = prices.clone().fold(self.price, f64::max);
        let low = prices.fold(self.price, f64::min);
        self.day_high >= high && self.day_low <= low
    }

    /// Whether the price moved up (or held flat) since open
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StockSnapshot {
        StockSnapshot {
            ticker: "GOOGL".to_string(),
            price: 101.5,
            currency: "USD".to_string(),
            change: 1.5,
            change_percent: 1.5,
            day_high: 103.0,
            day_low: 99.0,
            market_cap: "1.84T".to_string(),
            historical: vec![
                PricePoint::new("09:00", 100.0),
                PricePoint::new("09:30", 103.0),
                PricePoint::new("10:00", 99.0),
            ],
        }
    }

    #[test]
    fn test_covers_intraday_range() {
        assert!(snapshot().covers_intraday_range());
    }

    #[test]
    fn test_range_violation_detected() {
        let mut snap = snapshot();
        snap.day_high = 102.0; // below the 103.0 tick
        assert!(!snap.covers_intraday_range());

        let mut snap = snapshot();
        snap.price = 98.0; // close below day_low
        assert!(!snap.covers_intraday_range());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json.get("changePercent").is_some());
        assert!(json.get("dayHigh").is_some());
        assert!(json.get("marketCap").is_some());
        assert!(json.get("change_percent").is_none());
    }

    #[test]
    fn test_direction() {
        assert!(snapshot().is_up());
        let mut snap = snapshot();
        snap.change = -0.3;
        assert!(!snap.is_up());
    }
}
