use {
    crate::domain::{Currency, halving::SATS_PER_BTC},
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

/// Latest BTC price in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    pub currency: Currency,
    pub price: f64,
}

impl SpotPrice {
    /// Whole satoshis one unit of the currency buys. `None` until a positive price is known.
    pub fn sats_per_unit(&self) -> Option<u64> {
        if self.price > 0.0 && self.price.is_finite() {
            Some((SATS_PER_BTC as f64 / self.price).floor() as u64)
        } else {
            None
        }
    }
}

/// Price history for one currency, ordered by timestamp.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    pub currency: Currency,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(currency: Currency, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp_ms);
        Self { currency, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.price);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Percentage move from the first to the last point.
    pub fn change_pct(&self) -> Option<f64> {
        let first = self.points.first()?.price;
        let last = self.points.last()?.price;
        if first > f64::EPSILON {
            Some((last - first) / first * 100.0)
        } else {
            None
        }
    }
}
