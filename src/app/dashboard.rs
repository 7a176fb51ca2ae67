// src/app/dashboard.rs

use chrono::{DateTime, Local, Utc};

use crate::config::DF;
use crate::domain::{BlockHeight, Currency, HalvingEstimate, PriceSeries, SpotPrice};
use crate::engine::FetchEvent;
use crate::utils::{format_local_clock, local_zone_name};

/// When each value was last replaced by a successful fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct UpdateTimes {
    pub(crate) block_height: Option<DateTime<Utc>>,
    pub(crate) spot_price: Option<DateTime<Utc>>,
    pub(crate) history: Option<DateTime<Utc>>,
}

impl UpdateTimes {
    pub(crate) fn latest(&self) -> Option<DateTime<Utc>> {
        [self.block_height, self.spot_price, self.history].into_iter().flatten().max()
    }
}

/// Everything the dashboard displays. Owned by the UI thread and only changed by `apply`,
/// `set_currency` and `refresh_local_time`; a failed fetch leaves the last good values in place.
#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardState {
    pub(crate) currency: Currency,
    pub(crate) block_height: Option<BlockHeight>,
    pub(crate) halving: Option<HalvingEstimate>,
    pub(crate) spot_price: Option<SpotPrice>,
    pub(crate) history: Option<PriceSeries>,
    pub(crate) local_time: String,
    pub(crate) updated: UpdateTimes,
    pub(crate) cycles_completed: u64,
}

impl DashboardState {
    pub(crate) fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Default::default()
        }
    }

    pub(crate) fn apply(&mut self, event: FetchEvent, now: DateTime<Utc>) {
        if DF.log_events {
            log::info!("Dashboard event: {:?}", event);
        }
        match event {
            FetchEvent::BlockHeight(height) => {
                if let Some(previous) = self.block_height {
                    if height < previous {
                        log::warn!("Block height went backwards: {} -> {}", previous, height);
                    }
                }
                self.block_height = Some(height);
                self.halving = Some(HalvingEstimate::at(height, now));
                self.updated.block_height = Some(now);
            }
            FetchEvent::SpotPrice(spot) => {
                if spot.currency == self.currency {
                    self.spot_price = Some(spot);
                    self.updated.spot_price = Some(now);
                } else {
                    log::info!("Ignoring stale {} price, showing {}", spot.currency, self.currency);
                }
            }
            FetchEvent::PriceHistory(series) => {
                if series.currency == self.currency {
                    self.history = Some(series);
                    self.updated.history = Some(now);
                } else {
                    log::info!("Ignoring stale {} history, showing {}", series.currency, self.currency);
                }
            }
            // Already logged by the worker; the last good values stay on screen.
            FetchEvent::FetchFailed { .. } => {}
            FetchEvent::CycleComplete => self.cycles_completed += 1,
        }
    }

    /// Returns true when the currency actually changed. Price data in the old currency is dropped.
    pub(crate) fn set_currency(&mut self, currency: Currency) -> bool {
        if currency == self.currency {
            return false;
        }
        self.currency = currency;
        self.spot_price = None;
        self.history = None;
        self.updated.spot_price = None;
        self.updated.history = None;
        true
    }

    pub(crate) fn refresh_local_time(&mut self, now: DateTime<Local>) {
        self.local_time = format_local_clock(&now, local_zone_name());
    }

    pub(crate) fn sats_per_unit(&self) -> Option<u64> {
        self.spot_price.as_ref().and_then(SpotPrice::sats_per_unit)
    }

    pub(crate) fn has_completed_cycle(&self) -> bool {
        self.cycles_completed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use crate::engine::FetchSource;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn usd(price: f64) -> FetchEvent {
        FetchEvent::SpotPrice(SpotPrice { currency: Currency::Usd, price })
    }

    #[test]
    fn block_height_recomputes_the_halving_estimate() {
        let mut state = DashboardState::new(Currency::Usd);
        state.apply(FetchEvent::BlockHeight(BlockHeight(700_000)), now());

        let halving = state.halving.unwrap();
        assert_eq!(halving.blocks_remaining, 140_000);
        assert_eq!(halving.estimated_time, now() + TimeDelta::seconds(84_000_000));

        let later = now() + TimeDelta::minutes(10);
        state.apply(FetchEvent::BlockHeight(BlockHeight(700_001)), later);
        let halving = state.halving.unwrap();
        assert_eq!(halving.blocks_remaining, 139_999);
        assert_eq!(halving.estimated_time, later + TimeDelta::seconds(139_999 * 600));
        assert_eq!(state.updated.block_height, Some(later));
    }

    #[test]
    fn failures_keep_the_last_known_values() {
        let mut state = DashboardState::new(Currency::Usd);
        state.apply(FetchEvent::BlockHeight(BlockHeight(840_000)), now());
        state.apply(usd(64_000.0), now());
        state.apply(
            FetchEvent::FetchFailed {
                source: FetchSource::SpotPrice,
                message: "HTTP 503".into(),
            },
            now() + TimeDelta::minutes(1),
        );

        assert_eq!(state.block_height, Some(BlockHeight(840_000)));
        assert_eq!(state.spot_price.map(|s| s.price), Some(64_000.0));
        assert_eq!(state.updated.spot_price, Some(now()));
        assert_eq!(state.updated.latest(), Some(now()));
    }

    #[test]
    fn each_value_carries_its_own_update_time() {
        let mut state = DashboardState::new(Currency::Usd);
        assert_eq!(state.updated.latest(), None);

        let t1 = now();
        let t2 = now() + TimeDelta::seconds(1);
        let t3 = now() + TimeDelta::seconds(2);
        state.apply(FetchEvent::BlockHeight(BlockHeight(840_000)), t1);
        state.apply(usd(64_000.0), t2);
        state.apply(
            FetchEvent::PriceHistory(PriceSeries::new(
                Currency::Usd,
                vec![PricePoint { timestamp_ms: 0, price: 60_000.0 }],
            )),
            t3,
        );

        assert_eq!(
            state.updated,
            UpdateTimes {
                block_height: Some(t1),
                spot_price: Some(t2),
                history: Some(t3),
            }
        );
        assert_eq!(state.updated.latest(), Some(t3));

        // ignored events leave their timestamps alone
        state.apply(FetchEvent::SpotPrice(SpotPrice { currency: Currency::Eur, price: 1.0 }), t3);
        assert_eq!(state.updated.spot_price, Some(t2));

        state.set_currency(Currency::Eur);
        assert_eq!(state.updated.spot_price, None);
        assert_eq!(state.updated.history, None);
        assert_eq!(state.updated.block_height, Some(t1));
    }

    #[test]
    fn prices_in_another_currency_are_ignored() {
        let mut state = DashboardState::new(Currency::Eur);
        state.apply(usd(64_000.0), now());
        state.apply(
            FetchEvent::PriceHistory(PriceSeries::new(
                Currency::Usd,
                vec![PricePoint { timestamp_ms: 0, price: 1.0 }],
            )),
            now(),
        );
        assert_eq!(state.spot_price, None);
        assert_eq!(state.history, None);
    }

    #[test]
    fn switching_currency_drops_old_prices_but_keeps_the_chain() {
        let mut state = DashboardState::new(Currency::Usd);
        state.apply(FetchEvent::BlockHeight(BlockHeight(1)), now());
        state.apply(usd(50_000.0), now());
        assert_eq!(state.sats_per_unit(), Some(2_000));

        assert!(state.set_currency(Currency::Gbp));
        assert!(!state.set_currency(Currency::Gbp));
        assert_eq!(state.spot_price, None);
        assert_eq!(state.sats_per_unit(), None);
        assert_eq!(state.block_height, Some(BlockHeight(1)));
    }

    #[test]
    fn cycle_completion_is_counted() {
        let mut state = DashboardState::new(Currency::Usd);
        assert!(!state.has_completed_cycle());
        state.apply(FetchEvent::CycleComplete, now());
        assert!(state.has_completed_cycle());
    }

    #[test]
    fn local_time_is_formatted_on_refresh() {
        let mut state = DashboardState::new(Currency::Usd);
        let at = Local.with_ymd_and_hms(2024, 6, 1, 21, 30, 5).unwrap();
        state.refresh_local_time(at);
        assert!(state.local_time.starts_with("09:30:05 PM ("));
        assert!(state.local_time.ends_with(')'));
    }
}
