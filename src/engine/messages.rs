use {
    crate::domain::{BlockHeight, Currency, PriceSeries, SpotPrice},
    std::time::Duration,
    strum_macros::Display,
};

/// UI -> worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCommand {
    /// Refetch live data and history in the new currency; restarts the refresh timer.
    SetCurrency(Currency),
    /// Fetch live data now without waiting for the timer.
    RefreshNow,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchSource {
    #[strum(to_string = "block height")]
    BlockHeight,
    #[strum(to_string = "spot price")]
    SpotPrice,
    #[strum(to_string = "price history")]
    PriceHistory,
}

/// Worker -> UI
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    BlockHeight(BlockHeight),
    SpotPrice(SpotPrice),
    PriceHistory(PriceSeries),
    FetchFailed { source: FetchSource, message: String },
    /// Sent after every live fetch (block height + spot price), whatever its outcome.
    CycleComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub currency: Currency,
    pub refresh_interval: Duration,
    pub history_days: u32,
}
