use std::time::Duration;

pub struct ClockConfig {
    /// Period of the block height / spot price refetch.
    pub refresh_interval: Duration,
    /// Period of the local time display update.
    pub clock_tick: Duration,
    /// Window of the price history chart.
    pub history_days: u32,
    pub max_history_days: u32,
}

pub const CLOCK: ClockConfig = ClockConfig {
    refresh_interval: Duration::from_secs(60),
    clock_tick: Duration::from_secs(1),
    history_days: 30,
    max_history_days: 365,
};
