//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every completed fetch cycle of the worker.
    pub log_fetch_cycle: bool,

    /// Log each event the UI drains from the worker.
    pub log_events: bool,

    /// Commands sent from the UI to the worker (currency switch, refresh).
    pub log_commands: bool,

    /// Preferences restored from / written to eframe storage.
    pub log_preferences: bool,

    /// Warn when a frame takes longer than `slow_frame_micros`.
    pub log_performance: bool,

    pub slow_frame_micros: u128,
}

pub const DF: LogFlags = LogFlags {
    log_fetch_cycle: true,
    log_commands: true,

    log_events: false,
    log_preferences: false,
    log_performance: false,

    slow_frame_micros: 50_000,
};
