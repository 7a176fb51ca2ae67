//! Halving epoch arithmetic.
//!
//! Everything here is a pure function of a block height (and, for the time
//! estimate, of the wall clock passed in by the caller).

use {
    chrono::{DateTime, TimeDelta, Utc},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr, time::Duration},
};

/// Blocks between two subsidy halvings.
pub const HALVING_INTERVAL: u64 = 210_000;

/// Assumed average block interval used for every time estimate.
pub const TARGET_BLOCK_SECS: u64 = 10 * 60;

pub const SATS_PER_BTC: u64 = 100_000_000;

const INITIAL_SUBSIDY_SATS: u64 = 50 * SATS_PER_BTC;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct BlockHeight(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(pub u64);

impl Epoch {
    /// First epoch in which `50 BTC >> epoch` has shifted down to zero.
    pub const FIRST_POST_SUBSIDY: Epoch = Epoch(33);

    pub fn subsidy_sats(self) -> u64 {
        if self < Self::FIRST_POST_SUBSIDY {
            INITIAL_SUBSIDY_SATS >> self.0
        } else {
            0
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BlockHeight {
    pub fn epoch(self) -> Epoch {
        Epoch(self.0 / HALVING_INTERVAL)
    }

    pub fn blocks_since_halving(self) -> u64 {
        self.0 % HALVING_INTERVAL
    }

    /// Always in `1..=HALVING_INTERVAL`. A halving block itself starts a full epoch.
    pub fn blocks_until_halving(self) -> u64 {
        HALVING_INTERVAL - self.blocks_since_halving()
    }

    pub fn next_halving_height(self) -> BlockHeight {
        BlockHeight(self.0.saturating_add(self.blocks_until_halving()))
    }

    /// Percentage through the current epoch, in `[0, 100)`.
    pub fn halving_progress(self) -> f64 {
        (self.blocks_since_halving() as f64 / HALVING_INTERVAL as f64) * 100.0
    }

    pub fn time_until_halving(self) -> Duration {
        Duration::from_secs(self.blocks_until_halving() * TARGET_BLOCK_SECS)
    }

    pub fn estimated_halving_time(self, now: DateTime<Utc>) -> DateTime<Utc> {
        // blocks_until_halving is bounded by HALVING_INTERVAL so this never leaves i64 range
        let delta = TimeDelta::seconds((self.blocks_until_halving() * TARGET_BLOCK_SECS) as i64);
        now.checked_add_signed(delta)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn subsidy_sats(self) -> u64 {
        self.epoch().subsidy_sats()
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockHeight {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(BlockHeight)
    }
}

/// Snapshot of everything the dashboard shows about the next halving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalvingEstimate {
    pub height: BlockHeight,
    pub epoch: Epoch,
    pub progress_pct: f64,
    pub blocks_remaining: u64,
    pub next_halving_height: BlockHeight,
    pub estimated_time: DateTime<Utc>,
}

impl HalvingEstimate {
    pub fn at(height: BlockHeight, now: DateTime<Utc>) -> Self {
        Self {
            height,
            epoch: height.epoch(),
            progress_pct: height.halving_progress(),
            blocks_remaining: height.blocks_until_halving(),
            next_halving_height: height.next_halving_height(),
            estimated_time: height.estimated_halving_time(now),
        }
    }

    /// Time left until the estimate, clamped at zero once it has passed.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.estimated_time - now).to_std().unwrap_or(Duration::ZERO)
    }
}
