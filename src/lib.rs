#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{MarketDataProvider, PublicApiProvider};
pub use domain::{BlockHeight, Currency, HalvingEstimate};
pub use engine::{FetchCommand, FetchEvent, FetchHandle, spawn_fetch_worker};

use std::time::Duration;

// CLI argument parsing
use clap::Parser;

use crate::config::{ApiSettings, CLOCK};
use crate::engine::PollSettings;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Quote currency (USD, EUR or GBP). Overrides the saved preference
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Seconds between block height and price refreshes
    #[arg(long, default_value_t = CLOCK.refresh_interval.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_secs: u64,

    /// Days of price history in the chart
    #[arg(long, default_value_t = CLOCK.history_days, value_parser = clap::value_parser!(u32).range(1..=CLOCK.max_history_days as i64))]
    pub history_days: u32,

    /// Override the plain-text block count endpoint
    #[arg(long)]
    pub block_height_url: Option<String>,

    /// Override the spot price endpoint
    #[arg(long)]
    pub spot_price_url: Option<String>,

    /// Override the market chart endpoint
    #[arg(long)]
    pub history_url: Option<String>,
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        let defaults = ApiSettings::default();
        ApiSettings {
            block_height_url: self.block_height_url.clone().unwrap_or(defaults.block_height_url),
            spot_price_url: self.spot_price_url.clone().unwrap_or(defaults.spot_price_url),
            price_history_url: self.history_url.clone().unwrap_or(defaults.price_history_url),
        }
    }

    pub fn poll_settings(&self, currency: Currency) -> PollSettings {
        PollSettings {
            currency,
            refresh_interval: Duration::from_secs(self.refresh_secs),
            history_days: self.history_days,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
