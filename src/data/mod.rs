mod provider;
mod responses;

pub use {
    provider::{MarketDataProvider, PublicApiProvider},
    responses::{parse_block_height, parse_price_history, parse_spot_price},
};
