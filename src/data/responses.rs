//! Response body parsing for the three public endpoints.
//!
//! Kept free of any I/O so the formats can be exercised without a network.

use {
    crate::domain::{BlockHeight, Currency, PricePoint, PriceSeries, SpotPrice},
    anyhow::{Context, Result, bail},
    serde::Deserialize,
    std::collections::HashMap,
};

/// Longest slice of an unexpected body echoed back in an error message.
const BODY_PREVIEW_CHARS: usize = 64;

#[derive(Deserialize, Debug)]
struct CurrentPriceResponse {
    bpi: HashMap<String, BpiRate>,
}

#[derive(Deserialize, Debug)]
struct BpiRate {
    rate_float: f64,
}

#[derive(Deserialize, Debug)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

fn preview(body: &str) -> String {
    body.trim().chars().take(BODY_PREVIEW_CHARS).collect()
}

fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        bail!("price {} is not a finite non-negative number", price);
    }
    Ok(price)
}

/// Plain-text block count, e.g. `"874321"`.
pub fn parse_block_height(body: &str) -> Result<BlockHeight> {
    body.parse::<BlockHeight>()
        .with_context(|| format!("invalid block height body {:?}", preview(body)))
}

/// `{"bpi": {"USD": {"rate_float": 94123.45, ..}, ..}, ..}`
pub fn parse_spot_price(body: &str, currency: Currency) -> Result<SpotPrice> {
    let response: CurrentPriceResponse =
        serde_json::from_str(body).context("malformed current price response")?;
    let rate = response
        .bpi
        .get(currency.code())
        .with_context(|| format!("current price response has no {} rate", currency))?;
    let price = validate_price(rate.rate_float)
        .with_context(|| format!("bad {} rate", currency))?;
    Ok(SpotPrice { currency, price })
}

/// `{"prices": [[1717200000000, 67521.2], ..], ..}`. Points come back sorted by time.
pub fn parse_price_history(body: &str, currency: Currency) -> Result<PriceSeries> {
    let response: MarketChartResponse =
        serde_json::from_str(body).context("malformed market chart response")?;
    let points = response
        .prices
        .into_iter()
        .enumerate()
        .map(|(i, (timestamp, price))| {
            if !timestamp.is_finite() || timestamp < 0.0 {
                bail!("history entry {} has bad timestamp {}", i, timestamp);
            }
            let price =
                validate_price(price).with_context(|| format!("history entry {}", i))?;
            Ok(PricePoint {
                timestamp_ms: timestamp as i64,
                price,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PriceSeries::new(currency, points))
}
