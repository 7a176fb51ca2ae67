use {
    crate::{
        config::{API, ApiSettings},
        data::responses::{parse_block_height, parse_price_history, parse_spot_price},
        domain::{BlockHeight, Currency, PriceSeries, SpotPrice},
    },
    anyhow::{Context, Result},
    async_trait::async_trait,
};

/// Abstract interface for fetching chain and market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_block_height(&self) -> Result<BlockHeight>;

    async fn fetch_spot_price(&self, currency: Currency) -> Result<SpotPrice>;

    /// Daily prices for the last `days` days.
    async fn fetch_price_history(&self, currency: Currency, days: u32) -> Result<PriceSeries>;
}

/// Talks to the public blockchain.info / CoinDesk / CoinGecko endpoints.
/// One plain GET per call: no timeout, no retry.
pub struct PublicApiProvider {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl PublicApiProvider {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(API.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, settings })
    }

    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", url))?;
        response
            .text()
            .await
            .with_context(|| format!("failed to read body from {}", url))
    }
}

#[async_trait]
impl MarketDataProvider for PublicApiProvider {
    async fn fetch_block_height(&self) -> Result<BlockHeight> {
        let body = self.get_text(&self.settings.block_height_url, &[]).await?;
        parse_block_height(&body)
    }

    async fn fetch_spot_price(&self, currency: Currency) -> Result<SpotPrice> {
        let body = self.get_text(&self.settings.spot_price_url, &[]).await?;
        parse_spot_price(&body, currency)
    }

    async fn fetch_price_history(&self, currency: Currency, days: u32) -> Result<PriceSeries> {
        let days = days.to_string();
        let query = [
            ("vs_currency", currency.api_code()),
            ("days", days.as_str()),
            ("interval", API.client.history_interval),
        ];
        let body = self
            .get_text(&self.settings.price_history_url, &query)
            .await?;
        parse_price_history(&body, currency)
    }
}
