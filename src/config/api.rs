/// Public endpoints polled by the fetch worker.
pub struct Endpoints {
    /// Plain-text current block count.
    pub block_height: &'static str,
    /// JSON `bpi.<CODE>.rate_float` spot prices.
    pub spot_price: &'static str,
    /// JSON `prices: [[ms, price], ..]` market chart.
    pub price_history: &'static str,
}

pub struct ClientDefaults {
    pub user_agent: &'static str,
    /// Value of the `interval` query parameter sent with history requests.
    pub history_interval: &'static str,
}

pub struct ApiConfig {
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    endpoints: Endpoints {
        block_height: "https://blockchain.info/q/getblockcount",
        spot_price: "https://api.coindesk.com/v1/bpi/currentprice.json",
        price_history: "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart",
    },
    client: ClientDefaults {
        user_agent: concat!("block-clock/", env!("CARGO_PKG_VERSION")),
        history_interval: "daily",
    },
};

/// Endpoint URLs in effect for this run (defaults, possibly overridden on the command line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub block_height_url: String,
    pub spot_price_url: String,
    pub price_history_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            block_height_url: API.endpoints.block_height.to_owned(),
            spot_price_url: API.endpoints.spot_price.to_owned(),
            price_history_url: API.endpoints.price_history.to_owned(),
        }
    }
}
