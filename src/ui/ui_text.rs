use std::sync::LazyLock;

// Glyphs present in egui's bundled emoji font
pub const ICON_SUN: &str = "☀";
pub const ICON_MOON: &str = "🌙";
pub const ICON_CHART: &str = "📈";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_CLOCK: &str = "🕐";
pub const ICON_BITCOIN: &str = "₿";

pub struct UiText {
    pub app_title: String,
    pub icon_bitcoin: String,

    // --- Header ---
    pub hover_theme_light: String,
    pub hover_theme_dark: String,
    pub icon_theme_light: String,
    pub icon_theme_dark: String,
    pub button_refresh: String,
    pub hover_refresh: String,
    pub button_chart: String,
    pub hover_chart: String,

    // --- Display rows ---
    pub label_blocks: String,
    pub label_select_currency: String,
    pub label_price_prefix: String,
    pub label_sats_prefix: String,
    pub label_local_time: String,
    pub label_halving_progress: String,
    pub label_halving_estimate: String,
    pub label_halving_height: String,
    pub label_epoch: String,
    pub label_subsidy: String,
    pub label_in: String,
    pub label_unknown: String,

    // --- Chart ---
    pub chart_title_prefix: String,
    pub chart_title_suffix: String,
    pub chart_waiting: String,
    pub chart_change: String,
    pub plot_x_axis: String,

    // --- Loading screen ---
    pub ls_title: String,
    pub ls_fetching: String,

    // --- Status bar ---
    pub sp_last_update: String,
    pub sp_never: String,
    pub sp_updated_height: String,
    pub sp_updated_price: String,
    pub sp_updated_history: String,
    pub sp_shortcuts: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Bitcoin Clock".to_string(),
    icon_bitcoin: ICON_BITCOIN.to_string(),

    hover_theme_light: "Switch to light theme (T)".to_string(),
    hover_theme_dark: "Switch to dark theme (T)".to_string(),
    icon_theme_light: ICON_SUN.to_string(),
    icon_theme_dark: ICON_MOON.to_string(),
    button_refresh: ICON_REFRESH.to_string(),
    hover_refresh: "Refresh block height and price now (R)".to_string(),
    button_chart: ICON_CHART.to_string(),
    hover_chart: "Show / hide the price chart (C)".to_string(),

    label_blocks: "Blocks".to_string(),
    label_select_currency: "Select Currency:".to_string(),
    label_price_prefix: "BTC/".to_string(),
    label_sats_prefix: "Sats per 1".to_string(),
    label_local_time: ICON_CLOCK.to_string() + " Local Time:",
    label_halving_progress: "Next Halving Progress:".to_string(),
    label_halving_estimate: "Next Halving (Estimate):".to_string(),
    label_halving_height: "Halving Block:".to_string(),
    label_epoch: "Epoch:".to_string(),
    label_subsidy: "Block Subsidy:".to_string(),
    label_in: "in".to_string(),
    label_unknown: "-".to_string(),

    chart_title_prefix: "Bitcoin Price History (Last".to_string(),
    chart_title_suffix: "days)".to_string(),
    chart_waiting: "Waiting for price history...".to_string(),
    chart_change: "Change".to_string(),
    plot_x_axis: "Date".to_string(),

    ls_title: "Bitcoin Clock".to_string(),
    ls_fetching: "Fetching block height and prices...".to_string(),

    sp_last_update: "Last update:".to_string(),
    sp_never: "never".to_string(),
    sp_updated_height: "Block height:".to_string(),
    sp_updated_price: "Price:".to_string(),
    sp_updated_history: "History:".to_string(),
    sp_shortcuts: "T theme | C chart | R refresh | 1/2/3 USD/EUR/GBP".to_string(),
});
