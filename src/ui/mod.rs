mod price_chart;
mod screens;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use screens::render_bootstrap;

pub(crate) use ui_config::{Theme, UI_CONFIG, UI_TEXT, UiColors};
