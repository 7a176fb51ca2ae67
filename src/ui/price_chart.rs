use eframe::egui::{RichText, Ui};
use egui_plot::{Axis, AxisHints, GridMark, HPlacement, Line, Plot, PlotPoints, VPlacement};

use crate::config::PLOT_CONFIG;
use crate::domain::{Currency, PriceSeries};
use crate::ui::UiColors;
use crate::ui::UI_TEXT;
use crate::ui::utils::{format_change_pct, format_fiat, format_fiat_compact};
use crate::utils::TimeUtils;

const MS_IN_D: f64 = TimeUtils::MS_IN_D as f64;

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one day
    (nice_step * mag).max(1.0)
}

/// X values are days since the Unix epoch so grid steps land on whole days.
fn to_plot_x(timestamp_ms: i64) -> f64 {
    timestamp_ms as f64 / MS_IN_D
}

fn create_date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| TimeUtils::epoch_ms_to_date_string((mark.value * MS_IN_D) as i64))
        .placement(VPlacement::Bottom)
}

fn create_price_axis(currency: Currency) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(currency.code())
        .formatter(move |mark, _range| format_fiat_compact(mark.value, currency))
        .placement(HPlacement::Right)
}

/// Chart header with the window's percentage change.
fn render_chart_title(ui: &mut Ui, series: Option<&PriceSeries>, days: u32, colors: &UiColors) {
    ui.horizontal(|ui| {
        ui.heading(
            RichText::new(format!(
                "{} {} {}",
                UI_TEXT.chart_title_prefix, days, UI_TEXT.chart_title_suffix
            ))
            .color(colors.heading),
        );
        if let Some(change) = series.and_then(PriceSeries::change_pct) {
            let color = if change >= 0.0 {
                PLOT_CONFIG.color_up
            } else {
                PLOT_CONFIG.color_down
            };
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.chart_change, format_change_pct(change)))
                    .color(color),
            );
        }
    });
}

pub(crate) fn render_price_chart(
    ui: &mut Ui,
    series: Option<&PriceSeries>,
    currency: Currency,
    days: u32,
    colors: &UiColors,
) {
    render_chart_title(ui, series, days, colors);

    let Some(series) = series.filter(|s| !s.is_empty()) else {
        ui.label(RichText::new(&UI_TEXT.chart_waiting).italics().color(PLOT_CONFIG.color_text_subdued));
        return;
    };

    let points: Vec<[f64; 2]> = series
        .points
        .iter()
        .map(|p| [to_plot_x(p.timestamp_ms), p.price])
        .collect();

    let (y_min, y_max) = series.price_range().unwrap_or((0.0, 0.0));
    let y_pad = ((y_max - y_min) * PLOT_CONFIG.plot_y_padding_pct).max(1.0);

    let legend = format!("BTC Price ({})", currency);
    let line = Line::new(legend.as_str(), PlotPoints::new(points))
        .color(PLOT_CONFIG.line_color)
        .width(PLOT_CONFIG.line_width);

    Plot::new("price_history")
        .height(PLOT_CONFIG.height)
        .custom_x_axes(vec![create_date_axis()])
        .custom_y_axes(vec![create_price_axis(currency)])
        .label_formatter(move |_name, value| {
            format!(
                "{}\n{}",
                TimeUtils::epoch_ms_to_date_string((value.x * MS_IN_D) as i64),
                format_fiat(value.y, currency)
            )
        })
        .x_grid_spacer(|input| {
            let (min, max) = input.bounds;
            let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_divisions);
            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .include_y(y_min - y_pad)
        .include_y(y_max + y_pad)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
