//! Price chart configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Price line (the orange of the bitcoin logo)
    pub line_color: Color32,
    pub line_width: f32,
    /// Chart height inside the central panel
    pub height: f32,
    /// Target number of date labels along the X axis
    pub x_axis_divisions: f64,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(255, 153, 0),
    line_width: 2.0,
    height: 260.0,
    x_axis_divisions: 6.0,
    plot_y_padding_pct: 0.05,

    color_up: Color32::from_rgb(0, 200, 120),
    color_down: Color32::from_rgb(230, 70, 70),
    color_text_subdued: Color32::GRAY,
};
