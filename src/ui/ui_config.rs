use {
    eframe::egui::{Color32, Frame, Margin, Stroke, Visuals},
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

pub use crate::ui::ui_text::UI_TEXT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn colors(self) -> &'static UiColors {
        match self {
            Self::Dark => &UI_CONFIG.dark,
            Self::Light => &UI_CONFIG.light,
        }
    }
}

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub value: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub progress_track: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
    pub big_value_size: f32,
    pub value_size: f32,
    pub max_content_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        label: Color32::GRAY,
        value: Color32::from_rgb(235, 235, 235),
        heading: Color32::from_rgb(255, 153, 0),
        accent: Color32::from_rgb(255, 153, 0),
        central_panel: Color32::from_rgb(18, 18, 18),
        side_panel: Color32::from_rgb(28, 28, 28),
        progress_track: Color32::from_rgb(50, 50, 50),
    },
    light: UiColors {
        label: Color32::from_rgb(90, 90, 90),
        value: Color32::from_rgb(20, 20, 20),
        heading: Color32::from_rgb(51, 51, 51),
        accent: Color32::from_rgb(230, 126, 0),
        central_panel: Color32::from_rgb(245, 245, 245),
        side_panel: Color32::from_rgb(228, 228, 228),
        progress_track: Color32::from_rgb(210, 210, 210),
    },
    big_value_size: 56.0,
    value_size: 18.0,
    max_content_width: 720.0,
};

impl UiColors {
    pub fn visuals(&self, theme: Theme) -> Visuals {
        let mut visuals = match theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };
        visuals.window_fill = self.central_panel;
        visuals.panel_fill = self.side_panel;
        visuals.widgets.noninteractive.fg_stroke.color = self.label;
        visuals.widgets.inactive.fg_stroke.color = self.label;
        visuals.widgets.hovered.fg_stroke.color = self.heading;
        visuals.widgets.active.fg_stroke.color = self.heading;
        visuals.selection.bg_fill = self.accent;
        visuals
    }

    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn light_and_dark_backgrounds_differ() {
        assert_ne!(Theme::Dark.colors().central_panel, Theme::Light.colors().central_panel);
        assert!(Theme::Dark.colors().visuals(Theme::Dark).dark_mode);
        assert!(!Theme::Light.colors().visuals(Theme::Light).dark_mode);
    }
}
