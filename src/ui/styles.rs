use {
    crate::ui::{UI_CONFIG, UiColors, utils::format_progress},
    eframe::egui::{
        Align2, Color32, CornerRadius, FontId, Rect, Response, RichText, Sense, Stroke, StrokeKind,
        Ui, Vec2, WidgetInfo, WidgetType, vec2,
    },
};

const BAR_HEIGHT: f32 = 24.0;

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors);

    /// `Label: value` on one line.
    fn display_row(&mut self, label: &str, value: &str, colors: &UiColors);

    /// Large headline number with a small caption underneath.
    fn big_value(&mut self, value: &str, caption: &str, colors: &UiColors);

    /// Full-width progress bar with the percentage printed on top.
    fn halving_bar(&mut self, pct: f64, colors: &UiColors) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors) {
        self.label(RichText::new(text).small().color(colors.label));
    }

    fn display_row(&mut self, label: &str, value: &str, colors: &UiColors) {
        self.horizontal(|ui| {
            ui.label(RichText::new(label).size(UI_CONFIG.value_size).color(colors.label));
            ui.label(
                RichText::new(value)
                    .size(UI_CONFIG.value_size)
                    .strong()
                    .color(colors.value),
            );
        });
    }

    fn big_value(&mut self, value: &str, caption: &str, colors: &UiColors) {
        self.vertical_centered(|ui| {
            ui.label(
                RichText::new(value)
                    .size(UI_CONFIG.big_value_size)
                    .strong()
                    .monospace()
                    .color(colors.accent),
            );
            ui.label(RichText::new(caption).size(UI_CONFIG.value_size).color(colors.label));
        });
    }

    fn halving_bar(&mut self, pct: f64, colors: &UiColors) -> Response {
        let fraction = (pct / 100.0).clamp(0.0, 1.0) as f32;
        let text = format_progress(pct);
        let desired_size = vec2(self.available_width(), BAR_HEIGHT);
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::hover());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::ProgressIndicator, true, &text));

        if self.is_rect_visible(rect) {
            let rounding = CornerRadius::same(4);
            let painter = self.painter();
            painter.rect(rect, rounding, colors.progress_track, Stroke::NONE, StrokeKind::Inside);
            if fraction > 0.0 {
                let filled = Rect::from_min_size(rect.min, Vec2::new(rect.width() * fraction, rect.height()));
                painter.rect(filled, rounding, colors.accent, Stroke::NONE, StrokeKind::Inside);
            }
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(14.0),
                if fraction > 0.5 { Color32::BLACK } else { colors.value },
            );
        }
        response
    }
}
