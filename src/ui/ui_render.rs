use {
    crate::{
        app::App,
        domain::Currency,
        ui::{
            UI_CONFIG, UI_TEXT, UiColors,
            price_chart::render_price_chart,
            styles::UiStyleExt,
            ui_config::Theme,
            utils::{format_btc, format_fiat, format_sats, format_thousands},
        },
        utils::{format_duration, format_local_date_time, now_utc},
    },
    chrono::{DateTime, Utc},
    eframe::egui::{
        Align, Button, CentralPanel, ComboBox, Context, Layout, RichText, ScrollArea, TopBottomPanel,
        Ui,
    },
    strum::IntoEnumIterator,
};

impl App {
    pub(crate) fn render_header_panel(&mut self, ctx: &Context) {
        let colors = self.theme.colors();

        TopBottomPanel::top("header")
            .frame(colors.top_panel_frame())
            .min_height(36.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(format!("{} {}", UI_TEXT.icon_bitcoin, UI_TEXT.app_title))
                            .strong()
                            .color(colors.accent),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let (icon, hover) = match self.theme {
                            Theme::Dark => (&UI_TEXT.icon_theme_light, &UI_TEXT.hover_theme_light),
                            Theme::Light => (&UI_TEXT.icon_theme_dark, &UI_TEXT.hover_theme_dark),
                        };
                        if ui.add(Button::new(RichText::new(icon).size(20.0))).on_hover_text(hover.as_str()).clicked() {
                            self.toggle_theme();
                        }
                        if ui
                            .add(Button::new(RichText::new(&UI_TEXT.button_chart).size(20.0)).selected(self.show_chart))
                            .on_hover_text(UI_TEXT.hover_chart.as_str())
                            .clicked()
                        {
                            self.toggle_chart();
                        }
                        if ui
                            .add(Button::new(RichText::new(&UI_TEXT.button_refresh).size(20.0)))
                            .on_hover_text(UI_TEXT.hover_refresh.as_str())
                            .clicked()
                        {
                            self.refresh_now();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let colors = self.theme.colors();

        TopBottomPanel::bottom("status_panel")
            .frame(colors.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let updated = self.dashboard.updated;
                    let when = |at: Option<DateTime<Utc>>| match at {
                        Some(at) => format_local_date_time(at),
                        None => UI_TEXT.sp_never.clone(),
                    };
                    let breakdown = format!(
                        "{} {}\n{} {}\n{} {}",
                        UI_TEXT.sp_updated_height,
                        when(updated.block_height),
                        UI_TEXT.sp_updated_price,
                        when(updated.spot_price),
                        UI_TEXT.sp_updated_history,
                        when(updated.history),
                    );
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.sp_last_update, when(updated.latest())))
                            .small()
                            .color(colors.label),
                    )
                    .on_hover_text(breakdown);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(&UI_TEXT.sp_shortcuts, colors);
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let colors = self.theme.colors();

        CentralPanel::default()
            .frame(colors.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.max_content_width);
                            self.render_display(ui, colors);
                        });
                    });
            });
    }

    fn render_display(&mut self, ui: &mut Ui, colors: &UiColors) {
        let height = match self.dashboard.block_height {
            Some(h) => format_thousands(h.0),
            None => UI_TEXT.label_unknown.clone(),
        };
        ui.big_value(&height, &UI_TEXT.label_blocks, colors);
        ui.add_space(12.0);

        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            self.render_currency_selector(ui, colors);
            self.render_price_rows(ui, colors);
            ui.display_row(&UI_TEXT.label_local_time, &self.dashboard.local_time, colors);
            ui.add_space(8.0);
            self.render_halving_rows(ui, colors);

            if self.show_chart {
                ui.add_space(16.0);
                ui.separator();
                render_price_chart(
                    ui,
                    self.dashboard.history.as_ref(),
                    self.currency,
                    self.history_days,
                    colors,
                );
            }
        });
    }

    fn render_currency_selector(&mut self, ui: &mut Ui, colors: &UiColors) {
        let mut selected = self.currency;
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.label_select_currency)
                    .size(UI_CONFIG.value_size)
                    .color(colors.label),
            );
            ComboBox::from_id_salt("currency_select")
                .selected_text(selected.to_string())
                .show_ui(ui, |ui| {
                    for currency in Currency::iter() {
                        ui.selectable_value(&mut selected, currency, currency.to_string());
                    }
                });
        });
        if selected != self.currency {
            self.select_currency(selected);
        }
    }

    fn render_price_rows(&self, ui: &mut Ui, colors: &UiColors) {
        let currency = self.currency;
        let price = match self.dashboard.spot_price {
            Some(spot) => format_fiat(spot.price, currency),
            None => UI_TEXT.label_unknown.clone(),
        };
        ui.display_row(
            &format!("{}{} Price:", UI_TEXT.label_price_prefix, currency),
            &price,
            colors,
        );
        ui.display_row(
            &format!("{} {}:", UI_TEXT.label_sats_prefix, currency),
            &format_sats(self.dashboard.sats_per_unit()),
            colors,
        );
    }

    fn render_halving_rows(&self, ui: &mut Ui, colors: &UiColors) {
        ui.label(
            RichText::new(&UI_TEXT.label_halving_progress)
                .size(UI_CONFIG.value_size)
                .color(colors.label),
        );
        let progress = self.dashboard.halving.map(|h| h.progress_pct).unwrap_or(0.0);
        ui.halving_bar(progress, colors);
        ui.add_space(8.0);

        let Some(halving) = self.dashboard.halving else {
            ui.display_row(&UI_TEXT.label_halving_estimate, &UI_TEXT.label_unknown, colors);
            return;
        };
        let remaining = format_duration(halving.time_remaining(now_utc()));
        ui.display_row(
            &UI_TEXT.label_halving_estimate,
            &format!(
                "{} ({} {})",
                format_local_date_time(halving.estimated_time),
                UI_TEXT.label_in,
                remaining
            ),
            colors,
        );
        ui.display_row(
            &UI_TEXT.label_halving_height,
            &format!(
                "{} ({} {})",
                format_thousands(halving.next_halving_height.0),
                format_thousands(halving.blocks_remaining),
                UI_TEXT.label_blocks.to_lowercase()
            ),
            colors,
        );
        ui.horizontal(|ui| {
            ui.display_row(&UI_TEXT.label_epoch, &halving.epoch.to_string(), colors);
            ui.add_space(16.0);
            ui.display_row(
                &UI_TEXT.label_subsidy,
                &format_btc(halving.height.subsidy_sats()),
                colors,
            );
        });
    }
}
