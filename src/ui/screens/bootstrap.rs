use {
    crate::{
        app::BootstrapState,
        ui::{UI_TEXT, UiColors},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState, colors: &UiColors) {
    CentralPanel::default()
        .frame(colors.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading(
                    RichText::new(format!("{} {}", UI_TEXT.icon_bitcoin, UI_TEXT.ls_title))
                        .size(32.0)
                        .strong()
                        .color(colors.accent),
                );
                ui.add_space(20.0);
                ui.label(
                    RichText::new(&UI_TEXT.ls_fetching)
                        .italics()
                        .color(colors.label),
                );
                ui.add_space(20.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!("{}s", state.started_at.elapsed().as_secs()))
                        .small()
                        .color(colors.label),
                );
            });
        });
}
