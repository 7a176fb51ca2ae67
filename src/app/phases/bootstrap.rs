// app/phases/bootstrap.rs

use eframe::egui::Context;

use crate::app::{
    App,
    phases::PhaseView,
    state::{AppState, BootstrapState, RunningState},
};

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        if app.dashboard.has_completed_cycle() {
            log::info!("First fetch cycle done after {:.1}s", self.started_at.elapsed().as_secs_f64());
            app.tick_running_state(ctx);
            return AppState::Running(RunningState);
        }
        app.render_bootstrap_screen(ctx, self);
        AppState::Bootstrapping(self.clone())
    }
}
