use eframe::egui::Context;

use crate::app::{App, state::AppState};

/// Per-phase frame handler. Each `tick` renders one frame and returns the phase for the next.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
