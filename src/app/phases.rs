// One tick per egui frame; each phase hands back the phase for the next frame.

use eframe::egui::Context;

use crate::app::App;
use crate::app::state::{AppState, BootstrapState, RunningState};

pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}

impl PhaseView for BootstrapState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        match app.finalize_bootstrap_if_ready() {
            Some(next) => next,
            None => {
                app.render_bootstrap_phase(ctx, self);
                AppState::Bootstrapping(self.clone())
            }
        }
    }
}

impl PhaseView for RunningState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_running_state(ctx);
        AppState::Running(RunningState)
    }
}
