// src/app/state.rs

use crate::utils::AppInstant;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) started: AppInstant,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            started: AppInstant::now(),
        }
    }
}
