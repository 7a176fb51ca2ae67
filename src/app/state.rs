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

/// Waiting for the first fetch cycle to finish, successfully or not.
#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) started_at: AppInstant,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            started_at: AppInstant::now(),
        }
    }
}
