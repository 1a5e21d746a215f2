// AI module for the CPU paddle

mod controller;
mod damped_tracker;
mod perfect_tracker;

pub use controller::CpuController;
pub use damped_tracker::DampedTracker;
pub use perfect_tracker::PerfectTracker;

use crate::config::AIConfig;
use crate::game::{Events, MatchState, Mode, Phase};

/// Create the controller for a mode, or `None` when no CPU plays
pub fn controller_for(mode: Mode, config: &AIConfig) -> Option<Box<dyn CpuController>> {
    match mode {
        Mode::Easy => Some(Box::new(DampedTracker::new("Easy", config.easy_damping))),
        Mode::Medium => Some(Box::new(DampedTracker::new("Medium", config.medium_damping))),
        Mode::Hard => Some(Box::new(DampedTracker::new("Hard", config.hard_damping))),
        Mode::Impossible => Some(Box::new(PerfectTracker::new())),
        Mode::NotStarted | Mode::Multiplayer => None,
    }
}

/// Let the controller move the CPU paddle for one tick.
///
/// Inert unless a single-player match is in play.
pub fn step_cpu(state: &mut MatchState, controller: &mut dyn CpuController, events: &mut Events) {
    if !state.mode.is_single_player() || state.phase != Phase::InPlay {
        return;
    }

    let field = state.field;
    controller.steer(&mut state.cpu, &state.ball, &field, events);
}
