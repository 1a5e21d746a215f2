// Match modes, phases and the transitions between them
//
// Every transition here is a no-op when requested from the wrong state:
// callers never need to check the phase first.

use tracing::info;

use super::body::Role;
use super::events::{Cue, Events};
use super::state::MatchState;

/// How the match is played. Chosen once per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    NotStarted,
    Multiplayer,
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Mode {
    pub fn display_name(&self) -> &str {
        match self {
            Mode::NotStarted => "Not Started",
            Mode::Multiplayer => "Multiplayer",
            Mode::Easy => "Easy",
            Mode::Medium => "Medium",
            Mode::Hard => "Hard",
            Mode::Impossible => "Survival",
        }
    }

    /// Scoreboard label of the right-hand side
    pub fn opponent_label(&self) -> &str {
        match self {
            Mode::Multiplayer => "P2",
            _ => "CPU",
        }
    }

    pub fn opponent_role(&self) -> Role {
        match self {
            Mode::Multiplayer => Role::Player2,
            _ => Role::Cpu,
        }
    }

    pub fn is_single_player(&self) -> bool {
        matches!(
            self,
            Mode::Easy | Mode::Medium | Mode::Hard | Mode::Impossible
        )
    }

    /// Every mode a player can pick from the title screen
    pub fn all() -> Vec<Mode> {
        vec![
            Mode::Multiplayer,
            Mode::Easy,
            Mode::Medium,
            Mode::Hard,
            Mode::Impossible,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Paused,
    InPlay,
    Player1Won,
    Player2Won,
    CpuWon,
}

impl Phase {
    /// A match is running (possibly paused)
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Paused | Phase::InPlay)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Player1Won | Phase::Player2Won | Phase::CpuWon)
    }
}

/// Pick the match mode. Only the first selection after `reset_game` counts.
pub fn select_mode(state: &mut MatchState, mode: Mode, events: &mut Events) -> bool {
    if state.mode != Mode::NotStarted || mode == Mode::NotStarted {
        return false;
    }

    info!(mode = mode.display_name(), "mode selected");
    state.mode = mode;
    apply_visibility(state);
    events.cue(Cue::ModeSelected(mode));
    true
}

/// Show only the paddles that take part in the current mode
pub fn apply_visibility(state: &mut MatchState) {
    let (player1, player2, cpu) = match state.mode {
        Mode::NotStarted => (false, false, false),
        Mode::Multiplayer => (true, true, false),
        _ => (true, false, true),
    };
    state.player1.body.set_visible(player1);
    state.player2.body.set_visible(player2);
    state.cpu.body.set_visible(cpu);
}

/// Paused → InPlay
pub fn resume(state: &mut MatchState, events: &mut Events) -> bool {
    if state.phase != Phase::Paused {
        return false;
    }
    state.set_phase(Phase::InPlay, events);
    true
}

/// InPlay → Paused
pub fn pause(state: &mut MatchState, events: &mut Events) -> bool {
    if state.phase != Phase::InPlay {
        return false;
    }
    state.set_phase(Phase::Paused, events);
    true
}

/// Move to a winner phase once either side reaches the winning score.
///
/// Survival (Impossible) matches never end from score.
pub fn check_score(state: &mut MatchState, events: &mut Events) -> Option<Phase> {
    if !state.phase.is_active() || !matches!(
        state.mode,
        Mode::Multiplayer | Mode::Easy | Mode::Medium | Mode::Hard
    ) {
        return None;
    }

    let winner = if state.player1.score >= state.winning_score {
        Phase::Player1Won
    } else if state.opponent().score >= state.winning_score {
        match state.mode {
            Mode::Multiplayer => Phase::Player2Won,
            _ => Phase::CpuWon,
        }
    } else {
        return None;
    };

    state.set_phase(winner, events);
    Some(winner)
}
