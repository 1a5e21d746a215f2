// Presentation and input boundary between the game loop and a front-end
//
// The session only ever talks to a `Port`. The terminal front-end in `ui`
// is one implementation; tests drive the loop with scripted ones.

use std::io;

use crate::game::{BodySnapshot, Cue, MatchState, Mode, Phase, Role};

/// Steering requested for one paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    None,
}

/// Whether the game window has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Focused,
    Unfocused,
    /// The front-end cannot tell; treated like lost focus
    Unavailable,
}

/// Which screen the front-end should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    /// Banner for the mode just picked, before the first serve
    ModeSelected(Mode),
    Match,
    Winner(Phase),
}

/// Everything a front-end needs besides body positions to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub screen: Screen,
    pub mode: Mode,
    pub phase: Phase,
    pub player1_score: u32,
    pub opponent_score: u32,
    pub winning_score: u32,
    /// Length of the last survival run, shown until the next one starts
    pub last_survival: Option<u32>,
}

impl Hud {
    pub fn from_state(state: &MatchState, last_survival: Option<u32>) -> Self {
        let screen = if state.mode == Mode::NotStarted {
            Screen::Title
        } else if state.phase.is_terminal() {
            Screen::Winner(state.phase)
        } else {
            Screen::Match
        };

        Self {
            screen,
            mode: state.mode,
            phase: state.phase,
            player1_score: state.player1.score,
            opponent_score: state.opponent().score,
            winning_score: state.winning_score,
            last_survival,
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.screen == Screen::Match && self.phase == Phase::Paused
    }
}

pub trait Port {
    /// Collect the input that arrived since the previous frame
    fn begin_frame(&mut self) -> io::Result<()>;

    /// Show a body at the snapshot's position
    fn render(&mut self, body: &BodySnapshot);

    /// Remove a body drawn from an earlier snapshot
    fn clear(&mut self, body: &BodySnapshot);

    /// Start a sound cue. Never blocks the loop.
    fn play_cue(&mut self, cue: Cue);

    fn poll_control(&self, role: Role) -> Control;

    fn poll_mode_select(&self) -> Option<Mode>;

    fn poll_pause(&self) -> bool;

    fn poll_resume(&self) -> bool;

    fn poll_exit(&self) -> bool;

    fn focus(&self) -> Focus;

    /// Draw the whole frame
    fn present(&mut self, hud: &Hud) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{select_mode, Events};

    #[test]
    fn test_hud_screen_follows_match() {
        let mut state = MatchState::default();
        let mut events = Events::new();
        assert_eq!(Hud::from_state(&state, None).screen, Screen::Title);

        select_mode(&mut state, Mode::Hard, &mut events);
        state.set_phase(Phase::Paused, &mut events);
        let hud = Hud::from_state(&state, None);
        assert_eq!(hud.screen, Screen::Match);
        assert!(hud.is_paused());

        state.cpu.score = 5;
        state.set_phase(Phase::CpuWon, &mut events);
        let hud = Hud::from_state(&state, None);
        assert_eq!(hud.screen, Screen::Winner(Phase::CpuWon));
        assert_eq!(hud.opponent_score, 5);
    }

    #[test]
    fn test_hud_opponent_score_in_multiplayer() {
        let mut state = MatchState::default();
        let mut events = Events::new();
        select_mode(&mut state, Mode::Multiplayer, &mut events);
        state.player2.score = 3;
        state.cpu.score = 9;
        assert_eq!(Hud::from_state(&state, None).opponent_score, 3);
    }
}
