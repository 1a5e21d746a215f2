// Events produced during a tick and drained by the session afterwards

use super::body::{BodySnapshot, Role};
use super::rules::{Mode, Phase};

/// What kind of state a body change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Position,
    Velocity,
}

/// One observed body mutation. `before` is the state the presenter last saw,
/// `after` the state it should show next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyChange {
    pub mutation: Mutation,
    pub before: BodySnapshot,
    pub after: BodySnapshot,
}

/// Sound cues the presentation port may play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    PaddleHit,
    Theme,
    ModeSelected(Mode),
    Victory,
    Defeat,
}

impl Cue {
    /// Note table for the cue as (frequency Hz, duration ms) pairs
    pub fn notes(&self) -> &'static [(u32, u32)] {
        match self {
            Cue::PaddleHit => &[(300, 50)],
            Cue::Theme => &[
                (220, 300),
                (294, 300),
                (294, 300),
                (370, 300),
                (494, 300),
                (370, 300),
                (440, 800),
            ],
            Cue::ModeSelected(Mode::Multiplayer) => {
                &[(247, 300), (330, 300), (330, 300), (370, 300), (555, 300)]
            }
            Cue::ModeSelected(Mode::Easy) => &[
                (494, 300),
                (440, 300),
                (392, 200),
                (440, 200),
                (494, 200),
                (440, 800),
            ],
            Cue::ModeSelected(Mode::Medium) => &[(440, 300), (494, 300), (440, 300), (392, 800)],
            Cue::ModeSelected(Mode::Hard) => &[(392, 800), (392, 300), (370, 300), (278, 600)],
            Cue::ModeSelected(Mode::Impossible) => &[(494, 800), (440, 800), (392, 1600)],
            Cue::ModeSelected(Mode::NotStarted) => &[],
            Cue::Victory => &[
                (440, 300),
                (494, 300),
                (440, 300),
                (370, 300),
                (392, 300),
                (370, 300),
                (330, 800),
            ],
            Cue::Defeat => &[(392, 300), (370, 300), (247, 1600)],
        }
    }

    /// Total playing time of the cue in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.notes().iter().map(|(_, ms)| ms).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Body(BodyChange),
    Cue(Cue),
    /// A side won a point; `score` is its new total
    Scored { scorer: Role, score: u32 },
    /// Impossible-mode survival score that just ended
    SurvivalScore(u32),
    /// Paddles and ball were re-placed for a new serve
    RallyReset,
    PhaseChanged { from: Phase, to: Phase },
}

/// Ordered queue of events for one loop iteration
#[derive(Debug, Default)]
pub struct Events {
    queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn cue(&mut self, cue: Cue) {
        self.queue.push(GameEvent::Cue(cue));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.queue.iter()
    }

    /// Take every queued event in the order it was recorded
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.queue.drain(..)
    }

    pub fn cues(&self) -> impl Iterator<Item = Cue> + '_ {
        self.queue.iter().filter_map(|event| match event {
            GameEvent::Cue(cue) => Some(*cue),
            _ => None,
        })
    }

    pub fn contains_reset(&self) -> bool {
        self.queue
            .iter()
            .any(|event| matches!(event, GameEvent::RallyReset))
    }
}
