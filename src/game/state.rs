use tracing::info;

use super::body::{BodySnapshot, Hooks, Role};
use super::entities::{Ball, BallLimits, Paddle};
use super::events::{Events, GameEvent};
use super::field::Field;
use super::rules::{Mode, Phase};
use crate::config::Config;

/// Everything one match owns. Paddles and ball never point at each other;
/// the engine looks them up by role whenever it needs cross-entity data.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub mode: Mode,
    pub phase: Phase,
    pub field: Field,
    pub limits: BallLimits,
    pub winning_score: u32,
    pub player1: Paddle,
    pub player2: Paddle,
    pub cpu: Paddle,
    pub ball: Ball,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        let physics = &config.physics;
        let height = i32::from(physics.paddle_height);

        let mut state = Self {
            mode: Mode::NotStarted,
            phase: Phase::NotStarted,
            field: Field::from_config(&config.field),
            limits: BallLimits::from_config(physics),
            winning_score: physics.winning_score,
            player1: Paddle::new(Role::Player1, height, physics.paddle_speed),
            player2: Paddle::new(Role::Player2, height, physics.paddle_speed),
            cpu: Paddle::new(Role::Cpu, height, 0.0),
            ball: Ball::new(),
        };
        state.place_at_start();
        state
    }

    /// Park paddles on their columns and the ball at the centre, before any
    /// mode has been chosen
    fn place_at_start(&mut self) {
        let (cx, cy) = self.field.center();
        let left = self.field.left_column() as f32;
        let right = self.field.right_column() as f32;

        self.player1.body.set_position(left, cy as f32, Hooks::Silent);
        self.player2.body.set_position(right, cy as f32, Hooks::Silent);
        self.cpu.body.set_position(right, cy as f32, Hooks::Silent);
        self.ball.body.set_position(cx as f32, cy as f32, Hooks::Silent);
        super::rules::apply_visibility(self);
    }

    pub fn opponent_role(&self) -> Role {
        self.mode.opponent_role()
    }

    /// player2 in Multiplayer, the CPU paddle otherwise
    pub fn opponent(&self) -> &Paddle {
        match self.mode {
            Mode::Multiplayer => &self.player2,
            _ => &self.cpu,
        }
    }

    pub fn paddle_mut(&mut self, role: Role) -> Option<&mut Paddle> {
        match role {
            Role::Player1 => Some(&mut self.player1),
            Role::Player2 => Some(&mut self.player2),
            Role::Cpu => Some(&mut self.cpu),
            Role::Ball => None,
        }
    }

    /// Player 1, the current opponent and the ball, borrowed together
    pub(crate) fn sides_mut(&mut self) -> (&mut Paddle, &mut Paddle, &mut Ball) {
        let opponent = match self.mode {
            Mode::Multiplayer => &mut self.player2,
            _ => &mut self.cpu,
        };
        (&mut self.player1, opponent, &mut self.ball)
    }

    /// Current state of one body
    pub fn snapshot(&self, role: Role) -> BodySnapshot {
        match role {
            Role::Player1 => self.player1.body.snapshot(),
            Role::Player2 => self.player2.body.snapshot(),
            Role::Cpu => self.cpu.body.snapshot(),
            Role::Ball => self.ball.body.snapshot(),
        }
    }

    /// Snapshots of all four bodies, shown or not
    pub fn snapshots(&self) -> [BodySnapshot; 4] {
        [
            self.player1.body.snapshot(),
            self.player2.body.snapshot(),
            self.cpu.body.snapshot(),
            self.ball.body.snapshot(),
        ]
    }

    /// Snapshots of every body currently shown
    pub fn visible_bodies(&self) -> Vec<BodySnapshot> {
        self.snapshots()
            .into_iter()
            .filter(|snapshot| snapshot.visible)
            .collect()
    }

    pub fn set_phase(&mut self, phase: Phase, events: &mut Events) {
        if self.phase == phase {
            return;
        }
        info!(from = ?self.phase, to = ?phase, "phase change");
        events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
