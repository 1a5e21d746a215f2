pub mod body;
pub mod engine;
pub mod entities;
pub mod events;
pub mod field;
pub mod rules;
pub mod state;

pub use body::{Body, BodyKind, BodySnapshot, Hooks, Role};
pub use engine::{reset_game, reset_play, resolve_collisions, step_ball};
pub use entities::{Ball, BallLimits, Paddle};
pub use events::{BodyChange, Cue, Events, GameEvent, Mutation};
pub use field::Field;
pub use rules::{check_score, pause, resume, select_mode, Mode, Phase};
pub use state::MatchState;
