// Perfect tracker for survival (Impossible) mode

use super::CpuController;
use crate::game::{Ball, Events, Field, Paddle};

/// Snaps the CPU paddle onto the ball's row every tick
///
/// - No velocity model and no lag
/// - Tracks regardless of the ball's direction
/// - Cannot be beaten; the player's goal is to survive as long as possible
pub struct PerfectTracker {
    name: String,
}

impl PerfectTracker {
    pub fn new() -> Self {
        Self {
            name: "Survival".to_string(),
        }
    }
}

impl Default for PerfectTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuController for PerfectTracker {
    fn steer(&mut self, cpu: &mut Paddle, ball: &Ball, field: &Field, events: &mut Events) {
        cpu.move_to(ball.body.y(), field, events);
    }

    fn reset(&mut self) {
        // Stateless
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Hooks, Role};

    #[test]
    fn test_snaps_to_ball_in_either_direction() {
        let mut tracker = PerfectTracker::new();
        let field = Field::default();
        let mut cpu = Paddle::new(Role::Cpu, 5, 0.0);
        cpu.body.set_position(78.0, 17.0, Hooks::Silent);
        let mut ball = Ball::new();
        ball.body.set_position(30.0, 11.5, Hooks::Silent);
        ball.body.set_velocity(-2.0, 1.0, Hooks::Silent);

        tracker.steer(&mut cpu, &ball, &field, &mut Events::new());

        assert_eq!(cpu.body.y(), 11.5);
    }

    #[test]
    fn test_snap_is_still_clamped() {
        let mut tracker = PerfectTracker::new();
        let field = Field::default();
        let mut cpu = Paddle::new(Role::Cpu, 5, 0.0);
        let mut ball = Ball::new();
        ball.body.set_position(30.0, 33.9, Hooks::Silent);

        tracker.steer(&mut cpu, &ball, &field, &mut Events::new());

        assert_eq!(cpu.body.y(), 32.0);
    }
}
