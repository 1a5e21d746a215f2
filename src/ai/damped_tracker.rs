// Damped proportional tracker for the Easy/Medium/Hard tiers

use super::CpuController;
use crate::game::{Ball, Events, Field, Hooks, Paddle};

/// Distance to the ball is divided by this before it corrects the velocity
const GAIN_DIVISOR: f32 = 10.0;

/// Chases the ball with a damped proportional law.
///
/// There is no trajectory prediction: the paddle only reacts to where the
/// ball is now, and only while the ball travels toward it. Lower damping
/// bleeds off more of the correction each tick, so the paddle lags behind
/// fast rallies.
pub struct DampedTracker {
    name: String,
    // Velocity kept each tick; higher follows the ball more aggressively
    damping: f32,
}

impl DampedTracker {
    pub fn new(name: &str, damping: f32) -> Self {
        Self {
            name: name.to_string(),
            damping,
        }
    }
}

impl CpuController for DampedTracker {
    fn steer(&mut self, cpu: &mut Paddle, ball: &Ball, field: &Field, events: &mut Events) {
        // Hold position while the ball travels away
        if ball.body.vx() <= 0.0 {
            return;
        }

        let delta = cpu.body.y() - ball.body.y();
        let vy = (cpu.body.vy() - delta / GAIN_DIVISOR) * self.damping;
        cpu.body.set_vy(vy, Hooks::Fire(events));
        cpu.move_to(cpu.body.y() + vy, field, events);
    }

    fn reset(&mut self) {
        // Velocity lives on the paddle, nothing to clear here
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Role;

    fn cpu_at(y: f32, vy: f32) -> Paddle {
        let mut cpu = Paddle::new(Role::Cpu, 5, 0.0);
        cpu.body.set_position(78.0, y, Hooks::Silent);
        cpu.body.set_vy(vy, Hooks::Silent);
        cpu
    }

    fn ball_at(y: f32, vx: f32) -> Ball {
        let mut ball = Ball::new();
        ball.body.set_position(40.0, y, Hooks::Silent);
        ball.body.set_velocity(vx, 0.0, Hooks::Silent);
        ball
    }

    #[test]
    fn test_easy_step_toward_ball() {
        let mut tracker = DampedTracker::new("Easy", 0.60);
        let mut cpu = cpu_at(20.0, 0.0);
        let mut events = Events::new();

        tracker.steer(&mut cpu, &ball_at(10.0, 2.0), &Field::default(), &mut events);

        assert!((cpu.body.vy() - -0.6).abs() < 1e-6);
        assert!((cpu.body.y() - 19.4).abs() < 1e-5);
    }

    #[test]
    fn test_harder_tiers_keep_more_velocity() {
        let field = Field::default();
        let ball = ball_at(10.0, 2.0);
        let mut results = Vec::new();

        for damping in [0.60, 0.70, 0.80] {
            let mut tracker = DampedTracker::new("Tier", damping);
            let mut cpu = cpu_at(20.0, 0.0);
            tracker.steer(&mut cpu, &ball, &field, &mut Events::new());
            results.push(cpu.body.y());
        }

        assert!(results[0] > results[1]);
        assert!(results[1] > results[2]);
    }

    #[test]
    fn test_holds_while_ball_moves_away() {
        let mut tracker = DampedTracker::new("Hard", 0.80);
        let mut cpu = cpu_at(20.0, -0.4);
        let mut events = Events::new();

        tracker.steer(&mut cpu, &ball_at(10.0, -2.0), &Field::default(), &mut events);

        assert_eq!(cpu.body.y(), 20.0);
        assert_eq!(cpu.body.vy(), -0.4);
        assert!(events.is_empty());
    }

    #[test]
    fn test_tracking_respects_walls() {
        let mut tracker = DampedTracker::new("Hard", 0.80);
        let mut cpu = cpu_at(6.0, -3.0);
        let field = Field::default();

        tracker.steer(&mut cpu, &ball_at(3.0, 2.0), &field, &mut Events::new());

        assert_eq!(cpu.top(), 3.0);
    }
}
