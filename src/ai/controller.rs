// Controller trait for the CPU paddle

use crate::game::{Ball, Events, Field, Paddle};

/// Trait for CPU paddle controllers
///
/// A controller gets the CPU paddle and a read-only view of the ball once per
/// tick and moves the paddle however it likes. Movement should go through
/// `Paddle::move_to` so the wall clamp still applies.
pub trait CpuController {
    /// Steer the CPU paddle for this tick
    ///
    /// # Arguments
    /// * `cpu` - The CPU paddle (position and velocity are the controller's to change)
    /// * `ball` - Current ball state
    /// * `field` - Field geometry, for the wall clamp
    /// * `events` - Queue that receives the paddle's change events
    fn steer(&mut self, cpu: &mut Paddle, ball: &Ball, field: &Field, events: &mut Events);

    /// Reset controller internal state (called when a new match starts)
    fn reset(&mut self);

    /// Controller name for debugging/display
    fn name(&self) -> &str;
}
