// Paddles and the ball

use super::body::{Body, Hooks, Role};
use super::events::Events;
use super::field::Field;
use crate::config::PhysicsConfig;

/// Speed bounds applied to the ball after every velocity change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallLimits {
    pub min_x_speed: f32,
    pub max_x_speed: f32,
    pub max_y_speed: f32,
}

impl BallLimits {
    pub fn from_config(physics: &PhysicsConfig) -> Self {
        Self {
            min_x_speed: physics.min_x_speed,
            max_x_speed: physics.max_x_speed,
            max_y_speed: physics.max_y_speed,
        }
    }

    /// Clamp a ball velocity.
    ///
    /// A moving ball never coasts below `min_x_speed` horizontally, so a
    /// soft deflection snaps straight up to the minimum. Vertical speed has
    /// no lower bound.
    pub fn clamp(&self, vx: f32, vy: f32) -> (f32, f32) {
        let mut vx = vx.clamp(-self.max_x_speed, self.max_x_speed);
        if vx < 0.0 && vx > -self.min_x_speed {
            vx = -self.min_x_speed;
        } else if vx > 0.0 && vx < self.min_x_speed {
            vx = self.min_x_speed;
        }
        let vy = vy.clamp(-self.max_y_speed, self.max_y_speed);
        (vx, vy)
    }
}

impl Default for BallLimits {
    fn default() -> Self {
        Self::from_config(&PhysicsConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub body: Body,
    pub score: u32,
    pub lost_last_point: bool,
}

impl Paddle {
    /// `speed` is the rows moved per `move_up`/`move_down`; the CPU paddle
    /// starts at 0 and is steered through its velocity instead.
    pub fn new(role: Role, height: i32, speed: f32) -> Self {
        let mut body = Body::new(role, 1, height);
        body.set_velocity(0.0, speed, Hooks::Silent);
        Self {
            body,
            score: 0,
            lost_last_point: false,
        }
    }

    pub fn role(&self) -> Role {
        self.body.role()
    }

    pub fn top(&self) -> f32 {
        self.body.y() - self.body.half_height() as f32
    }

    pub fn bottom(&self) -> f32 {
        self.body.y() + self.body.half_height() as f32
    }

    pub fn move_up(&mut self, field: &Field, events: &mut Events) {
        let y = self.body.y() - self.body.vy();
        self.move_to(y, field, events);
    }

    pub fn move_down(&mut self, field: &Field, events: &mut Events) {
        let y = self.body.y() + self.body.vy();
        self.move_to(y, field, events);
    }

    /// Reported move followed by the silent wall clamp
    pub fn move_to(&mut self, y: f32, field: &Field, events: &mut Events) {
        self.body.set_y(y, Hooks::Fire(events));
        self.clamp_to_walls(field);
    }

    /// Keep the whole paddle inside the playable rows
    pub fn clamp_to_walls(&mut self, field: &Field) {
        let half = self.body.half_height();
        if self.top() < Field::TOP as f32 {
            self.body.set_y((Field::TOP + half) as f32, Hooks::Silent);
        } else if self.bottom() > field.bottom() as f32 {
            self.body.set_y((field.bottom() - half) as f32, Hooks::Silent);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            body: Body::new(Role::Ball, 1, 1),
        }
    }

    /// Set a new velocity; the speed clamp always follows
    pub fn set_velocity(&mut self, vx: f32, vy: f32, limits: &BallLimits, events: &mut Events) {
        let (vx, vy) = limits.clamp(vx, vy);
        self.body.set_velocity(vx, vy, Hooks::Fire(events));
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}
