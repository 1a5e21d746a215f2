// Moving bodies: position, velocity and size shared by paddles and the ball

use super::events::{BodyChange, Events, GameEvent, Mutation};

/// Which body in the match a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Player1,
    Player2,
    Cpu,
    Ball,
}

impl Role {
    pub fn kind(&self) -> BodyKind {
        match self {
            Role::Ball => BodyKind::Ball,
            _ => BodyKind::Paddle,
        }
    }
}

/// Shape family, used by presenters to pick a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Paddle,
    Ball,
}

/// Whether a mutation is reported to the event queue.
///
/// `Silent` is what the engine uses for corrective snaps (wall clamps,
/// paddle-plane snaps, serve placement) so that a correction never
/// re-enters collision handling.
pub enum Hooks<'a> {
    Fire(&'a mut Events),
    Silent,
}

/// Copy of a body's observable state at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub role: Role,
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    pub visible: bool,
}

impl BodySnapshot {
    pub fn kind(&self) -> BodyKind {
        self.role.kind()
    }

    /// Terminal cell holding the body's centre
    pub fn cell(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    role: Role,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    width: i32,
    height: i32,
    visible: bool,
}

impl Body {
    pub fn new(role: Role, width: i32, height: i32) -> Self {
        Self {
            role,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
            visible: true,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn vx(&self) -> f32 {
        self.vx
    }

    pub fn vy(&self) -> f32 {
        self.vy
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Half the height in whole rows, as used by every collision test
    pub fn half_height(&self) -> i32 {
        self.height / 2
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            role: self.role,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            visible: self.visible,
        }
    }

    pub fn set_x(&mut self, x: f32, hooks: Hooks<'_>) {
        let y = self.y;
        self.set_position(x, y, hooks);
    }

    pub fn set_y(&mut self, y: f32, hooks: Hooks<'_>) {
        let x = self.x;
        self.set_position(x, y, hooks);
    }

    pub fn set_position(&mut self, x: f32, y: f32, hooks: Hooks<'_>) {
        let before = self.snapshot();
        self.x = x;
        self.y = y;
        self.report(Mutation::Position, before, hooks);
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32, hooks: Hooks<'_>) {
        let before = self.snapshot();
        self.vx = vx;
        self.vy = vy;
        self.report(Mutation::Velocity, before, hooks);
    }

    pub fn set_vy(&mut self, vy: f32, hooks: Hooks<'_>) {
        let vx = self.vx;
        self.set_velocity(vx, vy, hooks);
    }

    /// Move by the current velocity
    pub fn advance(&mut self, hooks: Hooks<'_>) {
        let (x, y) = (self.x + self.vx, self.y + self.vy);
        self.set_position(x, y, hooks);
    }

    fn report(&self, mutation: Mutation, before: BodySnapshot, hooks: Hooks<'_>) {
        if let Hooks::Fire(events) = hooks {
            events.push(GameEvent::Body(BodyChange {
                mutation,
                before,
                after: self.snapshot(),
            }));
        }
    }
}
