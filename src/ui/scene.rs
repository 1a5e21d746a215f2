// What is currently drawn on the field, one entry per body

use std::collections::HashMap;

use crate::game::{BodyKind, BodySnapshot, Role};

#[derive(Debug, Default)]
pub struct Scene {
    bodies: HashMap<Role, BodySnapshot>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a body, replacing wherever it was drawn before
    pub fn show(&mut self, body: &BodySnapshot) {
        self.bodies.insert(body.role, *body);
    }

    pub fn hide(&mut self, body: &BodySnapshot) {
        self.bodies.remove(&body.role);
    }

    /// Every occupied cell as (column, row, kind).
    ///
    /// A paddle covers `height` rows starting `height / 2` above its centre.
    pub fn cells(&self) -> Vec<(i32, i32, BodyKind)> {
        let mut cells = Vec::new();
        for body in self.bodies.values() {
            let (x, y) = body.cell();
            match body.kind() {
                BodyKind::Ball => cells.push((x, y, BodyKind::Ball)),
                BodyKind::Paddle => {
                    let top = y - body.height / 2;
                    for row in top..top + body.height {
                        cells.push((x, row, BodyKind::Paddle));
                    }
                }
            }
        }
        cells
    }
}
