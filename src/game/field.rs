// Play field geometry
//
// Rows 0..=2 hold the top border and scoreboard, the bottom border sits on
// row `height`. Everything in between is playable.

use crate::config::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    /// First playable row
    pub const TOP: i32 = 3;

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(i32::from(config.width), i32::from(config.height))
    }

    /// Last playable row
    pub fn bottom(&self) -> i32 {
        self.height - 1
    }

    /// Column the left paddle lives on
    pub fn left_column(&self) -> i32 {
        0
    }

    /// Column the right paddle lives on
    pub fn right_column(&self) -> i32 {
        self.width - 1
    }

    /// Integer centre of the field, where every serve starts
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(79, 35)
    }
}
