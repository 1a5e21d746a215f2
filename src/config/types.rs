// termpong configuration types
// All settings with defaults matching the classic 79×35 console game

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        ensure!(
            field.width >= 20 && field.height >= 12,
            "field must be at least 20x12, got {}x{}",
            field.width,
            field.height
        );

        let physics = &self.physics;
        ensure!(
            physics.paddle_height >= 1 && i32::from(physics.paddle_height) <= field.playable_rows(),
            "paddle_height {} does not fit the {} playable rows",
            physics.paddle_height,
            field.playable_rows()
        );
        ensure!(
            physics.min_x_speed > 0.0 && physics.min_x_speed <= physics.max_x_speed,
            "min_x_speed must be positive and no larger than max_x_speed"
        );
        ensure!(physics.max_y_speed > 0.0, "max_y_speed must be positive");
        ensure!(physics.paddle_speed > 0.0, "paddle_speed must be positive");
        ensure!(physics.winning_score >= 1, "winning_score must be at least 1");

        for (tier, damping) in [
            ("easy", self.ai.easy_damping),
            ("medium", self.ai.medium_damping),
            ("hard", self.ai.hard_damping),
        ] {
            ensure!(
                damping > 0.0 && damping <= 1.0,
                "{}_damping must be in (0, 1], got {}",
                tier,
                damping
            );
        }

        ensure!(self.display.frame_ms >= 1, "frame_ms must be at least 1");
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (player 1, every mode)
    pub player1_up: String,
    pub player1_down: String,

    // Right paddle (player 2, multiplayer only)
    pub player2_up: String,
    pub player2_down: String,

    // Match controls
    pub pause: String,
    pub resume: String,
    pub exit: String,

    // Title screen mode selection
    pub multiplayer: String,
    pub easy: String,
    pub medium: String,
    pub hard: String,
    pub impossible: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player1_up: "W".to_string(),
            player1_down: "S".to_string(),
            player2_up: "Up".to_string(),
            player2_down: "Down".to_string(),
            pause: "P".to_string(),
            resume: "Space".to_string(),
            exit: "Esc".to_string(),
            multiplayer: "Space".to_string(),
            easy: "1".to_string(),
            medium: "2".to_string(),
            hard: "3".to_string(),
            impossible: "4".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldConfig {
    // Terminal columns used by the field
    pub width: u16,

    // Row of the bottom border; rows 3..height are playable
    pub height: u16,
}

impl FieldConfig {
    pub fn playable_rows(&self) -> i32 {
        i32::from(self.height) - 3
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 79,
            height: 35,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Paddle height in rows
    pub paddle_height: u8,

    // Rows a human paddle moves per tick while its key is down
    pub paddle_speed: f32,

    // Ball speed bounds in cells per tick
    pub min_x_speed: f32,
    pub max_x_speed: f32,
    pub max_y_speed: f32,

    // Score required to win (ignored in survival mode)
    pub winning_score: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            paddle_height: 5,
            paddle_speed: 1.0,
            min_x_speed: 2.0,
            max_x_speed: 3.0,
            max_y_speed: 1.5,
            winning_score: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Fraction of the CPU paddle velocity kept each tick (higher = harder)
    pub easy_damping: f32,
    pub medium_damping: f32,
    pub hard_damping: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            easy_damping: 0.60,
            medium_damping: 0.70,
            hard_damping: 0.80,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Minimum frame period while a rally is in play
    pub frame_ms: u64,

    // Poll period on the title and pause screens
    pub menu_poll_ms: u64,

    // How long the winner screen stays up
    pub winner_hold_ms: u64,

    // Keep the mode banner up until its jingle has played
    pub hold_mode_banner: bool,

    // Paddle color (RGB values 0-255)
    pub paddle_color: [u8; 3],

    // Ball color
    pub ball_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_ms: 30,
            menu_poll_ms: 50,
            winner_hold_ms: 3000,
            hold_mode_banner: true,
            paddle_color: [0, 255, 255], // Aqua
            ball_color: [0, 255, 0],     // Green
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    // Ring the terminal bell for cues
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
