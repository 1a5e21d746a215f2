// Keyboard and focus input for the terminal front-end

use anyhow::{anyhow, Result};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use std::collections::HashSet;

use crate::config::KeyBindings;
use crate::game::Mode;
use crate::port::{Control, Focus};

/// Parse a key name from the config file.
///
/// Accepts "Up", "Down", "Left", "Right", "Enter", "Esc", "Space", "Tab",
/// "Backspace" (any case) or a single character. Letters are matched
/// case-insensitively at runtime.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();
    match lower.as_str() {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "space" => Some(KeyCode::Char(' ')),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Key bindings resolved to key codes
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub player1_up: KeyCode,
    pub player1_down: KeyCode,
    pub player2_up: KeyCode,
    pub player2_down: KeyCode,
    pub pause: KeyCode,
    pub resume: KeyCode,
    pub exit: KeyCode,
    /// Title screen keys, in display order
    pub modes: Vec<(KeyCode, Mode)>,
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self> {
        let key = |field: &str, name: &str| {
            parse_key(name).ok_or_else(|| anyhow!("unknown key {:?} for keybindings.{}", name, field))
        };

        Ok(Self {
            player1_up: key("player1_up", &bindings.player1_up)?,
            player1_down: key("player1_down", &bindings.player1_down)?,
            player2_up: key("player2_up", &bindings.player2_up)?,
            player2_down: key("player2_down", &bindings.player2_down)?,
            pause: key("pause", &bindings.pause)?,
            resume: key("resume", &bindings.resume)?,
            exit: key("exit", &bindings.exit)?,
            modes: vec![
                (key("multiplayer", &bindings.multiplayer)?, Mode::Multiplayer),
                (key("easy", &bindings.easy)?, Mode::Easy),
                (key("medium", &bindings.medium)?, Mode::Medium),
                (key("hard", &bindings.hard)?, Mode::Hard),
                (key("impossible", &bindings.impossible)?, Mode::Impossible),
            ],
        })
    }
}

/// Input gathered for one frame, plus the focus state which persists
/// between frames
#[derive(Debug)]
pub struct InputFrame {
    pressed: HashSet<KeyCode>,
    focus: Focus,
}

impl InputFrame {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            focus: Focus::Focused,
        }
    }

    /// Forget this frame's keys; focus is kept
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Record one terminal event. Presses and repeats both count as a
    /// key being down this frame.
    pub fn record(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.pressed.insert(normalize(key.code));
            }
            Event::FocusGained => self.focus = Focus::Focused,
            Event::FocusLost => self.focus = Focus::Unfocused,
            _ => {}
        }
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.pressed.contains(&normalize(code))
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn control(&self, up: KeyCode, down: KeyCode) -> Control {
        // Both held cancel out
        match (self.is_down(up), self.is_down(down)) {
            (true, false) => Control::Up,
            (false, true) => Control::Down,
            _ => Control::None,
        }
    }
}

impl Default for InputFrame {
    fn default() -> Self {
        Self::new()
    }
}
