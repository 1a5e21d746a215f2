// Terminal front-end: crossterm input, ratatui drawing, terminal bell cues

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

use super::input::{InputFrame, KeyMap};
use super::render::{render, Theme};
use super::scene::Scene;
use crate::config::Config;
use crate::game::{BodySnapshot, Cue, Field, Mode, Role};
use crate::port::{Control, Focus, Hud, Port};

pub struct TerminalPort<B: Backend> {
    terminal: Terminal<B>,
    keys: KeyMap,
    input: InputFrame,
    scene: Scene,
    field: Field,
    theme: Theme,
    bell: bool,
}

impl<B: Backend> TerminalPort<B> {
    pub fn new(terminal: Terminal<B>, config: &Config) -> Result<Self> {
        Ok(Self {
            terminal,
            keys: KeyMap::from_bindings(&config.keybindings)?,
            input: InputFrame::new(),
            scene: Scene::new(),
            field: Field::from_config(&config.field),
            theme: Theme::from_config(config),
            bell: config.audio.enabled,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Record one terminal event for the current frame
    pub fn feed(&mut self, event: &Event) {
        self.input.record(event);
    }
}

impl<B: Backend> Port for TerminalPort<B> {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.input.clear();

        // Process all pending events without blocking
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.feed(&event);
        }
        Ok(())
    }

    fn render(&mut self, body: &BodySnapshot) {
        self.scene.show(body);
    }

    fn clear(&mut self, body: &BodySnapshot) {
        self.scene.hide(body);
    }

    fn play_cue(&mut self, cue: Cue) {
        debug!(?cue, ms = cue.duration_ms(), "cue");
        if !self.bell {
            return;
        }
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            debug!(error = %e, "bell failed");
        }
    }

    fn poll_control(&self, role: Role) -> Control {
        match role {
            Role::Player1 => self.input.control(self.keys.player1_up, self.keys.player1_down),
            Role::Player2 => self.input.control(self.keys.player2_up, self.keys.player2_down),
            Role::Cpu | Role::Ball => Control::None,
        }
    }

    fn poll_mode_select(&self) -> Option<Mode> {
        self.keys
            .modes
            .iter()
            .find(|(key, _)| self.input.is_down(*key))
            .map(|(_, mode)| *mode)
    }

    fn poll_pause(&self) -> bool {
        self.input.is_down(self.keys.pause)
    }

    fn poll_resume(&self) -> bool {
        self.input.is_down(self.keys.resume)
    }

    fn poll_exit(&self) -> bool {
        self.input.is_down(self.keys.exit)
    }

    fn focus(&self) -> Focus {
        self.input.focus()
    }

    fn present(&mut self, hud: &Hud) -> io::Result<()> {
        self.terminal
            .draw(|frame| render(frame, hud, &self.scene, &self.field, &self.theme))?;
        Ok(())
    }
}
