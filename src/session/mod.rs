// Session driver: title screen, match loop and winner screen
//
// One `Session` owns the match, the CPU controller and the event queue for
// the whole process run. Everything it shows or plays goes through a `Port`.

mod frame;

pub use frame::limit_frame_rate;

use rand::Rng;
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

use crate::ai::{self, CpuController};
use crate::config::Config;
use crate::game::{
    check_score, pause, reset_game, reset_play, resume, select_mode, step_ball, Cue, Events,
    GameEvent, MatchState, Mode, Phase, Role,
};
use crate::port::{Control, Focus, Hud, Port, Screen};

/// How a match loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    /// Exit input during play
    Abandoned,
    /// A winner phase was reached
    Won(Phase),
}

pub struct Session<P: Port, R: Rng> {
    port: P,
    rng: R,
    config: Config,
    state: MatchState,
    controller: Option<Box<dyn CpuController>>,
    events: Events,
    last_survival: Option<u32>,
}

impl<P: Port, R: Rng> Session<P, R> {
    pub fn new(port: P, config: Config, rng: R) -> Self {
        Self {
            port,
            rng,
            state: MatchState::new(&config),
            config,
            controller: None,
            events: Events::new(),
            last_survival: None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    fn frame_period(&self) -> Duration {
        Duration::from_millis(self.config.display.frame_ms)
    }

    fn menu_period(&self) -> Duration {
        Duration::from_millis(self.config.display.menu_poll_ms)
    }

    /// Title → match → winner, until the player quits from the title screen
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(mode) = self.title_screen()? else {
                info!("quit from title screen");
                return Ok(());
            };

            match self.play_match(mode)? {
                MatchEnd::Abandoned => info!("match abandoned"),
                MatchEnd::Won(phase) => self.winner_screen(phase)?,
            }
        }
    }

    /// Reset everything and wait for a mode. `None` means quit.
    pub fn title_screen(&mut self) -> io::Result<Option<Mode>> {
        reset_game(&mut self.state, &mut self.events);
        self.controller = None;
        self.last_survival = None;
        self.events.cue(Cue::Theme);
        self.flush()?;

        loop {
            let frame_start = Instant::now();
            self.port.begin_frame()?;

            if self.port.poll_exit() {
                return Ok(None);
            }

            if let Some(mode) = self.port.poll_mode_select() {
                if select_mode(&mut self.state, mode, &mut self.events) {
                    self.controller = ai::controller_for(mode, &self.config.ai);
                    self.mode_banner(mode)?;
                    return Ok(Some(mode));
                }
            }

            limit_frame_rate(frame_start, self.menu_period());
        }
    }

    /// Run one match in the mode already selected
    pub fn play_match(&mut self, mode: Mode) -> io::Result<MatchEnd> {
        info!(mode = mode.display_name(), "match started");
        if let Some(controller) = self.controller.as_mut() {
            controller.reset();
        }
        reset_play(&mut self.state, &mut self.rng, &mut self.events);
        self.flush()?;

        while self.state.phase.is_active() {
            let frame_start = Instant::now();
            self.port.begin_frame()?;

            if self.port.poll_exit() {
                return Ok(MatchEnd::Abandoned);
            }

            let wants_pause = self.port.focus() != Focus::Focused || self.port.poll_pause();
            if wants_pause && pause(&mut self.state, &mut self.events) {
                self.flush()?;
                continue;
            }

            if self.state.phase == Phase::Paused {
                // Only a focused window may restart play
                if self.port.focus() == Focus::Focused && self.port.poll_resume() {
                    resume(&mut self.state, &mut self.events);
                }
                self.flush()?;
                limit_frame_rate(frame_start, self.menu_period());
                continue;
            }

            self.tick();
            self.flush()?;
            limit_frame_rate(frame_start, self.frame_period());
        }

        Ok(MatchEnd::Won(self.state.phase))
    }

    /// One simulation step: humans, CPU, ball, then the win check
    fn tick(&mut self) {
        self.steer(Role::Player1);
        if self.state.mode == Mode::Multiplayer {
            self.steer(Role::Player2);
        }

        if let Some(controller) = self.controller.as_mut() {
            ai::step_cpu(&mut self.state, controller.as_mut(), &mut self.events);
        }

        step_ball(&mut self.state, &mut self.rng, &mut self.events);
        check_score(&mut self.state, &mut self.events);
    }

    fn steer(&mut self, role: Role) {
        let control = self.port.poll_control(role);
        let field = self.state.field;
        let Some(paddle) = self.state.paddle_mut(role) else {
            return;
        };
        match control {
            Control::Up => paddle.move_up(&field, &mut self.events),
            Control::Down => paddle.move_down(&field, &mut self.events),
            Control::None => {}
        }
    }

    /// Show the chosen mode while its jingle plays
    fn mode_banner(&mut self, mode: Mode) -> io::Result<()> {
        self.drain_events();
        let hud = self.hud().with_screen(Screen::ModeSelected(mode));
        self.port.present(&hud)?;

        if self.config.display.hold_mode_banner {
            let jingle = Cue::ModeSelected(mode).duration_ms();
            std::thread::sleep(Duration::from_millis(u64::from(jingle)));
        }
        Ok(())
    }

    fn winner_screen(&mut self, phase: Phase) -> io::Result<()> {
        info!(?phase, "match finished");
        let cue = match phase {
            Phase::CpuWon => Cue::Defeat,
            _ => Cue::Victory,
        };
        self.events.cue(cue);
        self.flush()?;
        std::thread::sleep(Duration::from_millis(self.config.display.winner_hold_ms));
        Ok(())
    }

    fn hud(&self) -> Hud {
        Hud::from_state(&self.state, self.last_survival)
    }

    /// Hand every queued event to the port, then draw the frame
    fn flush(&mut self) -> io::Result<()> {
        self.drain_events();
        let hud = self.hud();
        self.port.present(&hud)
    }

    fn drain_events(&mut self) {
        for event in self.events.drain() {
            match event {
                GameEvent::Body(change) => {
                    if change.before.visible {
                        self.port.clear(&change.before);
                    }
                    // Silent wall and plane snaps after the reported move
                    // are already applied here
                    let settled = self.state.snapshot(change.after.role);
                    if settled.visible {
                        self.port.render(&settled);
                    }
                }
                GameEvent::Cue(cue) => self.port.play_cue(cue),
                GameEvent::RallyReset => {
                    for body in self.state.snapshots() {
                        if body.visible {
                            self.port.render(&body);
                        } else {
                            self.port.clear(&body);
                        }
                    }
                }
                GameEvent::SurvivalScore(score) => self.last_survival = Some(score),
                GameEvent::Scored { .. } | GameEvent::PhaseChanged { .. } => {}
            }
        }
    }
}
