// Drives whole sessions through a scripted in-memory port

use std::collections::VecDeque;
use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use termpong::config::Config;
use termpong::game::{BodySnapshot, Cue, Mode, Phase, Role};
use termpong::port::{Control, Focus, Hud, Port, Screen};
use termpong::session::Session;

#[derive(Debug, Clone, Copy)]
struct Input {
    exit: bool,
    pause: bool,
    resume: bool,
    mode: Option<Mode>,
    player1: Control,
    player2: Control,
    focus: Focus,
}

impl Input {
    fn idle() -> Self {
        Self {
            exit: false,
            pause: false,
            resume: false,
            mode: None,
            player1: Control::None,
            player2: Control::None,
            focus: Focus::Focused,
        }
    }

    fn exit() -> Self {
        Self {
            exit: true,
            ..Self::idle()
        }
    }

    fn mode(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::idle()
        }
    }

    fn resume() -> Self {
        Self {
            resume: true,
            ..Self::idle()
        }
    }
}

/// Plays back one `Input` per frame. When the script runs out it repeats
/// `repeat` until a winner screen is shown, then presses exit forever.
struct ScriptedPort {
    script: VecDeque<Input>,
    repeat: Option<Input>,
    current: Input,
    frames: usize,
    rendered: Vec<BodySnapshot>,
    cleared: Vec<BodySnapshot>,
    cues: Vec<Cue>,
    huds: Vec<Hud>,
}

impl ScriptedPort {
    fn new(script: Vec<Input>) -> Self {
        Self {
            script: script.into(),
            repeat: None,
            current: Input::idle(),
            frames: 0,
            rendered: Vec::new(),
            cleared: Vec::new(),
            cues: Vec::new(),
            huds: Vec::new(),
        }
    }

    fn repeating(mut self, input: Input) -> Self {
        self.repeat = Some(input);
        self
    }

    fn phases(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> = Vec::new();
        for hud in &self.huds {
            if phases.last() != Some(&hud.phase) {
                phases.push(hud.phase);
            }
        }
        phases
    }
}

impl Port for ScriptedPort {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.frames += 1;
        // Hard stop so a broken loop fails instead of hanging
        assert!(self.frames < 20_000, "session never finished");
        self.current = self
            .script
            .pop_front()
            .or(self.repeat)
            .unwrap_or_else(Input::exit);
        Ok(())
    }

    fn render(&mut self, body: &BodySnapshot) {
        self.rendered.push(*body);
    }

    fn clear(&mut self, body: &BodySnapshot) {
        self.cleared.push(*body);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn poll_control(&self, role: Role) -> Control {
        match role {
            Role::Player1 => self.current.player1,
            Role::Player2 => self.current.player2,
            _ => Control::None,
        }
    }

    fn poll_mode_select(&self) -> Option<Mode> {
        self.current.mode
    }

    fn poll_pause(&self) -> bool {
        self.current.pause
    }

    fn poll_resume(&self) -> bool {
        self.current.resume
    }

    fn poll_exit(&self) -> bool {
        self.current.exit
    }

    fn focus(&self) -> Focus {
        self.current.focus
    }

    fn present(&mut self, hud: &Hud) -> io::Result<()> {
        if matches!(hud.screen, Screen::Winner(_)) {
            self.repeat = None;
        }
        self.huds.push(hud.clone());
        Ok(())
    }
}

fn fast_config() -> Config {
    let mut config = Config::default();
    config.display.frame_ms = 1;
    config.display.menu_poll_ms = 1;
    config.display.winner_hold_ms = 0;
    config.display.hold_mode_banner = false;
    config
}

fn run(port: ScriptedPort, config: Config) -> ScriptedPort {
    let mut session = Session::new(port, config, StdRng::seed_from_u64(11));
    session.run().unwrap();
    assert_eq!(session.state().mode, Mode::NotStarted);
    session.into_port()
}

#[test]
fn test_exit_on_title_quits() {
    let port = run(ScriptedPort::new(vec![Input::exit()]), fast_config());

    assert_eq!(port.cues, vec![Cue::Theme]);
    assert_eq!(port.huds.last().map(|hud| hud.screen), Some(Screen::Title));
    assert!(port.rendered.is_empty());
}

#[test]
fn test_mode_select_serves_and_pauses() {
    let script = vec![Input::idle(), Input::mode(Mode::Easy), Input::exit(), Input::exit()];
    let port = run(ScriptedPort::new(script), fast_config());

    assert_eq!(
        port.cues,
        vec![Cue::Theme, Cue::ModeSelected(Mode::Easy), Cue::Theme]
    );

    // The serve shows player 1, the CPU and the ball; player 2 stays hidden
    let roles: Vec<Role> = port.rendered.iter().map(|body| body.role).collect();
    assert!(roles.contains(&Role::Player1));
    assert!(roles.contains(&Role::Cpu));
    assert!(roles.contains(&Role::Ball));
    assert!(!roles.contains(&Role::Player2));
    assert!(port.cleared.iter().any(|body| body.role == Role::Player2));

    assert!(port
        .huds
        .iter()
        .any(|hud| hud.is_paused() && hud.mode == Mode::Easy));
}

#[test]
fn test_resume_then_focus_loss_pauses() {
    let script = vec![
        Input::mode(Mode::Multiplayer),
        Input::resume(),
        Input::idle(),
        Input {
            focus: Focus::Unfocused,
            ..Input::idle()
        },
        Input::exit(),
        Input::exit(),
    ];
    let port = run(ScriptedPort::new(script), fast_config());

    assert_eq!(
        port.phases(),
        vec![
            Phase::NotStarted,
            Phase::Paused,
            Phase::InPlay,
            Phase::Paused,
            Phase::NotStarted
        ]
    );
}

#[test]
fn test_resume_ignored_without_focus() {
    let blurred_resume = Input {
        resume: true,
        focus: Focus::Unfocused,
        ..Input::idle()
    };
    let script = vec![
        Input::mode(Mode::Easy),
        blurred_resume,
        blurred_resume,
        blurred_resume,
        Input::exit(),
        Input::exit(),
    ];
    let port = run(ScriptedPort::new(script), fast_config());

    assert_eq!(
        port.phases(),
        vec![Phase::NotStarted, Phase::Paused, Phase::NotStarted]
    );
}

#[test]
fn test_mode_banner_shown_before_serve() {
    let script = vec![Input::mode(Mode::Hard), Input::exit(), Input::exit()];
    let port = run(ScriptedPort::new(script), fast_config());

    let banner = port
        .huds
        .iter()
        .position(|hud| hud.screen == Screen::ModeSelected(Mode::Hard))
        .expect("a mode banner");
    let serve = port
        .huds
        .iter()
        .position(|hud| hud.is_paused())
        .expect("a paused serve");
    assert!(banner < serve);
    assert_eq!(port.huds[banner].phase, Phase::NotStarted);
}

#[test]
fn test_unavailable_focus_counts_as_lost() {
    let script = vec![
        Input::mode(Mode::Hard),
        Input::resume(),
        Input {
            focus: Focus::Unavailable,
            ..Input::idle()
        },
        Input::exit(),
        Input::exit(),
    ];
    let port = run(ScriptedPort::new(script), fast_config());

    let phases = port.phases();
    assert_eq!(phases[phases.len() - 2], Phase::Paused);
    assert!(phases.contains(&Phase::InPlay));
}

#[test]
fn test_only_player_one_steers_in_single_player() {
    let script = vec![
        Input::mode(Mode::Medium),
        Input::resume(),
        Input {
            player1: Control::Down,
            player2: Control::Down,
            ..Input::idle()
        },
        Input::exit(),
        Input::exit(),
    ];
    let port = run(ScriptedPort::new(script), fast_config());

    assert!(port
        .rendered
        .iter()
        .any(|body| body.role == Role::Player1 && body.y == 18.0));
    assert!(port.rendered.iter().all(|body| body.role != Role::Player2));
}

#[test]
fn test_match_plays_to_a_winner() {
    let mut config = fast_config();
    config.physics.winning_score = 1;

    // Player 1 parks at the top wall and keeps resuming after every serve
    let hold = Input {
        resume: true,
        player1: Control::Up,
        ..Input::idle()
    };
    let port = run(
        ScriptedPort::new(vec![Input::mode(Mode::Easy)]).repeating(hold),
        config,
    );

    let winner = port
        .huds
        .iter()
        .find_map(|hud| match hud.screen {
            Screen::Winner(phase) => Some(phase),
            _ => None,
        })
        .expect("a winner screen");
    assert!(matches!(winner, Phase::Player1Won | Phase::CpuWon));

    let closing = match winner {
        Phase::CpuWon => Cue::Defeat,
        _ => Cue::Victory,
    };
    assert!(port.cues.contains(&closing));

    // Back on the title screen afterwards
    assert_eq!(port.cues.last(), Some(&Cue::Theme));
    assert_eq!(port.huds.last().map(|hud| hud.screen), Some(Screen::Title));
}
