use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::banner::{Banner, WINNER_TOP_ROW};
use super::scene::Scene;
use crate::config::{Config, KeyBindings};
use crate::game::{BodyKind, Field, Mode};
use crate::port::{Hud, Screen};

// Layout, in terminal rows from the top of the field:
// Row 0: top border
// Row 1: scoreboard
// Row 2: score border
// Rows 3 to height-1: playable area
// Row height: bottom border
const SCORE_ROW: i32 = 1;
const BORDER_ROWS: [i32; 2] = [0, 2];
const PAUSE_HINT_ROW: i32 = 6;
const SURVIVAL_ROW: i32 = 9;
const TITLE_ROW: i32 = 9;

const TITLE_ART: [&str; 7] = [
    " _______  _______  __    _  _______  __  ",
    "|       ||       ||  |  | ||       ||  | ",
    "|    _  ||   _   ||   |_| ||    ___||  | ",
    "|   |_| ||  | |  ||       ||   | __ |  | ",
    "|    ___||  |_|  ||  _    ||   ||  ||__| ",
    "|   |    |       || | |   ||   |_| | __  ",
    "|___|    |_______||_|  |__||_______||__| ",
];

/// Colours and key labels the renderer needs from the config
#[derive(Debug, Clone)]
pub struct Theme {
    pub paddle: Color,
    pub ball: Color,
    pub keys: KeyBindings,
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        let [pr, pg, pb] = config.display.paddle_color;
        let [br, bg, bb] = config.display.ball_color;
        Self {
            paddle: Color::Rgb(pr, pg, pb),
            ball: Color::Rgb(br, bg, bb),
            keys: config.keybindings.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Border colour for a mode
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Easy => Color::Green,
        Mode::Medium => Color::Yellow,
        Mode::Hard => Color::Red,
        Mode::Impossible => Color::Magenta,
        Mode::NotStarted | Mode::Multiplayer => Color::White,
    }
}

/// Colour of a score: green when leading, red when behind, yellow when level
fn lead_color(own: u32, other: u32) -> Color {
    if own > other {
        Color::Green
    } else if own < other {
        Color::Red
    } else {
        Color::Yellow
    }
}

pub fn render(frame: &mut Frame, hud: &Hud, scene: &Scene, field: &Field, theme: &Theme) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let field_area = Rect {
        x: area.x,
        y: area.y,
        width: (field.width.max(0) as u16).min(area.width),
        height: ((field.height + 1).max(0) as u16).min(area.height),
    };

    draw_field(frame, field_area, hud, scene, field, theme);
    draw_scoreboard(frame, field_area, hud);

    match hud.screen {
        Screen::Title => draw_title(frame, field_area, theme),
        Screen::Match if hud.is_paused() => {
            if let Some(score) = hud.last_survival {
                text_row(
                    frame,
                    field_area,
                    SURVIVAL_ROW,
                    Line::from(format!("Your Score was: {}", score)),
                );
            }
            draw_pause_hints(frame, field_area, hud, field, theme);
        }
        Screen::Match => {}
        Screen::ModeSelected(mode) => {
            if let Some(banner) = Banner::mode(mode) {
                banner.render(frame, field_area, field.height / 2 - 3);
            }
        }
        Screen::Winner(phase) => {
            if let Some(banner) = Banner::winner(phase, hud.player1_score, hud.opponent_score) {
                banner.render(frame, field_area, WINNER_TOP_ROW);
            }
        }
    }
}

/// Borders and bodies, one styled cell at a time
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    hud: &Hud,
    scene: &Scene,
    field: &Field,
    theme: &Theme,
) {
    let width = field.width.max(0) as usize;
    let rows = (field.height + 1).max(0) as usize;
    let border = Style::default().fg(mode_color(hud.mode));
    let blank = Style::default().fg(Color::White);

    let mut grid: Vec<Vec<(char, Style)>> = (0..rows)
        .map(|row| {
            let row = row as i32;
            if BORDER_ROWS.contains(&row) || row == field.height {
                vec![('-', border); width]
            } else {
                vec![(' ', blank); width]
            }
        })
        .collect();

    // Bodies only show while a match is on screen
    if hud.screen == Screen::Match {
        for (x, y, kind) in scene.cells() {
            if x < 0 || y < Field::TOP || y > field.bottom() || x >= field.width {
                continue;
            }
            let cell = match kind {
                BodyKind::Paddle => ('I', Style::default().fg(theme.paddle)),
                BodyKind::Ball => ('O', Style::default().fg(theme.ball)),
            };
            grid[y as usize][x as usize] = cell;
        }
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(c, style)| Span::styled(c.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, hud: &Hud) {
    let line = match hud.mode {
        Mode::NotStarted => Line::from(Span::styled(
            "Waiting for Game Start",
            Style::default().fg(Color::Green),
        )),
        Mode::Impossible => Line::from(Span::styled(
            format!("P1 Score: {}", hud.player1_score),
            Style::default().fg(Color::Green),
        )),
        mode => Line::from(vec![
            Span::styled(
                format!("P1 Score: {}", hud.player1_score),
                Style::default().fg(lead_color(hud.player1_score, hud.opponent_score)),
            ),
            Span::styled(" | ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{} Score: {}", mode.opponent_label(), hud.opponent_score),
                Style::default().fg(lead_color(hud.opponent_score, hud.player1_score)),
            ),
        ]),
    };
    text_row(frame, area, SCORE_ROW, line);
}

fn draw_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let keys = &theme.keys;
    text_row(
        frame,
        area,
        TITLE_ROW,
        Line::from(Span::styled(
            format!("{:<41}", " Welcome to:"),
            Style::default().fg(Color::Blue),
        )),
    );
    for (i, art) in TITLE_ART.iter().enumerate() {
        text_row(
            frame,
            area,
            TITLE_ROW + 1 + i as i32,
            Line::from(Span::styled(
                *art,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        );
    }

    let below = TITLE_ROW + TITLE_ART.len() as i32 + 4;
    text_row(
        frame,
        area,
        below,
        Line::from(format!("Hit {} for Multiplayer", keys.multiplayer.to_uppercase())),
    );
    text_row(frame, area, below + 2, Line::from("or"));
    text_row(
        frame,
        area,
        below + 4,
        Line::from("Enter difficulty of Single Player:"),
    );

    let separator = || Span::styled(" | ", Style::default().fg(Color::White));
    let tier = |label: &str, key: &str, mode: Mode| {
        Span::styled(
            format!("{} : {}", label, key.to_uppercase()),
            Style::default().fg(mode_color(mode)),
        )
    };
    text_row(
        frame,
        area,
        below + 6,
        Line::from(vec![
            tier("Easy", &keys.easy, Mode::Easy),
            separator(),
            tier("Medium", &keys.medium, Mode::Medium),
            separator(),
            tier("Hard", &keys.hard, Mode::Hard),
            separator(),
            tier("Survival", &keys.impossible, Mode::Impossible),
        ]),
    );
    text_row(
        frame,
        area,
        below + 8,
        Line::from(Span::styled(
            format!("{} to quit", keys.exit.to_uppercase()),
            Style::default().fg(Color::DarkGray),
        )),
    );
}

fn draw_pause_hints(frame: &mut Frame, area: Rect, hud: &Hud, field: &Field, theme: &Theme) {
    let keys = &theme.keys;
    let hints = [
        format!("Press {} to start", keys.resume.to_uppercase()),
        format!("Press {} to pause", keys.pause.to_uppercase()),
        format!("Press {} to exit", keys.exit.to_uppercase()),
    ];
    for (i, hint) in hints.into_iter().enumerate() {
        text_row(frame, area, PAUSE_HINT_ROW + i as i32, Line::from(hint));
    }

    let goal = if hud.mode == Mode::Impossible {
        "Try return the ball as many times as you can!".to_string()
    } else {
        format!("First to {} wins!", hud.winning_score)
    };
    text_row(
        frame,
        area,
        PAUSE_HINT_ROW + 4,
        Line::from(Span::styled(goal, Style::default().fg(Color::Green))),
    );

    let controls_row = field.height - 7;
    text_row(
        frame,
        area,
        controls_row,
        Line::from(format!(
            "Player 1 Controls: {} = up, {} = down",
            keys.player1_up.to_uppercase(),
            keys.player1_down.to_uppercase()
        )),
    );
    if hud.mode == Mode::Multiplayer {
        text_row(
            frame,
            area,
            controls_row + 1,
            Line::from(format!(
                "Player 2 Controls: {} = up, {} = down",
                keys.player2_up.to_uppercase(),
                keys.player2_down.to_uppercase()
            )),
        );
    }
}

/// Centre one line of text on a field row, skipping rows off screen
pub(super) fn text_row(frame: &mut Frame, area: Rect, row: i32, line: Line) {
    if row < 0 || row as u16 >= area.height {
        return;
    }
    let row_area = Rect {
        x: area.x,
        y: area.y + row as u16,
        width: area.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BodySnapshot, Phase, Role};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn hud(screen: Screen, mode: Mode, phase: Phase) -> Hud {
        Hud {
            screen,
            mode,
            phase,
            player1_score: 0,
            opponent_score: 0,
            winning_score: 5,
            last_survival: None,
        }
    }

    fn draw(hud: &Hud, scene: &Scene) -> Buffer {
        let field = Field::default();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(79, 36)).unwrap();
        terminal
            .draw(|frame| render(frame, hud, scene, &field, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_title_screen() {
        let buffer = draw(&hud(Screen::Title, Mode::NotStarted, Phase::NotStarted), &Scene::new());
        assert!(row_text(&buffer, 0).chars().all(|c| c == '-'));
        assert!(row_text(&buffer, 1).contains("Waiting for Game Start"));
        assert!(row_text(&buffer, 35).chars().all(|c| c == '-'));

        let all: String = (0..36).map(|row| row_text(&buffer, row)).collect();
        assert!(all.contains("Hit SPACE for Multiplayer"));
        assert!(all.contains("Survival : 4"));
    }

    #[test]
    fn test_bodies_and_scoreboard() {
        let mut scene = Scene::new();
        scene.show(&BodySnapshot {
            role: Role::Player1,
            x: 0.0,
            y: 17.0,
            width: 1,
            height: 5,
            visible: true,
        });
        scene.show(&BodySnapshot {
            role: Role::Ball,
            x: 39.0,
            y: 17.0,
            width: 1,
            height: 1,
            visible: true,
        });
        let mut hud = hud(Screen::Match, Mode::Hard, Phase::InPlay);
        hud.player1_score = 2;
        hud.opponent_score = 1;

        let buffer = draw(&hud, &scene);
        for row in 15..=19 {
            assert_eq!(buffer[(0, row)].symbol(), "I");
        }
        assert_eq!(buffer[(0, 14)].symbol(), " ");
        assert_eq!(buffer[(39, 17)].symbol(), "O");
        assert_eq!(buffer[(39, 17)].fg, Color::Rgb(0, 255, 0));
        assert_eq!(buffer[(5, 0)].fg, Color::Red);

        let score = row_text(&buffer, 1);
        assert!(score.contains("P1 Score: 2 | CPU Score: 1"));
    }

    #[test]
    fn test_survival_scoreboard_and_banner() {
        let mut hud = hud(Screen::Match, Mode::Impossible, Phase::Paused);
        hud.last_survival = Some(7);
        let buffer = draw(&hud, &Scene::new());
        let score = row_text(&buffer, 1);
        assert!(score.contains("P1 Score: 0"));
        assert!(!score.contains("CPU"));
        assert!(row_text(&buffer, 9).contains("Your Score was: 7"));
        assert!(row_text(&buffer, 6).contains("Press SPACE to start"));
    }

    #[test]
    fn test_winner_banner_under_scoreboard() {
        let mut hud = hud(Screen::Winner(Phase::Player1Won), Mode::Easy, Phase::Player1Won);
        hud.player1_score = 5;
        let buffer = draw(&hud, &Scene::new());

        assert!(row_text(&buffer, 10).trim().is_empty());
        assert!(row_text(&buffer, 11).contains(" _     _  ___ "));
        assert_eq!(buffer[(39, 20)].fg, Color::Green);
        assert!(row_text(&buffer, 26).contains("5 - 0"));
        assert!(row_text(&buffer, 1).contains("P1 Score: 5 | CPU Score: 0"));
    }

    #[test]
    fn test_mode_banner_in_tier_colour() {
        let buffer = draw(
            &hud(Screen::ModeSelected(Mode::Medium), Mode::Medium, Phase::NotStarted),
            &Scene::new(),
        );

        // Centred around row height / 2 - 3
        assert!(row_text(&buffer, 13).trim().is_empty());
        assert!(row_text(&buffer, 14).contains(" __   __  _______  ______ "));
        assert!(row_text(&buffer, 20).contains("|_|   |_||_______|"));
        assert_eq!(buffer[(39, 14)].fg, Color::Yellow);
        assert_eq!(buffer[(5, 0)].fg, Color::Yellow);
        assert!(!row_text(&buffer, 6).contains("Press"));
    }

    #[test]
    fn test_lead_colours() {
        assert_eq!(lead_color(3, 1), Color::Green);
        assert_eq!(lead_color(1, 3), Color::Red);
        assert_eq!(lead_color(2, 2), Color::Yellow);
    }
}
