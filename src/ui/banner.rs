// Large block-letter banners drawn across the play area

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::render::{mode_color, text_row};
use crate::game::{Mode, Phase};

type Art = [&'static str; 7];

const MULTIPLAYER_ART: Art = [
    " _______  __   __  _______  __  ",
    "|       ||  | |  ||       ||  | ",
    "|    _  ||  |_|  ||    _  ||  | ",
    "|   |_| ||       ||   |_| ||  | ",
    "|    ___||       ||    ___||__| ",
    "|   |     |     | |   |     __  ",
    "|___|      |___|  |___|    |__| ",
];

const EASY_ART: Art = [
    " _______  _______  _______  __   __  __  ",
    "|       ||   _   ||       ||  | |  ||  | ",
    "|    ___||  |_|  ||  _____||  |_|  ||  | ",
    "|   |___ |       || |_____ |       ||  | ",
    "|    ___||       ||_____  ||_     _||__| ",
    "|   |___ |   _   | _____| |  |   |   __  ",
    "|_______||__| |__||_______|  |___|  |__| ",
];

const MEDIUM_ART: Art = [
    " __   __  _______  ______   ___   __   __  __   __  __  ",
    "|  |_|  ||       ||      | |   | |  | |  ||  |_|  ||  | ",
    "|       ||    ___||  _    ||   | |  | |  ||       ||  | ",
    "|       ||   |___ | | |   ||   | |  |_|  ||       ||  | ",
    "|       ||    ___|| |_|   ||   | |       ||       ||__| ",
    "| ||_|| ||   |___ |       ||   | |       || ||_|| | __  ",
    "|_|   |_||_______||______| |___| |_______||_|   |_||__| ",
];

const HARD_ART: Art = [
    " __   __  _______  ______    ______   __  ",
    "|  | |  ||   _   ||    _ |  |      | |  | ",
    "|  |_|  ||  |_|  ||   | ||  |  _    ||  | ",
    "|       ||       ||   |_||_ | | |   ||  | ",
    "|       ||       ||    __  || |_|   ||__| ",
    "|   _   ||   _   ||   |  | ||       | __  ",
    "|__| |__||__| |__||___|  |_||______| |__| ",
];

const DEATH_ART: Art = [
    " ______   _______  _______  _______  __   __  __  ",
    "|      | |       ||   _   ||       ||  | |  ||  | ",
    "|  _    ||    ___||  |_|  ||_     _||  |_|  ||  | ",
    "| | |   ||   |___ |       |  |   |  |       ||  | ",
    "| |_|   ||    ___||       |  |   |  |       ||__| ",
    "|       ||   |___ |   _   |  |   |  |   _   | __  ",
    "|______| |_______||__| |__|  |___|  |__| |__||__| ",
];

const WINNER_ART: Art = [
    " _     _  ___   __    _  __    _  _______  ______    ___  ",
    "| | _ | ||   | |  |  | ||  |  | ||       ||    _ |  |   | ",
    "| || || ||   | |   |_| ||   |_| ||    ___||   | ||  |___| ",
    "|       ||   | |       ||       ||   |___ |   |_||_  ___  ",
    "|       ||   | |  _    ||  _    ||    ___||    __  ||   | ",
    "|   _   ||   | | | |   || | |   ||   |___ |   |  | ||___| ",
    "|__| |__||___| |_|  |__||_|  |__||_______||___|  |_|      ",
];

const PLAYER1_ART: Art = [
    " _______  ___      _______  __   __  _______  ______      ____   __  ",
    "|       ||   |    |   _   ||  | |  ||       ||    _ |    |    | |  | ",
    "|    _  ||   |    |  |_|  ||  |_|  ||    ___||   | ||     |   | |  | ",
    "|   |_| ||   |    |       ||       ||   |___ |   |_||_    |   | |  | ",
    "|    ___||   |___ |       ||_     _||    ___||    __  |   |   | |__| ",
    "|   |    |       ||   _   |  |   |  |   |___ |   |  | |   |   |  __  ",
    "|___|    |_______||__| |__|  |___|  |_______||___|  |_|   |___| |__| ",
];

const PLAYER2_ART: Art = [
    " _______  ___      _______  __   __  _______  ______      _______  __  ",
    "|       ||   |    |   _   ||  | |  ||       ||    _ |    |       ||  | ",
    "|    _  ||   |    |  |_|  ||  |_|  ||    ___||   | ||    |____   ||  | ",
    "|   |_| ||   |    |       ||       ||   |___ |   |_||_    ____|  ||  | ",
    "|    ___||   |___ |       ||_     _||    ___||    __  |  | ______||__| ",
    "|   |    |       ||   _   |  |   |  |   |___ |   |  | |  | |_____  __  ",
    "|___|    |_______||__| |__|  |___|  |_______||___|  |_|  |_______||__| ",
];

const CPU_ART: Art = [
    " _______  _______  __   __  __  ",
    "|       ||       ||  | |  ||  | ",
    "|       ||    _  ||  | |  ||  | ",
    "|       ||   |_| ||  |_|  ||  | ",
    "|      _||    ___||       ||__| ",
    "|     |_ |   |    |       | __  ",
    "|_______||___|    |_______||__| ",
];

/// First field row of the winner banner
pub const WINNER_TOP_ROW: i32 = 11;

/// Stacked block-letter art with an optional caption underneath
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub blocks: Vec<(&'static Art, Color)>,
    pub caption: Option<(String, Color)>,
}

impl Banner {
    /// Announcement shown while the mode jingle plays
    pub fn mode(mode: Mode) -> Option<Self> {
        let art = match mode {
            Mode::Multiplayer => &MULTIPLAYER_ART,
            Mode::Easy => &EASY_ART,
            Mode::Medium => &MEDIUM_ART,
            Mode::Hard => &HARD_ART,
            Mode::Impossible => &DEATH_ART,
            Mode::NotStarted => return None,
        };
        Some(Self {
            blocks: vec![(art, mode_color(mode))],
            caption: None,
        })
    }

    /// "WINNER!" over the winning side, with the final score
    pub fn winner(phase: Phase, player1_score: u32, opponent_score: u32) -> Option<Self> {
        let (art, color) = match phase {
            Phase::Player1Won => (&PLAYER1_ART, Color::Green),
            Phase::Player2Won => (&PLAYER2_ART, Color::Green),
            Phase::CpuWon => (&CPU_ART, Color::Red),
            _ => return None,
        };
        Some(Self {
            blocks: vec![(&WINNER_ART, Color::White), (art, color)],
            caption: Some((format!("{} - {}", player1_score, opponent_score), color)),
        })
    }

    /// Rows taken, counting the blank row above the caption
    pub fn height(&self) -> i32 {
        let art = self.blocks.len() as i32 * 7;
        match self.caption {
            Some(_) => art + 2,
            None => art,
        }
    }

    /// Draw from field row `top` down; each block is centred as one piece
    pub fn render(&self, frame: &mut Frame, area: Rect, top: i32) {
        let mut row = top;
        for (art, color) in &self.blocks {
            let width = art.iter().map(|line| line.len()).max().unwrap_or(0);
            let style = Style::default().fg(*color).add_modifier(Modifier::BOLD);
            for line in art.iter() {
                let padded = format!("{:<width$}", line, width = width);
                text_row(frame, area, row, Line::from(Span::styled(padded, style)));
                row += 1;
            }
        }

        if let Some((caption, color)) = &self.caption {
            text_row(
                frame,
                area,
                row + 1,
                Line::from(Span::styled(caption.clone(), Style::default().fg(*color))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_banner_uses_tier_colour() {
        let banner = Banner::mode(Mode::Hard).unwrap();
        assert_eq!(banner.blocks.len(), 1);
        assert_eq!(banner.blocks[0].1, Color::Red);
        assert_eq!(banner.height(), 7);
        assert!(Banner::mode(Mode::NotStarted).is_none());
    }

    #[test]
    fn test_winner_banner_per_phase() {
        let banner = Banner::winner(Phase::CpuWon, 2, 5).unwrap();
        assert_eq!(banner.blocks[1].1, Color::Red);
        assert_eq!(banner.caption, Some(("2 - 5".to_string(), Color::Red)));
        assert_eq!(banner.height(), 16);

        let banner = Banner::winner(Phase::Player2Won, 3, 5).unwrap();
        assert_eq!(banner.blocks[1].1, Color::Green);

        assert!(Banner::winner(Phase::InPlay, 0, 0).is_none());
    }

    #[test]
    fn test_every_art_block_is_seven_rows_of_ascii() {
        for art in [
            &MULTIPLAYER_ART,
            &EASY_ART,
            &MEDIUM_ART,
            &HARD_ART,
            &DEATH_ART,
            &WINNER_ART,
            &PLAYER1_ART,
            &PLAYER2_ART,
            &CPU_ART,
        ] {
            assert!(art.iter().all(|line| line.is_ascii() && !line.is_empty()));
        }
    }
}
