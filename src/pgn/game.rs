//! Single game parsing.
//!
//! Separates a game block into its tag section and move text, extracts the
//! tags of interest and resolves the target user's colour, result and
//! rating. Missing or malformed values degrade to their sentinel defaults;
//! only a block without any tag line is rejected.

use super::moves::{clean_moves, count_full_moves};
use super::tags::extract_tag;
use super::timecontrol::{classify_game, format_time_control};
use crate::constants::{UNKNOWN_VALUE, results, tags};
use crate::models::{Color, GameOutcome, ParsedGame};
use tracing::debug;

/// Tag lines and move text of one game block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockSections {
    /// Leading tag lines, one per line
    pub headers: String,
    /// Remaining non-empty lines joined with single spaces
    pub move_text: String,
}

impl BlockSections {
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }
}

/// Split a game block into leading tag lines and move text
///
/// Tag lines only count while no other line has been seen; a `[` line
/// after the first non-tag line (including a blank one) is move text.
pub fn split_sections(block: &str) -> BlockSections {
    let mut sections = BlockSections::default();
    let mut in_move_section = false;

    for line in block.lines() {
        let line = line.trim();
        if !in_move_section && line.starts_with('[') {
            sections.headers.push_str(line);
            sections.headers.push('\n');
            continue;
        }

        in_move_section = true;
        if !line.is_empty() {
            if !sections.move_text.is_empty() {
                sections.move_text.push(' ');
            }
            sections.move_text.push_str(line);
        }
    }

    sections
}

/// Parser bound to one target user
#[derive(Debug, Clone)]
pub struct GameParser {
    username: String,
}

impl GameParser {
    pub fn new(username: &str) -> Self {
        Self {
            username: normalize_name(username),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Parse one game block, `None` when it holds no tag lines at all
    pub fn parse(&self, block: &str) -> Option<ParsedGame> {
        let sections = split_sections(block.trim());
        if !sections.has_headers() {
            debug!("Skipping block without tag section");
            return None;
        }

        let headers = sections.headers.as_str();
        let white_player = extract_tag(headers, tags::WHITE);
        let black_player = extract_tag(headers, tags::BLACK);
        let result = extract_tag(headers, tags::RESULT);
        let time_control_raw = extract_tag(headers, tags::TIME_CONTROL);
        let event = extract_tag(headers, tags::EVENT);
        let white_elo = extract_tag(headers, tags::WHITE_ELO);
        let black_elo = extract_tag(headers, tags::BLACK_ELO);

        let mut date = extract_tag(headers, tags::UTC_DATE);
        if date == UNKNOWN_VALUE {
            date = extract_tag(headers, tags::DATE);
        }

        let color = self.resolve_color(&white_player, &black_player);
        let outcome = resolve_outcome(color, &result);
        let user_rating = match color {
            Color::White => parse_rating(&white_elo),
            Color::Black => parse_rating(&black_elo),
            Color::Unknown => None,
        };

        let moves = clean_moves(&sections.move_text);
        let move_count = count_full_moves(&moves);

        Some(ParsedGame {
            time_control_display: format_time_control(&time_control_raw),
            game_type: classify_game(&time_control_raw, &event),
            moves,
            outcome,
            time_control_raw,
            white_player,
            black_player,
            white_elo,
            black_elo,
            date,
            color,
            user_rating,
            move_count,
        })
    }

    /// Side of the target user, compared case-insensitively
    pub fn resolve_color(&self, white: &str, black: &str) -> Color {
        if self.username == normalize_name(white) {
            Color::White
        } else if self.username == normalize_name(black) {
            Color::Black
        } else {
            Color::Unknown
        }
    }
}

/// Parse one game block for `username`
pub fn parse_game(block: &str, username: &str) -> Option<ParsedGame> {
    GameParser::new(username).parse(block)
}

/// Result of the game from the user's side given the PGN Result tag
pub fn resolve_outcome(color: Color, result: &str) -> GameOutcome {
    match (color, result) {
        (Color::Unknown, _) => GameOutcome::Unknown,
        (_, results::DRAW) => GameOutcome::Draw,
        (Color::White, results::WHITE_WINS) | (Color::Black, results::BLACK_WINS) => {
            GameOutcome::Won
        }
        (Color::White, results::BLACK_WINS) | (Color::Black, results::WHITE_WINS) => {
            GameOutcome::Lost
        }
        _ => GameOutcome::Unknown,
    }
}

/// Positive integer rating, `None` for `"?"`, non-numeric or non-positive
pub fn parse_rating(elo: &str) -> Option<u32> {
    elo.parse::<i64>()
        .ok()
        .filter(|rating| *rating > 0)
        .and_then(|rating| u32::try_from(rating).ok())
}

fn normalize_name(name: &str) -> String {
    name.trim().replace('"', "").to_lowercase()
}
