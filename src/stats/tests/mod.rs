//! Test utilities for statistics aggregation

use crate::models::{Color, GameOutcome, GameType, ParsedGame};

mod aggregate_tests;
mod rating_tests;

/// Build a parsed game record directly, bypassing PGN parsing
pub fn game(
    game_type: GameType,
    outcome: GameOutcome,
    color: Color,
    move_count: u32,
    user_rating: Option<u32>,
    date: &str,
) -> ParsedGame {
    ParsedGame {
        moves: String::new(),
        outcome,
        time_control_display: "?|?".to_string(),
        game_type,
        time_control_raw: "?".to_string(),
        white_player: "?".to_string(),
        black_player: "?".to_string(),
        white_elo: "?".to_string(),
        black_elo: "?".to_string(),
        date: date.to_string(),
        color,
        user_rating,
        move_count,
    }
}
