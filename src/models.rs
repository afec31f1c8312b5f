//! Core data structures for game extraction.
//!
//! Defines the time-control categories, the player's colour and result,
//! the parsed per-game record, and the requested archive period.

use crate::constants::{UNKNOWN_VALUE, WHOLE_YEAR_MONTH};
use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time-control category of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameType {
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    Daily,
    Unknown,
}

impl GameType {
    /// Every category in report order
    pub const ALL: [GameType; 7] = [
        GameType::Bullet,
        GameType::Blitz,
        GameType::Rapid,
        GameType::Classical,
        GameType::Correspondence,
        GameType::Daily,
        GameType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Bullet => "Bullet",
            GameType::Blitz => "Blitz",
            GameType::Rapid => "Rapid",
            GameType::Classical => "Classical",
            GameType::Correspondence => "Correspondence",
            GameType::Daily => "Daily",
            GameType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side played by the target user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Unknown,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game result from the target user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
    Draw,
    Unknown,
}

impl GameOutcome {
    /// Label written into the report, e.g. `(won)`
    pub fn label(&self) -> &'static str {
        match self {
            GameOutcome::Won => "(won)",
            GameOutcome::Lost => "(lost)",
            GameOutcome::Draw => "(draw)",
            GameOutcome::Unknown => "(?)",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured record extracted from one game block
///
/// Tag-derived string fields hold `"?"` when the tag was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGame {
    /// Move text with clock/eval comments and the result token removed
    pub moves: String,
    pub outcome: GameOutcome,
    /// `"<baseMinutes>|<incrementSeconds>"` or `"?|?"`
    pub time_control_display: String,
    pub game_type: GameType,
    /// TimeControl tag exactly as found, used for filter matching
    pub time_control_raw: String,
    pub white_player: String,
    pub black_player: String,
    pub white_elo: String,
    pub black_elo: String,
    /// `YYYY.MM.DD`, preferring UTCDate over Date
    pub date: String,
    pub color: Color,
    /// User's rating, present only when it parsed to a positive integer
    pub user_rating: Option<u32>,
    /// Number of full moves (white + black ply pairs)
    pub move_count: u32,
}

impl ParsedGame {
    pub fn has_known_date(&self) -> bool {
        self.date != UNKNOWN_VALUE
    }
}

/// Archive period requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month { year: u16, month: u8 },
    Year { year: u16 },
}

impl Period {
    /// Build a period from raw user input; month `"0"` selects the whole year
    pub fn parse(year: &str, month: &str) -> Result<Self> {
        let year_str = year.trim();
        if year_str.len() != 4 || !year_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ExtractorError::invalid_input(
                "year",
                format!("'{}' is not a four digit year", year_str),
            ));
        }
        let year = year_str
            .parse::<u16>()
            .map_err(|e| ExtractorError::invalid_input("year", e.to_string()))?;

        let month_str = month.trim();
        if month_str == WHOLE_YEAR_MONTH {
            return Ok(Period::Year { year });
        }

        let month = month_str.parse::<u8>().map_err(|_| {
            ExtractorError::invalid_input(
                "month",
                format!("'{}' is not a number between 0 and 12", month_str),
            )
        })?;

        match month {
            0 => Ok(Period::Year { year }),
            1..=12 => Ok(Period::Month { year, month }),
            _ => Err(ExtractorError::invalid_input(
                "month",
                format!("'{}' is not a number between 0 and 12", month_str),
            )),
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            Period::Month { year, .. } | Period::Year { year } => *year,
        }
    }

    pub fn is_annual(&self) -> bool {
        matches!(self, Period::Year { .. })
    }

    /// Report file name, e.g. `hikaru_24.txt` or `hikaru_2403.txt`
    pub fn report_file_name(&self, username: &str) -> String {
        let short_year = self.year() % 100;
        match self {
            Period::Year { .. } => format!("{}_{:02}.txt", username, short_year),
            Period::Month { month, .. } => {
                format!("{}_{:02}{:02}.txt", username, short_year, month)
            }
        }
    }

    /// Human readable label used in the report header
    pub fn label(&self) -> String {
        match self {
            Period::Year { year } => format!("Year {}", year),
            Period::Month { year, month } => format!("{}-{:02}", year, month),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
