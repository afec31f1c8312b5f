//! Statistics aggregation over parsed games
//!
//! - [`aggregate`] - Run-wide aggregate updated once per accepted game
//! - [`game_type`] - Result counters and per game-type breakdowns
//! - [`rating`] - Chronological rating tracking per game type
//!
//! ```rust
//! use chess_extractor::pgn::parse_game;
//! use chess_extractor::stats::GameStats;
//!
//! let block = "[White \"alice\"]\n[Result \"1-0\"]\n[WhiteElo \"1500\"]\n\
//!              [TimeControl \"600\"]\n[UTCDate \"2024.01.01\"]\n\n1. e4 e5 1-0";
//! let game = parse_game(block, "alice").unwrap();
//! let stats: GameStats = std::iter::once(&game).collect();
//!
//! assert_eq!(stats.total_games(), 1);
//! assert_eq!(stats.overall().won, 1);
//! ```

pub mod aggregate;
pub mod game_type;
pub mod rating;

#[cfg(test)]
pub mod tests;

pub use aggregate::{GameStats, GameTypeSummary, RatingChangeSummary, StatsSummary};
pub use game_type::{GameTypeStats, ResultCounts, percentage};
pub use rating::{GameDate, RatingSample, RatingTracker, parse_game_date};
