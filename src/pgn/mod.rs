//! PGN archive parsing for Chess.com game downloads
//!
//! Turns a raw multi-game archive into structured per-game records without
//! ever failing on malformed input.
//!
//! ## Architecture
//!
//! - [`segmenter`] - Splits an archive into individual game blocks
//! - [`tags`] - `[Key "Value"]` tag extraction
//! - [`timecontrol`] - Time-control display, category and filter matching
//! - [`moves`] - Annotation stripping and full-move counting
//! - [`game`] - Single game parsing and user result resolution
//!
//! ## Usage
//!
//! ```rust
//! use chess_extractor::pgn::{GameParser, split_games};
//!
//! let archive = "[White \"alice\"]\n[Black \"bob\"]\n[Result \"1-0\"]\n\n1. e4 e5 1-0\n";
//! let parser = GameParser::new("Alice");
//! let games: Vec<_> = split_games(archive)
//!     .into_iter()
//!     .filter_map(|block| parser.parse(block))
//!     .collect();
//!
//! assert_eq!(games.len(), 1);
//! assert_eq!(games[0].outcome.label(), "(won)");
//! ```

pub mod game;
pub mod moves;
pub mod segmenter;
pub mod tags;
pub mod timecontrol;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use game::{GameParser, parse_game, split_sections};
pub use moves::{clean_moves, count_full_moves};
pub use segmenter::split_games;
pub use tags::extract_tag;
pub use timecontrol::{
    TimeControl, TimeControlFilter, classify_game, format_time_control, matches_time_control,
};
