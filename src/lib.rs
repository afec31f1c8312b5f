//! Chess.com game archive extractor
//!
//! Downloads a player's monthly or annual game archive, parses every PGN
//! game block, filters by time control and writes a move listing with a
//! statistics report.
//!
//! This library provides tools for:
//! - Splitting archives into games and extracting tags and moves ([`pgn`])
//! - Categorizing and filtering time controls
//! - Aggregating results, move counts and rating history ([`stats`])
//! - Retrieving archives from the published-data API ([`fetch`])
//! - Rendering the text report ([`report`])

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pgn;
pub mod processor;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use error::{ExtractorError, Result};
pub use models::{Color, GameOutcome, GameType, ParsedGame, Period};
pub use processor::{ArchiveProcessor, BlockOutcome, GameEntry, ProcessingSummary};
pub use stats::{GameStats, RatingTracker, StatsSummary};
