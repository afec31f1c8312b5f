//! Application constants for the chess game extractor
//!
//! PGN tag names, sentinel values, result tokens, category thresholds and
//! network defaults shared across the crate.

// =============================================================================
// Sentinels
// =============================================================================

/// Value substituted for any tag that is absent or empty
pub const UNKNOWN_VALUE: &str = "?";

/// Display form of a time control that could not be parsed
pub const UNKNOWN_TIME_CONTROL: &str = "?|?";

/// Filter value that accepts every game
pub const MATCH_ALL_FILTER: &str = "0";

/// Month value that selects the whole year
pub const WHOLE_YEAR_MONTH: &str = "0";

// =============================================================================
// PGN Tags
// =============================================================================

pub mod tags {
    pub const WHITE: &str = "White";
    pub const BLACK: &str = "Black";
    pub const RESULT: &str = "Result";
    pub const TIME_CONTROL: &str = "TimeControl";
    pub const EVENT: &str = "Event";
    pub const WHITE_ELO: &str = "WhiteElo";
    pub const BLACK_ELO: &str = "BlackElo";
    pub const UTC_DATE: &str = "UTCDate";
    pub const DATE: &str = "Date";
}

/// PGN game termination markers
pub mod results {
    pub const WHITE_WINS: &str = "1-0";
    pub const BLACK_WINS: &str = "0-1";
    pub const DRAW: &str = "1/2-1/2";
}

// =============================================================================
// Game Type Classification
// =============================================================================

/// Inclusive upper bounds in whole minutes of base time
pub mod thresholds {
    pub const BULLET_MAX_MINUTES: u32 = 1;
    pub const BLITZ_MAX_MINUTES: u32 = 3;
    pub const RAPID_MAX_MINUTES: u32 = 10;
    pub const CLASSICAL_MAX_MINUTES: u32 = 30;
}

/// Substring of the Event tag that marks a daily game
pub const DAILY_EVENT_MARKER: &str = "Daily";

// =============================================================================
// Network Defaults
// =============================================================================

pub const DEFAULT_API_BASE_URL: &str = "https://api.chess.com/pub";
pub const DEFAULT_USER_AGENT: &str = concat!("chess_extractor/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const ACCEPT_HEADER: &str = "text/plain, application/json";

// =============================================================================
// Report Layout
// =============================================================================

pub const DEFAULT_REPORT_WIDTH: usize = 60;
pub const REPORT_TITLE: &str = "CHESS.COM GAME STATISTICS";
pub const REPORT_FOOTER: &str = "Analysis generated by chess_extractor";
