//! Time-control normalization, categorization and filtering.
//!
//! Chess.com writes live time controls as base seconds with an optional
//! increment (`600`, `180+2`). Any other form, including the daily
//! moves-per-period `1/86400`, does not parse and is categorized Unknown.

use crate::constants::{
    DAILY_EVENT_MARKER, MATCH_ALL_FILTER, UNKNOWN_TIME_CONTROL, UNKNOWN_VALUE, thresholds,
};
use crate::models::GameType;

/// Base time and increment of a live time control, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControl {
    pub base_seconds: u32,
    pub increment_seconds: u32,
}

impl TimeControl {
    /// Parse `"<base>"` or `"<base>+<increment>"`; anything else is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == UNKNOWN_VALUE || raw == "-" {
            return None;
        }

        match raw.split_once('+') {
            None => Some(Self {
                base_seconds: raw.parse().ok()?,
                increment_seconds: 0,
            }),
            Some((base, rest)) => {
                // Extra "+" sections after the increment are ignored
                let increment = rest.split('+').next().unwrap_or_default();
                Some(Self {
                    base_seconds: base.parse().ok()?,
                    increment_seconds: increment.parse().ok()?,
                })
            }
        }
    }

    /// Whole minutes of base time, rounded down
    pub fn base_minutes(&self) -> u32 {
        self.base_seconds / 60
    }

    /// `"<minutes>|<increment>"`, e.g. `"3|2"`
    pub fn display(&self) -> String {
        format!("{}|{}", self.base_minutes(), self.increment_seconds)
    }

    /// Category by base minutes; bounds are inclusive and checked in order
    pub fn category(&self) -> GameType {
        let minutes = self.base_minutes();
        if minutes <= thresholds::BULLET_MAX_MINUTES {
            GameType::Bullet
        } else if minutes <= thresholds::BLITZ_MAX_MINUTES {
            GameType::Blitz
        } else if minutes <= thresholds::RAPID_MAX_MINUTES {
            GameType::Rapid
        } else if minutes <= thresholds::CLASSICAL_MAX_MINUTES {
            GameType::Classical
        } else {
            GameType::Correspondence
        }
    }
}

/// Display form of a raw time control, `"?|?"` when unparseable
pub fn format_time_control(raw: &str) -> String {
    TimeControl::parse(raw)
        .map(|tc| tc.display())
        .unwrap_or_else(|| UNKNOWN_TIME_CONTROL.to_string())
}

/// Game type from the raw time control and the Event tag
pub fn classify_game(raw: &str, event: &str) -> GameType {
    match TimeControl::parse(raw) {
        Some(_) if event.contains(DAILY_EVENT_MARKER) => GameType::Daily,
        Some(tc) => tc.category(),
        None => GameType::Unknown,
    }
}

/// User supplied time-control filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimeControlFilter {
    /// Accept every game
    #[default]
    All,
    /// Exact match, or prefix match when the pattern has no increment
    Pattern(String),
}

impl TimeControlFilter {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed == MATCH_ALL_FILTER {
            TimeControlFilter::All
        } else {
            TimeControlFilter::Pattern(trimmed.to_string())
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        match self {
            TimeControlFilter::All => true,
            TimeControlFilter::Pattern(pattern) => matches_time_control(raw, pattern),
        }
    }
}

impl std::fmt::Display for TimeControlFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeControlFilter::All => f.write_str("all games"),
            TimeControlFilter::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

/// Match a game's raw time control against a non-wildcard filter string
///
/// Unknown time controls (`"?"`, `"-"`) never match. An exact match always
/// counts. A base-only filter also accepts base-only games it prefixes
/// (`"60"` accepts `"600"`); a game with an increment needs an exact match.
pub fn matches_time_control(raw: &str, filter: &str) -> bool {
    if raw == UNKNOWN_VALUE || raw == "-" {
        return false;
    }

    let game = raw.trim();
    let filter = filter.trim();

    if game == filter {
        return true;
    }

    !filter.contains('+') && !game.contains('+') && game.starts_with(filter)
}
