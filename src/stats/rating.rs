//! Chronological rating tracking per game type.
//!
//! Samples are kept in arrival order. Every reading sorts them by calendar
//! date first, so archive order never affects start/end ratings.

use crate::constants::UNKNOWN_VALUE;
use serde::Serialize;

/// `(year, month, day)` as written in the PGN date, compared field by field
pub type GameDate = (u32, u32, u32);

/// Parse a PGN `YYYY.MM.DD` date into its integer fields
///
/// Only the shape is checked, not the calendar: `2024.02.30` parses and
/// sorts between February 28th and March 1st. `None` when malformed.
pub fn parse_game_date(date: &str) -> Option<GameDate> {
    let mut fields = date.trim().split('.').map(|field| field.parse::<u32>().ok());
    let year = fields.next()??;
    let month = fields.next()??;
    let day = fields.next()??;
    if fields.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// One observed rating with the date of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSample {
    pub rating: u32,
    pub date: String,
}

/// Rating observations for one game type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RatingTracker {
    samples: Vec<RatingSample>,
}

impl RatingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample; zero ratings and unknown dates are ignored
    pub fn add_rating(&mut self, rating: u32, date: &str) -> bool {
        if rating == 0 || date == UNKNOWN_VALUE || date.is_empty() {
            return false;
        }
        self.samples.push(RatingSample {
            rating,
            date: date.to_string(),
        });
        true
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in arrival order
    pub fn samples(&self) -> &[RatingSample] {
        &self.samples
    }

    /// Samples sorted by date, ascending
    ///
    /// The sort is stable: equal dates keep arrival order, and malformed
    /// dates compare equal to each other and sort before valid ones.
    pub fn chronological(&self) -> Vec<&RatingSample> {
        let mut sorted: Vec<&RatingSample> = self.samples.iter().collect();
        sorted.sort_by_key(|sample| parse_game_date(&sample.date));
        sorted
    }

    /// Rating of the chronologically first sample, 0 when empty
    pub fn starting_rating(&self) -> u32 {
        self.chronological()
            .first()
            .map(|sample| sample.rating)
            .unwrap_or(0)
    }

    /// Rating of the chronologically last sample, 0 when empty
    pub fn latest_rating(&self) -> u32 {
        self.chronological()
            .last()
            .map(|sample| sample.rating)
            .unwrap_or(0)
    }

    /// Latest minus starting rating; 0 with fewer than two samples
    pub fn rating_change(&self) -> i64 {
        if self.samples.len() < 2 {
            return 0;
        }
        i64::from(self.latest_rating()) - i64::from(self.starting_rating())
    }

    pub fn highest_rating(&self) -> u32 {
        self.samples
            .iter()
            .map(|sample| sample.rating)
            .max()
            .unwrap_or(0)
    }

    pub fn lowest_rating(&self) -> u32 {
        self.samples
            .iter()
            .map(|sample| sample.rating)
            .min()
            .unwrap_or(0)
    }

    /// Mean rating truncated to an integer, 0 when empty
    pub fn average_rating(&self) -> u32 {
        if self.samples.is_empty() {
            return 0;
        }
        let sum: u64 = self.samples.iter().map(|s| u64::from(s.rating)).sum();
        (sum / self.samples.len() as u64) as u32
    }
}
