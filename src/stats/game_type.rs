//! Per game-type and per colour result breakdowns.

use super::rating::{GameDate, parse_game_date};
use crate::constants::UNKNOWN_VALUE;
use crate::models::{GameOutcome, GameType};
use serde::Serialize;

/// Percentage of `part` in `total`, 0 when `total` is 0
pub fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Won/lost/draw counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResultCounts {
    pub games: u32,
    pub won: u32,
    pub lost: u32,
    pub draw: u32,
}

impl ResultCounts {
    /// Count one game; unknown outcomes only raise the game total
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Won => self.won += 1,
            GameOutcome::Lost => self.lost += 1,
            GameOutcome::Draw => self.draw += 1,
            GameOutcome::Unknown => {}
        }
    }

    pub fn win_rate(&self) -> f64 {
        percentage(self.won, self.games)
    }

    pub fn loss_rate(&self) -> f64 {
        percentage(self.lost, self.games)
    }

    pub fn draw_rate(&self) -> f64 {
        percentage(self.draw, self.games)
    }
}

/// Breakdown for games of one type with a valid user rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameTypeStats {
    pub game_type: GameType,
    pub results: ResultCounts,
    pub total_moves: u64,
    pub ratings: Vec<u32>,
    pub dates: Vec<String>,
    min_rating: Option<u32>,
    max_rating: Option<u32>,
    latest_rating: u32,
    #[serde(skip)]
    latest_date: Option<GameDate>,
}

impl GameTypeStats {
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            results: ResultCounts::default(),
            total_moves: 0,
            ratings: Vec::new(),
            dates: Vec::new(),
            min_rating: None,
            max_rating: None,
            latest_rating: 0,
            latest_date: None,
        }
    }

    /// Count one rated game; a zero rating leaves the breakdown untouched
    pub fn add_game(&mut self, outcome: GameOutcome, move_count: u32, rating: u32, date: &str) {
        if rating == 0 {
            return;
        }

        self.results.record(outcome);
        self.total_moves += u64::from(move_count);
        self.ratings.push(rating);
        self.min_rating = Some(self.min_rating.map_or(rating, |min| min.min(rating)));
        self.max_rating = Some(self.max_rating.map_or(rating, |max| max.max(rating)));

        if date != UNKNOWN_VALUE {
            self.dates.push(date.to_string());
            self.update_latest(rating, date);
        }
    }

    /// Keep the rating of the most recent date seen; later arrivals win ties
    fn update_latest(&mut self, rating: u32, date: &str) {
        let parsed = parse_game_date(date);
        if self.latest_rating == 0 || parsed >= self.latest_date {
            self.latest_rating = rating;
            self.latest_date = parsed;
        }
    }

    pub fn total(&self) -> u32 {
        self.results.games
    }

    pub fn average_moves(&self) -> f64 {
        if self.results.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.results.games)
        }
    }

    /// Mean rating truncated to an integer
    pub fn average_rating(&self) -> u32 {
        if self.ratings.is_empty() {
            return 0;
        }
        let sum: u64 = self.ratings.iter().map(|&r| u64::from(r)).sum();
        (sum / self.ratings.len() as u64) as u32
    }

    pub fn min_rating(&self) -> u32 {
        self.min_rating.unwrap_or(0)
    }

    pub fn max_rating(&self) -> u32 {
        self.max_rating.unwrap_or(0)
    }

    pub fn rating_range(&self) -> u32 {
        match (self.min_rating, self.max_rating) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }

    /// Rating of the latest dated game, 0 if no game had a date
    pub fn latest_rating(&self) -> u32 {
        self.latest_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_counts_rates() {
        let mut counts = ResultCounts::default();
        counts.record(GameOutcome::Won);
        counts.record(GameOutcome::Won);
        counts.record(GameOutcome::Lost);
        counts.record(GameOutcome::Unknown);

        assert_eq!(counts.games, 4);
        assert_eq!(counts.win_rate(), 50.0);
        assert_eq!(counts.loss_rate(), 25.0);
        assert_eq!(counts.draw_rate(), 0.0);
        assert_eq!(ResultCounts::default().win_rate(), 0.0);
    }

    #[test]
    fn test_game_type_stats_ratings() {
        let mut stats = GameTypeStats::new(GameType::Blitz);
        stats.add_game(GameOutcome::Won, 30, 1200, "2024.01.01");
        stats.add_game(GameOutcome::Lost, 40, 1250, "2024.03.15");
        stats.add_game(GameOutcome::Draw, 50, 1180, "2024.02.10");

        assert_eq!(stats.total(), 3);
        assert_eq!(stats.average_moves(), 40.0);
        assert_eq!(stats.min_rating(), 1180);
        assert_eq!(stats.max_rating(), 1250);
        assert_eq!(stats.rating_range(), 70);
        assert_eq!(stats.average_rating(), 1210);
        assert_eq!(stats.latest_rating(), 1250);
    }

    #[test]
    fn test_zero_rating_is_ignored() {
        let mut stats = GameTypeStats::new(GameType::Rapid);
        stats.add_game(GameOutcome::Won, 30, 0, "2024.01.01");

        assert_eq!(stats.total(), 0);
        assert_eq!(stats.min_rating(), 0);
        assert_eq!(stats.rating_range(), 0);
        assert!(stats.dates.is_empty());
    }

    #[test]
    fn test_undated_games_do_not_set_latest() {
        let mut stats = GameTypeStats::new(GameType::Rapid);
        stats.add_game(GameOutcome::Won, 30, 1500, "?");

        assert_eq!(stats.total(), 1);
        assert_eq!(stats.latest_rating(), 0);
        assert_eq!(stats.ratings, vec![1500]);
    }
}
