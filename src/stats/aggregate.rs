//! Running aggregate over all accepted games of a run.

use super::game_type::{GameTypeStats, ResultCounts, percentage};
use super::rating::RatingTracker;
use crate::models::{Color, GameType, ParsedGame};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for one extraction run
///
/// Append-only: games are added in archive order and never revised.
/// Colour and overall counters take every game; the per game-type
/// breakdowns and rating trackers only take games with a user rating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    overall: ResultCounts,
    white: ResultCounts,
    black: ResultCounts,
    total_moves: u64,
    move_counts: Vec<u32>,
    game_types: BTreeMap<GameType, GameTypeStats>,
    rating_trackers: BTreeMap<GameType, RatingTracker>,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the aggregate
    pub fn add_game(&mut self, game: &ParsedGame) {
        self.overall.record(game.outcome);
        self.total_moves += u64::from(game.move_count);
        self.move_counts.push(game.move_count);

        // Anything that is not White, including Unknown, is counted as Black
        match game.color {
            Color::White => self.white.record(game.outcome),
            Color::Black | Color::Unknown => self.black.record(game.outcome),
        }

        if let Some(rating) = game.user_rating.filter(|&rating| rating > 0) {
            self.game_types
                .entry(game.game_type)
                .or_insert_with(|| GameTypeStats::new(game.game_type))
                .add_game(game.outcome, game.move_count, rating, &game.date);

            self.rating_trackers
                .entry(game.game_type)
                .or_default()
                .add_rating(rating, &game.date);
        }
    }

    /// Consuming form of [`GameStats::add_game`] for folds
    pub fn with_game(mut self, game: &ParsedGame) -> Self {
        self.add_game(game);
        self
    }

    pub fn total_games(&self) -> u32 {
        self.overall.games
    }

    pub fn overall(&self) -> &ResultCounts {
        &self.overall
    }

    pub fn white(&self) -> &ResultCounts {
        &self.white
    }

    pub fn black(&self) -> &ResultCounts {
        &self.black
    }

    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    /// Full-move counts in arrival order
    pub fn move_counts(&self) -> &[u32] {
        &self.move_counts
    }

    pub fn game_types(&self) -> &BTreeMap<GameType, GameTypeStats> {
        &self.game_types
    }

    pub fn game_type(&self, game_type: GameType) -> Option<&GameTypeStats> {
        self.game_types.get(&game_type)
    }

    pub fn rating_trackers(&self) -> &BTreeMap<GameType, RatingTracker> {
        &self.rating_trackers
    }

    pub fn rating_tracker(&self, game_type: GameType) -> Option<&RatingTracker> {
        self.rating_trackers.get(&game_type)
    }

    pub fn average_moves(&self) -> f64 {
        if self.overall.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.overall.games)
        }
    }

    pub fn shortest_game(&self) -> Option<u32> {
        self.move_counts.iter().copied().min()
    }

    pub fn longest_game(&self) -> Option<u32> {
        self.move_counts.iter().copied().max()
    }

    /// Upper median: element `len / 2` of the sorted move counts
    pub fn median_game_length(&self) -> Option<u32> {
        if self.move_counts.is_empty() {
            return None;
        }
        let mut sorted = self.move_counts.clone();
        sorted.sort_unstable();
        Some(sorted[sorted.len() / 2])
    }

    /// Rated games per type as a share of all games
    pub fn game_type_distribution(&self) -> Vec<(GameType, u32, f64)> {
        self.game_types
            .values()
            .map(|stats| {
                (
                    stats.game_type,
                    stats.total(),
                    percentage(stats.total(), self.overall.games),
                )
            })
            .collect()
    }

    /// Snapshot of the derived figures for serialization
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_games: self.overall.games,
            overall: self.overall,
            white: self.white,
            black: self.black,
            win_rate: self.overall.win_rate(),
            average_moves: self.average_moves(),
            shortest_game: self.shortest_game(),
            longest_game: self.longest_game(),
            median_game_length: self.median_game_length(),
            game_types: self
                .game_types
                .values()
                .map(|stats| GameTypeSummary {
                    game_type: stats.game_type,
                    results: stats.results,
                    average_moves: stats.average_moves(),
                    average_rating: stats.average_rating(),
                    min_rating: stats.min_rating(),
                    max_rating: stats.max_rating(),
                    latest_rating: stats.latest_rating(),
                    share_of_games: percentage(stats.total(), self.overall.games),
                })
                .collect(),
            rating_changes: self
                .rating_trackers
                .iter()
                .map(|(game_type, tracker)| RatingChangeSummary {
                    game_type: *game_type,
                    change: tracker.rating_change(),
                    starting: tracker.starting_rating(),
                    latest: tracker.latest_rating(),
                    average: tracker.average_rating(),
                    highest: tracker.highest_rating(),
                    lowest: tracker.lowest_rating(),
                })
                .collect(),
        }
    }
}

impl<'a> Extend<&'a ParsedGame> for GameStats {
    fn extend<I: IntoIterator<Item = &'a ParsedGame>>(&mut self, iter: I) {
        for game in iter {
            self.add_game(game);
        }
    }
}

impl<'a> FromIterator<&'a ParsedGame> for GameStats {
    fn from_iter<I: IntoIterator<Item = &'a ParsedGame>>(iter: I) -> Self {
        iter.into_iter().fold(GameStats::new(), GameStats::with_game)
    }
}

/// Serializable summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_games: u32,
    pub overall: ResultCounts,
    pub white: ResultCounts,
    pub black: ResultCounts,
    pub win_rate: f64,
    pub average_moves: f64,
    pub shortest_game: Option<u32>,
    pub longest_game: Option<u32>,
    pub median_game_length: Option<u32>,
    pub game_types: Vec<GameTypeSummary>,
    pub rating_changes: Vec<RatingChangeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameTypeSummary {
    pub game_type: GameType,
    pub results: ResultCounts,
    pub average_moves: f64,
    pub average_rating: u32,
    pub min_rating: u32,
    pub max_rating: u32,
    pub latest_rating: u32,
    pub share_of_games: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingChangeSummary {
    pub game_type: GameType,
    pub change: i64,
    pub starting: u32,
    pub latest: u32,
    pub average: u32,
    pub highest: u32,
    pub lowest: u32,
}
