//! Tests for the run-wide aggregate

use super::game;
use crate::models::{Color, GameOutcome, GameType};
use crate::stats::GameStats;

#[test]
fn test_empty_aggregate() {
    let stats = GameStats::new();

    assert_eq!(stats.total_games(), 0);
    assert_eq!(stats.average_moves(), 0.0);
    assert_eq!(stats.shortest_game(), None);
    assert_eq!(stats.median_game_length(), None);
    assert!(stats.game_types().is_empty());
    assert!(stats.rating_trackers().is_empty());
}

#[test]
fn test_unrated_game_only_touches_overall_and_colour() {
    let mut stats = GameStats::new();
    stats.add_game(&game(
        GameType::Blitz,
        GameOutcome::Won,
        Color::White,
        25,
        None,
        "2024.01.01",
    ));

    assert_eq!(stats.total_games(), 1);
    assert_eq!(stats.overall().won, 1);
    assert_eq!(stats.white().games, 1);
    assert_eq!(stats.white().won, 1);
    assert_eq!(stats.move_counts(), &[25]);
    assert!(stats.game_type(GameType::Blitz).is_none());
    assert!(stats.rating_tracker(GameType::Blitz).is_none());
}

#[test]
fn test_rated_games_feed_type_breakdown_and_tracker() {
    let games = [
        game(GameType::Blitz, GameOutcome::Won, Color::White, 30, Some(1200), "2024.01.01"),
        game(GameType::Blitz, GameOutcome::Lost, Color::Black, 40, Some(1250), "2024.03.15"),
        game(GameType::Blitz, GameOutcome::Draw, Color::White, 50, Some(1180), "2024.02.10"),
        game(GameType::Rapid, GameOutcome::Won, Color::Black, 20, Some(1400), "2024.01.05"),
    ];
    let stats: GameStats = games.iter().collect();

    let blitz = stats.game_type(GameType::Blitz).unwrap();
    assert_eq!(blitz.total(), 3);
    assert_eq!(blitz.results.won, 1);
    assert_eq!(blitz.results.lost, 1);
    assert_eq!(blitz.results.draw, 1);
    assert_eq!(stats.rating_tracker(GameType::Blitz).unwrap().rating_change(), 50);

    assert_eq!(stats.game_type(GameType::Rapid).unwrap().total(), 1);
    assert_eq!(stats.total_moves(), 140);
    assert_eq!(stats.average_moves(), 35.0);
}

#[test]
fn test_unknown_colour_is_counted_as_black() {
    let mut stats = GameStats::new();
    stats.add_game(&game(
        GameType::Rapid,
        GameOutcome::Unknown,
        Color::Unknown,
        10,
        None,
        "?",
    ));

    assert_eq!(stats.white().games, 0);
    assert_eq!(stats.black().games, 1);
    assert_eq!(stats.overall().won + stats.overall().lost + stats.overall().draw, 0);
}

#[test]
fn test_move_length_readouts() {
    let stats: GameStats = [12, 40, 25, 33]
        .into_iter()
        .map(|moves| game(GameType::Rapid, GameOutcome::Won, Color::White, moves, None, "?"))
        .collect::<Vec<_>>()
        .iter()
        .collect();

    assert_eq!(stats.shortest_game(), Some(12));
    assert_eq!(stats.longest_game(), Some(40));
    // sorted [12, 25, 33, 40], element 2
    assert_eq!(stats.median_game_length(), Some(33));
    // arrival order is preserved
    assert_eq!(stats.move_counts(), &[12, 40, 25, 33]);
}

#[test]
fn test_fold_matches_incremental_updates() {
    let games = vec![
        game(GameType::Bullet, GameOutcome::Won, Color::White, 15, Some(900), "2024.01.02"),
        game(GameType::Bullet, GameOutcome::Lost, Color::Black, 22, Some(880), "2024.01.01"),
    ];

    let folded = games.iter().fold(GameStats::new(), GameStats::with_game);
    let mut incremental = GameStats::new();
    incremental.extend(games.iter());

    assert_eq!(folded, incremental);
}

#[test]
fn test_distribution_and_summary() {
    let games = [
        game(GameType::Blitz, GameOutcome::Won, Color::White, 30, Some(1200), "2024.01.01"),
        game(GameType::Rapid, GameOutcome::Draw, Color::Black, 40, Some(1300), "2024.01.02"),
        game(GameType::Rapid, GameOutcome::Lost, Color::Black, 40, None, "2024.01.03"),
        game(GameType::Rapid, GameOutcome::Lost, Color::Black, 40, Some(1290), "2024.01.04"),
    ];
    let stats: GameStats = games.iter().collect();

    let distribution = stats.game_type_distribution();
    assert_eq!(distribution, vec![(GameType::Blitz, 1, 25.0), (GameType::Rapid, 2, 50.0)]);

    let summary = stats.summary();
    assert_eq!(summary.total_games, 4);
    assert_eq!(summary.win_rate, 25.0);
    assert_eq!(summary.rating_changes.len(), 2);
    assert_eq!(summary.rating_changes[1].game_type, GameType::Rapid);
    assert_eq!(summary.rating_changes[1].change, -10);
}
