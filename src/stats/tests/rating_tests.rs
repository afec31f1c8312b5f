//! Tests for chronological rating tracking

use crate::stats::rating::{RatingTracker, parse_game_date};

fn tracker(samples: &[(u32, &str)]) -> RatingTracker {
    let mut tracker = RatingTracker::new();
    for (rating, date) in samples {
        tracker.add_rating(*rating, date);
    }
    tracker
}

#[test]
fn test_change_uses_date_order_not_arrival_order() {
    let tracker = tracker(&[(1200, "2024.01.01"), (1250, "2024.03.15"), (1180, "2024.02.10")]);

    assert_eq!(tracker.rating_change(), 50);
    assert_eq!(tracker.starting_rating(), 1200);
    assert_eq!(tracker.latest_rating(), 1250);
    assert_eq!(tracker.highest_rating(), 1250);
    assert_eq!(tracker.lowest_rating(), 1180);
    assert_eq!(tracker.average_rating(), 1210);
}

#[test]
fn test_negative_change() {
    let tracker = tracker(&[(1400, "2024.05.02"), (1500, "2024.05.01")]);
    assert_eq!(tracker.rating_change(), -100);
}

#[test]
fn test_empty_tracker_reads_zero() {
    let tracker = RatingTracker::new();

    assert!(tracker.is_empty());
    assert_eq!(tracker.rating_change(), 0);
    assert_eq!(tracker.starting_rating(), 0);
    assert_eq!(tracker.latest_rating(), 0);
    assert_eq!(tracker.highest_rating(), 0);
    assert_eq!(tracker.lowest_rating(), 0);
    assert_eq!(tracker.average_rating(), 0);
}

#[test]
fn test_single_sample_has_no_change() {
    let tracker = tracker(&[(1337, "2024.01.01")]);

    assert_eq!(tracker.rating_change(), 0);
    assert_eq!(tracker.starting_rating(), 1337);
    assert_eq!(tracker.latest_rating(), 1337);
}

#[test]
fn test_rejects_zero_rating_and_unknown_date() {
    let mut tracker = RatingTracker::new();

    assert!(!tracker.add_rating(0, "2024.01.01"));
    assert!(!tracker.add_rating(1500, "?"));
    assert!(tracker.add_rating(1500, "2024.01.01"));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_same_day_keeps_arrival_order() {
    let tracker = tracker(&[(1500, "2024.01.01"), (1510, "2024.01.01"), (1490, "2024.01.01")]);

    assert_eq!(tracker.starting_rating(), 1500);
    assert_eq!(tracker.latest_rating(), 1490);
    assert_eq!(tracker.rating_change(), -10);
}

#[test]
fn test_malformed_dates_do_not_panic_and_tie() {
    let tracker = tracker(&[
        (1500, "2024.02.01"),
        (1400, "garbage"),
        (1600, "2024.01.01"),
        (1450, "2024.??.??"),
    ]);

    let ordered: Vec<u32> = tracker.chronological().iter().map(|s| s.rating).collect();
    assert_eq!(ordered, vec![1400, 1450, 1600, 1500]);
    assert_eq!(tracker.latest_rating(), 1500);
}

#[test]
fn test_parse_game_date() {
    assert_eq!(parse_game_date("2024.03.15"), Some((2024, 3, 15)));
    assert_eq!(parse_game_date(" 2024.02.30 "), Some((2024, 2, 30)));
    assert!(parse_game_date("?").is_none());
    assert!(parse_game_date("2024.03").is_none());
    assert!(parse_game_date("2024.03.15.1").is_none());
    assert!(parse_game_date("2024.3a.15").is_none());
    assert!(
        parse_game_date("2023.12.31").unwrap() < parse_game_date("2024.01.01").unwrap()
    );
}

#[test]
fn test_impossible_calendar_day_sorts_by_its_fields() {
    let tracker = tracker(&[
        (1500, "2024.03.01"),
        (1450, "2024.02.30"),
        (1400, "2024.02.28"),
        (1300, "bad date"),
    ]);

    let ordered: Vec<u32> = tracker.chronological().iter().map(|s| s.rating).collect();
    assert_eq!(ordered, vec![1300, 1400, 1450, 1500]);
}
