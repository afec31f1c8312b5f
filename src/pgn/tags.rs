//! PGN tag extraction.
//!
//! Tags have the form `[Key "Value"]`. Lookup is by exact key and the first
//! occurrence wins; an absent key (or an empty value) yields `"?"`.

use crate::constants::UNKNOWN_VALUE;
use regex::Regex;
use std::sync::LazyLock;

/// Any `[Key "Value"]` tag with a non-empty value
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(\w+) "([^"]+)"\]"#).expect("valid tag pattern"));

/// Extract the value of tag `key` from a block of header lines
pub fn extract_tag(headers: &str, key: &str) -> String {
    find_tag(headers, key)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_VALUE.to_string())
}

/// Borrowing variant of [`extract_tag`] returning `None` when absent
pub fn find_tag<'a>(headers: &'a str, key: &str) -> Option<&'a str> {
    TAG.captures_iter(headers)
        .find(|caps| &caps[1] == key)
        .and_then(|caps| caps.get(2))
        .map(|value| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &str = "[Event \"Live Chess\"]\n\
                           [White \"Alice\"]\n\
                           [Black \"Bob\"]\n\
                           [WhiteElo \"1520\"]\n\
                           [TimeControl \"180+2\"]\n";

    #[test]
    fn test_extract_present_tags() {
        assert_eq!(extract_tag(HEADERS, "Event"), "Live Chess");
        assert_eq!(extract_tag(HEADERS, "White"), "Alice");
        assert_eq!(extract_tag(HEADERS, "TimeControl"), "180+2");
    }

    #[test]
    fn test_missing_tag_is_unknown() {
        assert_eq!(extract_tag(HEADERS, "BlackElo"), "?");
        assert_eq!(extract_tag("", "White"), "?");
    }

    #[test]
    fn test_key_must_match_exactly() {
        // "Elo" is a suffix of WhiteElo but is not itself a tag
        assert_eq!(extract_tag(HEADERS, "Elo"), "?");
        assert_eq!(extract_tag(HEADERS, "WhiteElo"), "1520");
        assert_eq!(extract_tag("[WhiteElo \"1520\"]", "White"), "?");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let headers = "[Date \"2024.01.01\"]\n[Date \"2024.02.02\"]\n";
        assert_eq!(extract_tag(headers, "Date"), "2024.01.01");
    }

    #[test]
    fn test_lookup_scans_past_other_and_empty_tags() {
        let headers = "[Site \"\"]\n[Event \"Rated\"]\n[Site \"Chess.com\"]\n[Site \"lichess\"]\n";
        assert_eq!(find_tag(headers, "Site"), Some("Chess.com"));
        assert_eq!(find_tag(headers, "Event"), Some("Rated"));
        assert_eq!(find_tag(headers, "Round"), None);
        // Keys are compared whole, not as regex fragments
        assert_eq!(find_tag(headers, "S.te"), None);
    }

    #[test]
    fn test_empty_value_is_unknown() {
        assert_eq!(extract_tag("[Site \"\"]", "Site"), "?");
        assert_eq!(find_tag("[Site \"\"]", "Site"), None);
    }
}
