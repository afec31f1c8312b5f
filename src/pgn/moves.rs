//! Move text cleaning and move counting.

use regex::Regex;
use std::sync::LazyLock;

/// `{[%clk 0:02:59.9]}` and `{[%eval 0.17]}` comment spans
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*\[%(?:clk|eval) [^}]*\}\}?").expect("valid annotation pattern")
});

/// One or more game termination markers at the very end of the text
static TRAILING_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\s*(?:1-0|0-1|1/2-1/2))+\s*$").expect("valid trailing result pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// `12.` move numbers and `12...` black continuation markers
static MOVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(?:\.\.)?$").expect("valid move number pattern"));

static RESULT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:1-0|0-1|1/2-1/2)$").expect("valid result token pattern"));

/// Strip clock/eval annotations and the trailing result, then collapse whitespace
pub fn clean_moves(move_text: &str) -> String {
    let without_annotations = ANNOTATION.replace_all(move_text, "");
    let without_result = TRAILING_RESULT.replace(&without_annotations, "");
    WHITESPACE
        .replace_all(&without_result, " ")
        .trim()
        .to_string()
}

/// Number of full moves in cleaned move text
///
/// Every token other than a move number, a continuation marker or a result
/// token counts as one ply; two plies make one full move.
pub fn count_full_moves(moves: &str) -> u32 {
    let plies = moves
        .split_whitespace()
        .filter(|token| !MOVE_NUMBER.is_match(token) && !RESULT_TOKEN.is_match(token))
        .count();
    (plies / 2) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHESS_COM_MOVES: &str = "1. e4 {[%clk 0:02:59.9]} 1... e5 {[%clk 0:02:58.1]} \
                                   2. Nf3 {[%clk 0:02:57]} 2... Nc6 {[%clk 0:02:55.4]} \
                                   3. Bb5 {[%clk 0:02:50]} 1-0";

    #[test]
    fn test_clean_removes_clocks_and_result() {
        assert_eq!(
            clean_moves(CHESS_COM_MOVES),
            "1. e4 1... e5 2. Nf3 2... Nc6 3. Bb5"
        );
    }

    #[test]
    fn test_clean_removes_eval_annotations() {
        let text = "1. d4 {[%eval 0.2]} d5 {[%eval 0.25] [%clk 0:10:00]} 1/2-1/2";
        assert_eq!(clean_moves(text), "1. d4 d5");
    }

    #[test]
    fn test_clean_keeps_other_comments() {
        let text = "1. e4 {best by test} e5 0-1";
        assert_eq!(clean_moves(text), "1. e4 {best by test} e5");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            CHESS_COM_MOVES,
            "1. e4 e5 1-0 1-0",
            "  1.  d4\n\n d5   ",
            "",
            "1-0",
        ];
        for sample in samples {
            let once = clean_moves(sample);
            assert_eq!(clean_moves(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_result_only_stripped_at_end() {
        assert_eq!(clean_moves("1. e4 1-0 e5"), "1. e4 1-0 e5");
    }

    #[test]
    fn test_count_full_moves() {
        let cleaned = clean_moves(CHESS_COM_MOVES);
        // e4 e5 Nf3 Nc6 Bb5 -> five plies
        assert_eq!(count_full_moves(&cleaned), 2);
        assert_eq!(count_full_moves("1. e4 e5 2. Nf3 Nc6"), 2);
    }

    #[test]
    fn test_count_skips_result_tokens() {
        assert_eq!(count_full_moves("1. e4 e5 1/2-1/2"), 1);
    }

    #[test]
    fn test_count_empty_text() {
        assert_eq!(count_full_moves(""), 0);
        assert_eq!(count_full_moves("   "), 0);
    }
}
