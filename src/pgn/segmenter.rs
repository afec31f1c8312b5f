//! Splitting of concatenated PGN archives into per-game blocks.

use regex::Regex;
use std::sync::LazyLock;

/// A blank line (possibly holding only whitespace) directly before a tag line
static BLOCK_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\[").expect("valid block boundary pattern"));

/// Split an archive into trimmed, non-empty game blocks in archive order
///
/// The opening `[` of the following tag section stays with the next block.
pub fn split_games(archive: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for boundary in BLOCK_BOUNDARY.find_iter(archive) {
        // Keep the bracket for the next block
        let end = boundary.end() - 1;
        push_block(&mut blocks, &archive[start..boundary.start()]);
        start = end;
    }
    push_block(&mut blocks, &archive[start..]);

    blocks
}

fn push_block<'a>(blocks: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed);
    }
}
