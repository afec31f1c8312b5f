//! Archive processing driver.
//!
//! Feeds each game block of a retrieved archive through the parser and
//! the time-control filter, numbers the accepted games and folds them
//! into the run aggregate, strictly in archive order.

use crate::models::ParsedGame;
use crate::pgn::{GameParser, TimeControlFilter, split_games};
use crate::stats::GameStats;
use indicatif::ProgressBar;
use tracing::{debug, info};

/// Accepted game with its 1-based position among accepted games
#[derive(Debug, Clone, PartialEq)]
pub struct GameEntry {
    pub number: usize,
    pub game: ParsedGame,
}

/// What happened to one game block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Parsed, matched the filter and counted; carries the entry number
    Accepted(usize),
    /// Parsed but rejected by the time-control filter
    Filtered,
    /// No tag section, not counted as a processed block
    Skipped,
}

/// Counters for one processing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Blocks that parsed into a game
    pub processed: usize,
    pub accepted: usize,
    pub filtered: usize,
    pub skipped: usize,
}

/// Sequential driver owning the parser, filter, aggregate and entries
#[derive(Debug, Clone)]
pub struct ArchiveProcessor {
    parser: GameParser,
    filter: TimeControlFilter,
    stats: GameStats,
    entries: Vec<GameEntry>,
    blocks_processed: usize,
}

impl ArchiveProcessor {
    pub fn new(username: &str, filter: TimeControlFilter) -> Self {
        Self {
            parser: GameParser::new(username),
            filter,
            stats: GameStats::new(),
            entries: Vec::new(),
            blocks_processed: 0,
        }
    }

    pub fn username(&self) -> &str {
        self.parser.username()
    }

    pub fn filter(&self) -> &TimeControlFilter {
        &self.filter
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    /// Blocks that parsed into a game, accepted or not
    pub fn blocks_processed(&self) -> usize {
        self.blocks_processed
    }

    pub fn accepted_count(&self) -> usize {
        self.entries.len()
    }

    /// Parse, filter and count one game block
    pub fn process_block(&mut self, block: &str) -> BlockOutcome {
        let Some(game) = self.parser.parse(block) else {
            return BlockOutcome::Skipped;
        };
        self.blocks_processed += 1;

        if !self.filter.matches(&game.time_control_raw) {
            debug!(
                "Game {} skipped (time control {})",
                self.blocks_processed, game.time_control_raw
            );
            return BlockOutcome::Filtered;
        }

        self.stats.add_game(&game);
        let number = self.entries.len() + 1;
        debug!("Game {} added as entry {}", self.blocks_processed, number);
        self.entries.push(GameEntry { number, game });
        BlockOutcome::Accepted(number)
    }

    /// Segment an archive and process every block in order
    pub fn process_archive(&mut self, archive: &str) -> ProcessingSummary {
        self.process_archive_with_progress(archive, &ProgressBar::hidden())
    }

    /// As [`ArchiveProcessor::process_archive`], advancing `progress` per block
    pub fn process_archive_with_progress(
        &mut self,
        archive: &str,
        progress: &ProgressBar,
    ) -> ProcessingSummary {
        let blocks = split_games(archive);
        progress.set_length(blocks.len() as u64);

        let mut summary = ProcessingSummary::default();
        for block in blocks {
            match self.process_block(block) {
                BlockOutcome::Accepted(_) => {
                    summary.processed += 1;
                    summary.accepted += 1;
                }
                BlockOutcome::Filtered => {
                    summary.processed += 1;
                    summary.filtered += 1;
                }
                BlockOutcome::Skipped => summary.skipped += 1,
            }
            progress.inc(1);
        }

        info!(
            "Finished processing {} of {} game(s)",
            summary.accepted, summary.processed
        );
        summary
    }

    /// Hand back the aggregate and accepted entries
    pub fn into_parts(self) -> (GameStats, Vec<GameEntry>) {
        (self.stats, self.entries)
    }
}
