//! Text report generation.
//!
//! A report is one section per accepted game followed by a statistics
//! trailer. Everything is rendered into any [`Write`] sink so the file
//! writer and the tests share one code path.

use crate::constants::{REPORT_FOOTER, REPORT_TITLE, UNKNOWN_VALUE};
use crate::error::Result;
use crate::models::Period;
use crate::processor::GameEntry;
use crate::stats::{GameStats, ResultCounts, StatsSummary};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number with at most two decimals and no trailing zeros: `50`, `33.33`, `12.5`
pub fn format_decimal(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Signed rating change, `+50` / `-12` / `+0`
pub fn format_change(change: i64) -> String {
    if change >= 0 {
        format!("+{}", change)
    } else {
        change.to_string()
    }
}

/// Left-pad `text` so it sits in the middle of `width` columns
pub fn center_text(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

pub fn separator(width: usize) -> String {
    "=".repeat(width)
}

fn result_line(label: &str, counts: &ResultCounts) -> String {
    format!(
        "  {}: {} ({}%) | Loss: {} ({}%) | Draw: {} ({}%)",
        label,
        counts.won,
        format_decimal(counts.win_rate()),
        counts.lost,
        format_decimal(counts.loss_rate()),
        counts.draw,
        format_decimal(counts.draw_rate())
    )
}

/// Renders game sections and the statistics trailer
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    width: usize,
}

impl ReportFormatter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// One `--- Game n ... ---` section
    pub fn write_game<W: Write>(&self, out: &mut W, entry: &GameEntry) -> Result<()> {
        let game = &entry.game;
        let rating = game
            .user_rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| UNKNOWN_VALUE.to_string());

        writeln!(
            out,
            "--- Game {} {} {} ({}) ---",
            entry.number,
            game.outcome.label(),
            game.time_control_display,
            game.game_type
        )?;
        writeln!(
            out,
            "Color: {} | Rating: {} | Date: {}",
            game.color, rating, game.date
        )?;
        write!(out, "{}\n\n", game.moves)?;
        Ok(())
    }

    pub fn write_games<W: Write>(&self, out: &mut W, entries: &[GameEntry]) -> Result<()> {
        for entry in entries {
            self.write_game(out, entry)?;
        }
        Ok(())
    }

    /// Statistics trailer appended after the game sections
    pub fn write_statistics<W: Write>(
        &self,
        out: &mut W,
        stats: &GameStats,
        username: &str,
        period: &Period,
    ) -> Result<()> {
        let width = self.width;
        let rule = separator(width);

        write!(out, "\n{}", rule)?;
        write!(out, "\n{}", center_text(REPORT_TITLE, width))?;
        write!(
            out,
            "\n{}",
            center_text(&format!("Username: {} | Period: {}", username, period.label()), width)
        )?;
        write!(out, "\n{}", rule)?;

        self.write_section(out, "OVERALL STATISTICS", &self.overall_section(stats))?;
        self.write_section(out, "RATING CHANGES", &self.rating_section(stats))?;
        self.write_section(out, "PERFORMANCE BY GAME TYPE", &self.game_type_section(stats))?;
        self.write_section(out, "RESULTS BY COLOR", &self.color_section(stats))?;
        self.write_section(out, "ADDITIONAL STATISTICS", &self.additional_section(stats))?;

        write!(out, "\n{}", rule)?;
        write!(out, "\n{}", center_text(REPORT_FOOTER, width))?;
        writeln!(out, "\n{}", rule)?;
        Ok(())
    }

    fn write_section<W: Write>(&self, out: &mut W, title: &str, body: &str) -> Result<()> {
        write!(out, "\n\n{}", center_text(title, self.width))?;
        write!(out, "\n{}", body)?;
        Ok(())
    }

    fn overall_section(&self, stats: &GameStats) -> String {
        let overall = stats.overall();
        if overall.games == 0 {
            return "No games found.".to_string();
        }

        format!(
            "Total Games: {}\nWon: {} ({}%) | Lost: {} ({}%) | Draw: {} ({}%)\n\
             Average Moves per Game: {}\nWin Rate: {}%",
            overall.games,
            overall.won,
            format_decimal(overall.win_rate()),
            overall.lost,
            format_decimal(overall.loss_rate()),
            overall.draw,
            format_decimal(overall.draw_rate()),
            format_decimal(stats.average_moves()),
            format_decimal(overall.win_rate())
        )
    }

    fn rating_section(&self, stats: &GameStats) -> String {
        if stats.rating_trackers().is_empty() {
            return "No rating data available.".to_string();
        }

        stats
            .rating_trackers()
            .iter()
            .map(|(game_type, tracker)| {
                format!(
                    "{:<12}: {} (Start: {}, End: {}, Avg: {})\n",
                    game_type.as_str(),
                    format_change(tracker.rating_change()),
                    tracker.starting_rating(),
                    tracker.latest_rating(),
                    tracker.average_rating()
                )
            })
            .collect()
    }

    fn game_type_section(&self, stats: &GameStats) -> String {
        if stats.game_types().is_empty() {
            return "No game type data available.".to_string();
        }

        let mut body = String::new();
        for type_stats in stats.game_types().values().filter(|s| s.total() > 0) {
            body.push_str(&format!(
                "\n{} (Total: {}):\n",
                type_stats.game_type,
                type_stats.total()
            ));
            body.push_str(&result_line("Win", &type_stats.results));
            body.push('\n');
            body.push_str(&format!(
                "  Avg Moves: {} | Avg Rating: {}\n",
                format_decimal(type_stats.average_moves()),
                type_stats.average_rating()
            ));
            body.push_str(&format!(
                "  Rating Range: {} ({} - {}, Latest: {})\n",
                type_stats.rating_range(),
                type_stats.min_rating(),
                type_stats.max_rating(),
                type_stats.latest_rating()
            ));
        }
        body
    }

    fn color_section(&self, stats: &GameStats) -> String {
        let mut body = String::new();
        for (name, counts) in [("White", stats.white()), ("Black", stats.black())] {
            if counts.games == 0 {
                continue;
            }
            body.push_str(&format!("\nAs {} ({} games):\n", name, counts.games));
            body.push_str(&result_line("Win", counts));
            body.push('\n');
        }
        body
    }

    fn additional_section(&self, stats: &GameStats) -> String {
        let mut body = String::new();

        if let (Some(shortest), Some(longest), Some(median)) = (
            stats.shortest_game(),
            stats.longest_game(),
            stats.median_game_length(),
        ) {
            body.push_str(&format!("Shortest Game: {} moves\n", shortest));
            body.push_str(&format!("Longest Game: {} moves\n", longest));
            body.push_str(&format!("Median Game Length: {} moves\n", median));
        }

        let distribution = stats.game_type_distribution();
        if !distribution.is_empty() {
            body.push_str("\nGame Type Distribution:\n");
            for (game_type, total, share) in distribution {
                body.push_str(&format!(
                    "  {:<12}: {} games ({}%)\n",
                    game_type.as_str(),
                    total,
                    format_decimal(share)
                ));
            }
        }

        body
    }

    /// Whole report as a string
    pub fn render(
        &self,
        entries: &[GameEntry],
        stats: &GameStats,
        username: &str,
        period: &Period,
    ) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_games(&mut buffer, entries)?;
        self.write_statistics(&mut buffer, stats, username, period)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Write the report for `period` into `output_dir`, returning its path
pub fn write_report_file(
    formatter: &ReportFormatter,
    output_dir: &Path,
    entries: &[GameEntry],
    stats: &GameStats,
    username: &str,
    period: &Period,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(period.report_file_name(username));
    debug!("Writing report to {}", path.display());

    let mut writer = BufWriter::new(File::create(&path)?);
    formatter.write_games(&mut writer, entries)?;
    formatter.write_statistics(&mut writer, stats, username, period)?;
    writer.flush()?;

    info!("Wrote {} game(s) to {}", entries.len(), path.display());
    Ok(path)
}

/// Write the aggregate summary as pretty-printed JSON
pub fn write_summary_json(path: &Path, summary: &StatsSummary) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    info!("Wrote statistics summary to {}", path.display());
    Ok(())
}
