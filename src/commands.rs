//! Top-level extraction command
//!
//! Retrieves the archive for already resolved inputs, drives the processor
//! and writes the report, keeping the user informed on the console.

use crate::cli::{Args, RunInputs};
use crate::error::{ExtractorError, Result};
use crate::fetch::ArchiveClient;
use crate::processor::ArchiveProcessor;
use crate::report::{
    ReportFormatter, format_change, format_decimal, write_report_file, write_summary_json,
};
use crate::stats::GameStats;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How a run ended when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Retrieval returned no games at all
    NoData,
    /// Games were found but none passed the filter
    NoMatches { processed: usize },
    /// Report written
    Written { path: PathBuf, games: usize },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the level derived from `-v`/`-q`. Quiet runs get
/// compact lines without the uptime column.
pub fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::{
        EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chess_extractor={}", log_level)));

    let base = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);
    let output = if args.quiet {
        base.compact().boxed()
    } else {
        base.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Run one extraction end to end
///
/// `inputs` must already be resolved: prompting reads stdin synchronously
/// and would block the runtime thread that also watches for Ctrl+C.
pub async fn run(args: Args, inputs: RunInputs) -> anyhow::Result<RunOutcome> {
    let config = args.to_config();
    config.validate()?;
    info!("Running with {:?}", inputs);

    let client = ArchiveClient::new(&config)?;
    let period_message = if inputs.period.is_annual() {
        format!("Fetching ALL games for year {}...", inputs.period.year())
    } else {
        format!("Fetching games for {}...", inputs.period.label())
    };
    if args.show_progress() {
        println!("{}", period_message.bright_green().bold());
    }

    let archive = client.fetch_period(&inputs.username, &inputs.period).await?;
    let outcome = extract(&args, &inputs, &config.output_dir, config.report_width, &archive)?;
    Ok(outcome)
}

/// Process a retrieved archive and write the report
pub fn extract(
    args: &Args,
    inputs: &RunInputs,
    output_dir: &Path,
    report_width: usize,
    archive: &str,
) -> Result<RunOutcome> {
    if archive.trim().is_empty() {
        println!("{}", "No games found or the user/month/year is invalid.".yellow());
        return Ok(RunOutcome::NoData);
    }

    if args.show_progress() {
        println!("{}", "Processing games...".bright_white());
    }
    let progress = if args.show_progress() {
        create_progress_bar(0, "games")
    } else {
        ProgressBar::hidden()
    };

    let mut processor = ArchiveProcessor::new(&inputs.username, inputs.filter.clone());
    let summary = processor.process_archive_with_progress(archive, &progress);
    progress.finish_and_clear();

    if summary.accepted == 0 {
        println!(
            "{}",
            "No games match the specified time control filter.".yellow()
        );
        return Ok(RunOutcome::NoMatches {
            processed: summary.processed,
        });
    }
    println!(
        "Finished processing {} of {} game(s).",
        summary.accepted.to_string().bright_cyan(),
        summary.processed
    );

    let (stats, entries) = processor.into_parts();
    let path = write_report_file(
        &ReportFormatter::new(report_width),
        output_dir,
        &entries,
        &stats,
        inputs.username.trim(),
        &inputs.period,
    )?;

    if let Some(json_path) = &args.json {
        write_summary_json(json_path, &stats.summary())?;
        println!("Statistics summary saved to: {}", json_path.display());
    }

    println!();
    println!(
        "{} {}",
        "Success! Games saved to:".bright_green().bold(),
        path.display().to_string().bright_white()
    );
    print_console_summary(&stats);

    Ok(RunOutcome::Written {
        path,
        games: entries.len(),
    })
}

/// Short summary printed after a successful run
pub fn print_console_summary(stats: &GameStats) {
    println!();
    println!("{}", "=== SUMMARY ===".bright_green().bold());
    println!("Total Games Processed: {}", stats.total_games());
    println!(
        "Win Rate: {}%",
        format_decimal(stats.overall().win_rate()).bright_cyan()
    );
    println!(
        "Average Moves per Game: {}",
        format_decimal(stats.average_moves())
    );

    if !stats.game_types().is_empty() {
        println!();
        println!("{}", "Game Types Played:".bright_white());
        for (game_type, type_stats) in stats.game_types() {
            println!("  {}: {} games", game_type, type_stats.total());
        }
    }

    if !stats.rating_trackers().is_empty() {
        println!();
        println!("{}", "Rating Changes:".bright_white());
        for (game_type, tracker) in stats.rating_trackers() {
            let change = tracker.rating_change();
            let change_str = format_change(change);
            let colored_change = if change >= 0 {
                change_str.bright_green()
            } else {
                change_str.bright_red()
            };
            println!("  {}: {}", game_type, colored_change);
        }
    }
}

/// Likely causes shown when retrieval fails
pub fn failure_hints(error: &anyhow::Error) -> Option<[&'static str; 4]> {
    let retrieval = error
        .downcast_ref::<ExtractorError>()
        .is_some_and(ExtractorError::is_retrieval_failure);
    retrieval.then_some([
        "The username might be incorrect",
        "There are no games for the specified year/month",
        "The year might be in the future",
        "Network connection issue",
    ])
}
