//! Command-line interface components.

use crate::config::ExtractorConfig;
use crate::models::Period;
use crate::pgn::TimeControlFilter;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "chess_extractor")]
#[command(about = "Download Chess.com games for a player and write a move and statistics report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Chess.com username (prompted for when omitted)
    #[arg(value_name = "USERNAME")]
    pub username: Option<String>,

    /// Four digit year
    #[arg(value_name = "YEAR")]
    pub year: Option<String>,

    /// Month 1-12, or 0 for the entire year
    #[arg(value_name = "MONTH")]
    pub month: Option<String>,

    /// Time control filter, e.g. 600 or 180+2; 0 keeps all games
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Directory the report file is written into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Base URL of the published-data API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Also write the statistics summary as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Fully resolved inputs of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunInputs {
    pub username: String,
    pub period: Period,
    pub filter: TimeControlFilter,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default configuration with the command-line overrides applied
    pub fn to_config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::default();
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }
        if let Some(base) = &self.api_base {
            config = config.with_api_base_url(base.as_str());
        }
        config
    }

    /// Fill in missing positionals from stdin and validate them
    pub fn resolve_inputs(&self) -> anyhow::Result<RunInputs> {
        let stdin = std::io::stdin();
        self.resolve_inputs_from(&mut stdin.lock(), &mut std::io::stdout())
    }

    pub fn resolve_inputs_from<R, W>(&self, input: &mut R, output: &mut W) -> anyhow::Result<RunInputs>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        use prompt::{ask, or_ask};

        let username = or_ask(self.username.as_deref(), input, output, prompt::USERNAME)?;
        if username.is_empty() {
            anyhow::bail!("A Chess.com username is required");
        }
        let year = or_ask(self.year.as_deref(), input, output, prompt::YEAR)?;
        let month = or_ask(self.month.as_deref(), input, output, prompt::MONTH)?;
        let filter = match &self.filter {
            Some(filter) => filter.trim().to_string(),
            None => ask(input, output, prompt::FILTER)?,
        };

        Ok(RunInputs {
            username,
            period: Period::parse(&year, &month)?,
            filter: TimeControlFilter::parse(&filter),
        })
    }
}

/// Interactive prompting for values not given on the command line
pub mod prompt {
    use anyhow::{Context, Result};
    use colored::*;
    use std::io::{BufRead, Write};

    pub const USERNAME: &str = "Enter Chess.com username: ";
    pub const YEAR: &str = "Enter year : ";
    pub const MONTH: &str = "Enter month (0 for entire year): ";
    pub const FILTER: &str = "Enter time control filter (e.g., 600, 180+2, or 0 for all games): ";

    /// Print `message` and read one trimmed line
    pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
        write!(output, "{}", message.bright_white()).context("Failed to write prompt")?;
        output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            anyhow::bail!("Input ended before '{}' was answered", message.trim());
        }
        Ok(line.trim().to_string())
    }

    /// Use the given value when present, otherwise ask for it
    pub fn or_ask<R: BufRead, W: Write>(
        value: Option<&str>,
        input: &mut R,
        output: &mut W,
        message: &str,
    ) -> Result<String> {
        match value {
            Some(value) => Ok(value.trim().to_string()),
            None => ask(input, output, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_positional_arguments() {
        let args = Args::parse_from(["chess_extractor", "Hikaru", "2024", "3", "180+2", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");

        let inputs = args
            .resolve_inputs_from(&mut Cursor::new(""), &mut Vec::new())
            .unwrap();
        assert_eq!(inputs.username, "Hikaru");
        assert_eq!(inputs.period, Period::Month { year: 2024, month: 3 });
        assert_eq!(inputs.filter, TimeControlFilter::Pattern("180+2".to_string()));
    }

    #[test]
    fn test_missing_values_are_prompted() {
        let args = Args::parse_from(["chess_extractor", "magnus"]);
        let mut output = Vec::new();

        let inputs = args
            .resolve_inputs_from(&mut Cursor::new("2023\n0\n 0 \n"), &mut output)
            .unwrap();

        assert_eq!(inputs.period, Period::Year { year: 2023 });
        assert_eq!(inputs.filter, TimeControlFilter::All);
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Enter year"));
        assert!(prompts.contains("Enter time control filter"));
        assert!(!prompts.contains("Enter Chess.com username"));
    }

    #[test]
    fn test_invalid_inputs() {
        let bad_month = Args::parse_from(["chess_extractor", "magnus", "2023", "13", "0"]);
        assert!(bad_month.resolve_inputs_from(&mut Cursor::new(""), &mut Vec::new()).is_err());

        let no_input = Args::parse_from(["chess_extractor"]);
        assert!(no_input.resolve_inputs_from(&mut Cursor::new(""), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_config_overrides_and_quiet() {
        let args = Args::parse_from([
            "chess_extractor",
            "--output-dir",
            "/tmp/out",
            "--timeout",
            "30",
            "--api-base",
            "http://localhost:9000/pub",
            "-q",
        ]);
        let config = args.to_config();

        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.api_base_url, "http://localhost:9000/pub");
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
