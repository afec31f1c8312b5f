use chess_extractor::ExtractorError;
use chess_extractor::cli::Args;
use chess_extractor::commands;
use clap::Parser;
use colored::*;
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(e) = commands::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let inputs = match args.resolve_inputs() {
        Ok(inputs) => inputs,
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args, inputs) => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(ExtractorError::Interrupted {
                    reason: "Extraction interrupted by user".to_string(),
                }
                .into())
            }
        }
    });

    match result {
        Ok(_outcome) => {
            // Outcome has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            if let Some(hints) = commands::failure_hints(&error) {
                println!("\nPossible reasons:");
                for (i, hint) in hints.iter().enumerate() {
                    println!("{}. {}", i + 1, hint);
                }
            }
            process::exit(1);
        }
    }
}
