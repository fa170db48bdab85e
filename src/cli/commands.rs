//! CLI subcommands: setup and log management.

use anyhow::Result;
use serde::Serialize;

use super::{LogCommands, OutputFormat};
use crate::profile::ProfileDraft;
use crate::tui::app::StepOutcome;

/// Shape of the JSON report printed after the step ends.
#[derive(Debug, Serialize)]
struct SetupReport<'a> {
    outcome: &'static str,
    profile: &'a ProfileDraft,
}

/// Run the profile setup TUI and print the result.
pub(crate) async fn cmd_setup(format: OutputFormat) -> Result<()> {
    let (outcome, draft) = crate::tui::run().await?;
    tracing::info!(outcome = outcome.as_str(), "profile setup finished");

    match format {
        OutputFormat::Json => {
            let report = SetupReport {
                outcome: outcome.as_str(),
                profile: &draft,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text_report(outcome, &draft),
    }

    Ok(())
}

fn print_text_report(outcome: StepOutcome, draft: &ProfileDraft) {
    match outcome {
        StepOutcome::Completed => {
            println!("Profile step completed.\n");
            println!("  Name:     {}", draft.name);
            println!("  Username: @{}", draft.username);
            println!("  Email:    {}", draft.email);
            if !draft.avatar.is_empty() {
                println!("  Avatar:   {}", draft.avatar);
            }
            if !draft.bio.is_empty() {
                println!("  Bio:      {}", draft.bio);
            }
        }
        StepOutcome::Back => {
            println!("Returned to the previous step.");
        }
        StepOutcome::Cancelled => {
            println!("Setup cancelled.");
        }
    }
}

/// Log management commands
pub(crate) async fn cmd_logs(operation: LogCommands) -> Result<()> {
    use crate::logging;
    use std::io::{BufRead, BufReader};

    let log_dir = logging::default_log_dir();

    match operation {
        LogCommands::Status => {
            println!("Crabfolio Logging Status\n");
            println!("Log directory: {}", log_dir.display());

            if log_dir.exists() {
                let mut file_count = 0;
                let mut total_size = 0u64;

                for entry in std::fs::read_dir(&log_dir)?.flatten() {
                    let path = entry.path();
                    if path.extension().map(|e| e == "log").unwrap_or(false) {
                        file_count += 1;
                        if let Ok(metadata) = entry.metadata() {
                            total_size += metadata.len();
                        }
                    }
                }

                println!("Log files: {}", file_count);
                println!(
                    "Total size: {:.2} MB",
                    total_size as f64 / (1024.0 * 1024.0)
                );

                if let Some(newest) = logging::get_log_path() {
                    println!("Latest log: {}", newest.display());
                }
            } else {
                println!("Status: no logs found");
                println!("\nTo enable debug logging, run with the -d flag:");
                println!("   crabfolio -d");
            }

            Ok(())
        }

        LogCommands::View { lines } => {
            if let Some(log_path) = logging::get_log_path() {
                println!("Last {} lines of: {}\n", lines, log_path.display());

                let file = std::fs::File::open(&log_path)?;
                let reader = BufReader::new(file);

                let all_lines: Vec<String> = reader.lines().map_while(Result::ok).collect();
                let start = all_lines.len().saturating_sub(lines);

                for line in &all_lines[start..] {
                    println!("{}", line);
                }

                if all_lines.is_empty() {
                    println!("(empty log file)");
                }
            } else {
                println!("No log files found.\n");
                println!("Run crabfolio with the -d flag to enable debug logging:");
                println!("   crabfolio -d");
            }

            Ok(())
        }

        LogCommands::Clean { days } => {
            println!("Cleaning up log files older than {} days...\n", days);

            match logging::cleanup_old_logs(days) {
                Ok(removed) => {
                    if removed > 0 {
                        println!("Removed {} old log file(s)", removed);
                    } else {
                        println!("No old log files to remove");
                    }
                }
                Err(e) => {
                    println!("Error cleaning logs: {}", e);
                }
            }

            Ok(())
        }
    }
}
