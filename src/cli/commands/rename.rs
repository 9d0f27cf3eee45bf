//! Rename command implementation
//!
//! Reads a listing, runs the renaming pipeline and writes one name per
//! processed line (or a JSON document) to the chosen destination.

use anyhow::Context;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::{CommandStats, join_lines, read_input, setup_logging, write_output};
use crate::app::services::renamer::{PhotoRenamer, RenameResult};
use crate::cli::args::{OutputFormat, RenameArgs};
use crate::{Error, Result};

/// Run the rename command
pub fn run_rename(args: RenameArgs) -> anyhow::Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args
        .album
        .to_config()
        .context("Invalid album options")?;
    let renamer = PhotoRenamer::new(&config)?;

    let input = read_input(args.input_path())?;
    let result = renamer.rename(&input);

    let rendered = render_result(&result, args.format)?;
    write_output(args.output.as_deref(), &rendered)?;

    let stats = CommandStats {
        lines_processed: result.names.len(),
        photos_renamed: result.organize_stats.final_output,
        errors: result.error_count(),
        processing_time: start_time.elapsed(),
    };
    info!(
        "Rename finished in {:.2?}: {} line(s)",
        stats.processing_time, stats.lines_processed
    );

    if args.show_summary() {
        print_summary(&result, &stats);
    }

    Ok(stats)
}

/// Render the result in the requested output format
pub fn render_result(result: &RenameResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(join_lines(&result.names)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)
                .map_err(|e| Error::serialization("Failed to serialize rename result", e))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Print a highlighted run summary to stderr
fn print_summary(result: &RenameResult, stats: &CommandStats) {
    let parse = &result.parse_stats;
    let organize = &result.organize_stats;

    eprintln!();
    eprintln!("{}", "Album renaming complete".bright_green().bold());
    eprintln!(
        "   Lines processed: {}",
        stats.lines_processed.to_string().bright_cyan()
    );
    eprintln!(
        "   Photos renamed: {} in {} album(s)",
        stats.photos_renamed.to_string().bright_cyan(),
        organize.groups.to_string().bright_cyan()
    );
    if organize.duplicates_removed > 0 {
        eprintln!(
            "   Same-date duplicates dropped: {}",
            organize.duplicates_removed.to_string().bright_yellow()
        );
    }
    if parse.lines_dropped > 0 {
        eprintln!(
            "   Lines past the input cap ignored: {}",
            parse.lines_dropped.to_string().bright_yellow()
        );
    }
    if stats.errors > 0 {
        eprintln!(
            "   {} {}",
            "Lines rejected:".bright_red(),
            stats.errors.to_string().bright_red().bold()
        );
        for (kind, count) in &parse.errors_by_kind {
            eprintln!("      {}: {}", kind, count);
        }
    }
    eprintln!(
        "   Processing time: {}",
        format!("{:.2?}", stats.processing_time).bright_black()
    );
}
