//! Command implementations for the album renamer CLI
//!
//! Each command is implemented in its own module:
//! - `rename`: the listing-to-names workflow
//! - `schema`: printing the effective field schema

pub mod rename;
pub mod schema;
pub mod shared;

pub use shared::CommandStats;

use crate::Error;
use crate::cli::args::{Args, Commands};

/// Dispatch to the handler of the requested subcommand
pub fn run(args: Args) -> anyhow::Result<CommandStats> {
    match args.command {
        Some(Commands::Rename(rename_args)) => rename::run_rename(rename_args),
        Some(Commands::Schema(schema_args)) => schema::run_schema(schema_args),
        None => Err(Error::configuration("No command given").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_without_command() {
        let error = run(Args { command: None }).unwrap_err();
        assert!(error.to_string().contains("No command given"));
    }

    #[test]
    fn test_command_stats_re_export() {
        let stats = CommandStats::default();
        assert_eq!(stats.lines_processed, 0);
        assert_eq!(stats.errors, 0);
    }
}
