//! Command-line argument definitions for the album renamer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::field_schema::LengthBounds;
use crate::config::{AlbumConfig, CityFormatConfig};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// CLI arguments for the album renamer
///
/// Turns a listing of `<image_file>, <city>, <date>` lines into sequential,
/// album-organized photo names.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "album-renamer",
    version,
    about = "Rename photos into per-city albums ordered by capture date",
    long_about = "Reads a listing of photo metadata lines (<image_file>, <city>, <date>), \
                  validates every line, groups photos by city, drops same-date duplicates \
                  and prints one new name per line in the original order. Malformed lines \
                  are reported in place as 'Error: <message>'."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Rename the photos of a listing (main command)
    Rename(RenameArgs),
    /// Print the effective field schema
    Schema(SchemaArgs),
}

/// Album options shared by every command that builds a schema
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct AlbumOptions {
    /// First accepted capture year (inclusive, default 2000)
    #[arg(long = "year-from", value_name = "YEAR")]
    pub year_from: Option<i32>,

    /// Last accepted capture year (inclusive, default 2020)
    #[arg(long = "year-to", value_name = "YEAR")]
    pub year_to: Option<i32>,

    /// Accepted image extensions
    #[arg(
        long = "extensions",
        value_name = "LIST",
        help = "Comma-separated list of accepted image extensions (default: jpg,png,jpeg)"
    )]
    pub extensions: Option<ExtensionList>,

    /// Uppercase the first letter of every city
    #[arg(long = "capitalize-city")]
    pub capitalize_city: bool,

    /// Keep a character window of every city name
    ///
    /// MIN is the 1-based position of the first kept character and MAX the
    /// number of characters kept: `2-4` turns `Cordoba` into `ordo`.
    #[arg(long = "city-length", value_name = "MIN-MAX")]
    pub city_length: Option<LengthBounds>,
}

impl AlbumOptions {
    /// Build the album configuration: defaults overridden by these options
    pub fn to_config(&self) -> Result<AlbumConfig> {
        let mut config = AlbumConfig::default();
        self.apply_cli_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply explicitly given options on top of `config`
    pub fn apply_cli_overrides(&self, config: &mut AlbumConfig) {
        if let Some(year_from) = self.year_from {
            config.year_from = year_from;
        }
        if let Some(year_to) = self.year_to {
            config.year_to = year_to;
        }
        if let Some(list) = &self.extensions {
            config.allowed_extensions = list.extensions.clone();
        }
        if self.capitalize_city || self.city_length.is_some() {
            config.city_format = CityFormatConfig {
                capitalize: self.capitalize_city,
                length: self.city_length,
            };
        }
    }
}

/// Arguments for the rename command
#[derive(Debug, Clone, Default, Parser)]
pub struct RenameArgs {
    /// Listing to read; standard input when absent or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the result to instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub album: AlbumOptions,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress the run summary and all logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl RenameArgs {
    /// Validate the rename command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path() {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }

            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Input file, or `None` when reading standard input
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Determine the appropriate log level based on verbosity flags
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

    /// Whether the run summary goes to stderr
    pub fn show_summary(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

/// Arguments for the schema command
#[derive(Debug, Clone, Default, Parser)]
pub struct SchemaArgs {
    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub album: AlbumOptions,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per item
    #[default]
    Text,
    /// JSON document for scripting
    Json,
}

/// Wrapper for parsing comma-separated extension lists
#[derive(Debug, Clone)]
pub struct ExtensionList {
    pub extensions: Vec<String>,
}

impl FromStr for ExtensionList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let extensions: Vec<String> = s
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        if extensions.is_empty() {
            return Err(Error::data_validation(
                "Extension list cannot be empty".to_string(),
            ));
        }

        for extension in &extensions {
            if !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::data_validation(format!(
                    "Invalid extension '{}': only letters and digits are allowed",
                    extension
                )));
            }
        }

        Ok(ExtensionList { extensions })
    }
}
