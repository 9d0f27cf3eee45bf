//! Batch parser for photo listings
//!
//! This module caps the input, runs every line through the line parser with
//! its position, and partitions the outcomes.

use std::sync::Arc;
use tracing::{debug, info};

use super::line_parser::parse_line;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::ParsedLine;
use crate::app::services::field_schema::Schema;
use crate::constants::MAX_INPUT_LINES;

/// Parser for raw photo listings
///
/// Holds the schema shared read-only with the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct PhotoListParser {
    schema: Arc<Schema>,
}

impl Default for PhotoListParser {
    fn default() -> Self {
        Self::new(Arc::new(Schema::default()))
    }
}

impl PhotoListParser {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse a raw listing
    ///
    /// Trailing empty lines are not part of the listing. Only the first
    /// [`MAX_INPUT_LINES`] lines are processed; the remainder is counted in
    /// the statistics and otherwise ignored.
    pub fn parse(&self, input: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut valid = Vec::new();
        let mut errors = Vec::new();

        let listing = listing_lines(input);
        let mut lines = listing.iter();
        for (input_index, line) in lines.by_ref().take(MAX_INPUT_LINES).enumerate() {
            stats.total_lines += 1;

            match parse_line(line, input_index, &self.schema) {
                ParsedLine::Valid(record) => {
                    stats.records_parsed += 1;
                    valid.push(record);
                }
                ParsedLine::Invalid(rejected) => {
                    stats.add_rejection(&rejected.error);
                    errors.push(rejected);
                }
            }
        }

        stats.lines_dropped = lines.count();
        if stats.lines_dropped > 0 {
            debug!(
                "Ignoring {} line(s) beyond the {}-line cap",
                stats.lines_dropped, MAX_INPUT_LINES
            );
        }

        info!("{}", stats.summary());

        ParseResult {
            valid,
            errors,
            stats,
        }
    }
}

/// Split `input` into lines, without the empty lines at its end
///
/// Interior empty lines are kept; they still count as (malformed) lines.
pub fn listing_lines(input: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
