//! Individual line parsing for photo listings
//!
//! A line moves through splitting, then per-field validation, construction
//! and formatting in schema order. The first failure ends the line as an
//! error record; no partial field values are kept.

use tracing::{debug, trace};

use crate::app::models::{ErrorRecord, ParsedLine, Record, ValidationError};
use crate::app::services::field_schema::Schema;
use crate::constants::FIELD_SEPARATOR;

/// Parse a single input line into a valid or an error record
pub fn parse_line(line: &str, input_index: usize, schema: &Schema) -> ParsedLine {
    match build_record(line, input_index, schema) {
        Ok(record) => ParsedLine::Valid(record),
        Err(error) => {
            debug!("Rejected line {}: {}", input_index, error);
            ParsedLine::Invalid(ErrorRecord::new(input_index, error))
        }
    }
}

/// Split a line into exactly `field_count` trimmed values
///
/// Returns `None` when the line has fewer fields than required. Values past
/// `field_count` are dropped.
pub fn split_fields(line: &str, field_count: usize) -> Option<Vec<&str>> {
    let values: Vec<&str> = line
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .take(field_count)
        .collect();

    if values.len() < field_count {
        return None;
    }

    Some(values)
}

fn build_record(
    line: &str,
    input_index: usize,
    schema: &Schema,
) -> Result<Record, ValidationError> {
    let values = split_fields(line, schema.field_count()).ok_or(ValidationError::Structural)?;

    let extra = line.split(FIELD_SEPARATOR).count() - values.len();
    if extra > 0 {
        trace!("Line {}: ignoring {} extra field(s)", input_index, extra);
    }

    values
        .into_iter()
        .zip(schema.iter())
        .try_fold(
            Record::new(input_index),
            |record, (raw, spec)| -> Result<Record, ValidationError> {
                let value = spec.process(raw)?;
                Ok(record.with_field(spec.name.clone(), value))
            },
        )
}
