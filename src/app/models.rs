//! Data models for photo album processing
//!
//! This module contains the core data structures that flow through the
//! pipeline: typed field values, parsed records, error records and the
//! per-line validation error taxonomy.

use crate::constants::{DATE_TIME_FORMAT_DISPLAY, EXTENSION_SEPARATOR};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Field Types and Values
// =============================================================================

/// Type tag of a schema field, selecting the builder that constructs its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// `YYYY-MM-DD hh:mm:ss` timestamp
    DateTime,
    /// `<stem>.<extension>` file name
    FileName,
    /// Plain text, kept as-is
    Default,
}

impl FieldType {
    /// Kebab-case key used in schema listings
    pub fn key(&self) -> &'static str {
        match self {
            FieldType::DateTime => "date-time",
            FieldType::FileName => "file-name",
            FieldType::Default => "default",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "date-time" => Ok(FieldType::DateTime),
            "file-name" => Ok(FieldType::FileName),
            "default" => Ok(FieldType::Default),
            other => Err(Error::data_validation(format!(
                "Unknown field type '{}'. Expected one of: date-time, file-name, default",
                other
            ))),
        }
    }
}

/// A file name split at its first extension separator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileName {
    pub stem: String,
    pub extension: String,
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.stem, EXTENSION_SEPARATOR, self.extension)
    }
}

/// Typed value of one parsed field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum FieldValue {
    DateTime(NaiveDateTime),
    FileName(FileName),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&NaiveDateTime> {
        match self {
            FieldValue::DateTime(date_time) => Some(date_time),
            _ => None,
        }
    }

    pub fn as_file_name(&self) -> Option<&FileName> {
        match self {
            FieldValue::FileName(file_name) => Some(file_name),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Per-line validation failures
///
/// Every variant is recoverable at batch level: the offending line becomes an
/// [`ErrorRecord`] and its siblings are processed normally. The `Display`
/// output is the message shown to users.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The line does not split into enough fields
    #[error("line has no basic well-formed structure")]
    Structural,

    /// A letters-only field contains other characters
    #[error("{field} should contain only letters")]
    OnlyLetter { field: String },

    /// The file name is not exactly `<name>.<extension>`
    #[error("file name expects <name>.<extension> format")]
    FileNameFormat { field: String },

    /// The extension is not in the allowed set
    #[error("allowed extensions: {allowed}")]
    ImageExtension { field: String, allowed: String },

    /// The date does not match the capture date format
    #[error("{field} expects {format} format", format = DATE_TIME_FORMAT_DISPLAY)]
    DateTimeFormat { field: String },

    /// The capture year lies outside the accepted range
    #[error("{field} year should be between {from} and {to}")]
    YearRange { field: String, from: i32, to: i32 },
}

impl ValidationError {
    /// Stable name of the error kind, used for statistics
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValidationError::Structural => "StructuralError",
            ValidationError::OnlyLetter { .. } => "OnlyLetterError",
            ValidationError::FileNameFormat { .. } => "FileNameFormatError",
            ValidationError::ImageExtension { .. } => "ImageExtensionError",
            ValidationError::DateTimeFormat { .. } => "DateTimeFormatError",
            ValidationError::YearRange { .. } => "YearRangeError",
        }
    }

    /// Name of the offending field, if the error concerns a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Structural => None,
            ValidationError::OnlyLetter { field }
            | ValidationError::FileNameFormat { field }
            | ValidationError::ImageExtension { field, .. }
            | ValidationError::DateTimeFormat { field }
            | ValidationError::YearRange { field, .. } => Some(field),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A successfully parsed input line
///
/// Field values are fixed once parsing completes. Album position is added by
/// the organizer and, once set, is never overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    input_index: usize,
    fields: BTreeMap<String, FieldValue>,
    group_index: Option<usize>,
    group_size: Option<usize>,
}

impl Record {
    pub fn new(input_index: usize) -> Self {
        Self {
            input_index,
            fields: BTreeMap::new(),
            group_index: None,
            group_size: None,
        }
    }

    /// Builder-style field insertion used while a line is being parsed
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Position of the originating line in the input
    pub fn input_index(&self) -> usize {
        self.input_index
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    pub fn date_time(&self, name: &str) -> Option<&NaiveDateTime> {
        self.field(name).and_then(FieldValue::as_date_time)
    }

    pub fn file_name(&self, name: &str) -> Option<&FileName> {
        self.field(name).and_then(FieldValue::as_file_name)
    }

    /// Record the album position of this photo
    ///
    /// Returns `false` and leaves the record untouched if a position was
    /// already assigned.
    pub fn assign_group_position(&mut self, group_index: usize, group_size: usize) -> bool {
        if self.group_index.is_some() || self.group_size.is_some() {
            return false;
        }
        self.group_index = Some(group_index);
        self.group_size = Some(group_size);
        true
    }

    pub fn group_index(&self) -> Option<usize> {
        self.group_index
    }

    pub fn group_size(&self) -> Option<usize> {
        self.group_size
    }
}

/// A rejected input line: its position and why it was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub input_index: usize,
    pub error: ValidationError,
}

impl ErrorRecord {
    pub fn new(input_index: usize, error: ValidationError) -> Self {
        Self { input_index, error }
    }

    /// Human-readable rejection message
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Outcome of parsing one line: exactly one of a valid or an error record
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Valid(Record),
    Invalid(ErrorRecord),
}

impl ParsedLine {
    pub fn input_index(&self) -> usize {
        match self {
            ParsedLine::Valid(record) => record.input_index(),
            ParsedLine::Invalid(error) => error.input_index,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParsedLine::Invalid(_))
    }
}
