//! Typed value construction for validated raw fields

use chrono::NaiveDateTime;
use std::fmt;
use tracing::warn;

use super::spec::FieldSpec;
use crate::app::models::{FieldType, FieldValue, FileName, ValidationError};
use crate::constants::{DATE_TIME_FORMAT, EXTENSION_SEPARATOR};

/// Builds a typed value from a raw string that already passed validation
pub trait TypeBuilder: fmt::Debug + Send + Sync {
    fn build(&self, raw: &str, field: &FieldSpec) -> Result<FieldValue, ValidationError>;
}

/// Parses `YYYY-MM-DD hh:mm:ss` into a comparable timestamp
#[derive(Debug)]
pub struct DateTimeBuilder;

/// Splits at the first extension separator
#[derive(Debug)]
pub struct FileNameBuilder;

/// Keeps the raw text
#[derive(Debug)]
pub struct DefaultBuilder;

static DATE_TIME_BUILDER: DateTimeBuilder = DateTimeBuilder;
static FILE_NAME_BUILDER: FileNameBuilder = FileNameBuilder;
static DEFAULT_BUILDER: DefaultBuilder = DefaultBuilder;

/// Look up the builder for a field type
pub fn builder_for(field_type: FieldType) -> &'static dyn TypeBuilder {
    match field_type {
        FieldType::DateTime => &DATE_TIME_BUILDER,
        FieldType::FileName => &FILE_NAME_BUILDER,
        FieldType::Default => &DEFAULT_BUILDER,
    }
}

impl TypeBuilder for DateTimeBuilder {
    fn build(&self, raw: &str, field: &FieldSpec) -> Result<FieldValue, ValidationError> {
        NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
            .map(FieldValue::DateTime)
            .map_err(|e| {
                // Only reachable when the field declares no date-time-format rule
                warn!(
                    "Unparseable date-time '{}' for field '{}': {}",
                    raw, field.name, e
                );
                ValidationError::DateTimeFormat {
                    field: field.name.clone(),
                }
            })
    }
}

impl TypeBuilder for FileNameBuilder {
    fn build(&self, raw: &str, field: &FieldSpec) -> Result<FieldValue, ValidationError> {
        let (stem, extension) = raw.split_once(EXTENSION_SEPARATOR).ok_or_else(|| {
            ValidationError::FileNameFormat {
                field: field.name.clone(),
            }
        })?;

        Ok(FieldValue::FileName(FileName {
            stem: stem.to_string(),
            extension: extension.to_string(),
        }))
    }
}

impl TypeBuilder for DefaultBuilder {
    fn build(&self, raw: &str, _field: &FieldSpec) -> Result<FieldValue, ValidationError> {
        Ok(FieldValue::Text(raw.to_string()))
    }
}
