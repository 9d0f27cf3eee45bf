//! Validation rules for raw field values
//!
//! Each rule is a predicate over the raw (trimmed) value and the field's
//! parameters, paired with the error it raises on failure. Rules are looked
//! up by key from a static table.

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::spec::{FieldParams, FieldSpec};
use crate::app::models::ValidationError;
use crate::constants::{DATE_TIME_FORMAT, EXTENSION_SEPARATOR, describe_extensions};
use crate::{Error, Result};

static ONLY_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("letters pattern is valid"));

static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01]) ([01]\d|2[0-3]):([0-5]\d):([0-5]\d)$",
    )
    .expect("date-time pattern is valid")
});

/// Name of a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationKey {
    OnlyLetters,
    OnlyLettersInStem,
    #[serde(rename = "two-part-filename")]
    TwoPartFileName,
    ValidExtension,
    DateTimeFormat,
    YearRange,
}

impl ValidationKey {
    pub const ALL: [ValidationKey; 6] = [
        ValidationKey::OnlyLetters,
        ValidationKey::OnlyLettersInStem,
        ValidationKey::TwoPartFileName,
        ValidationKey::ValidExtension,
        ValidationKey::DateTimeFormat,
        ValidationKey::YearRange,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ValidationKey::OnlyLetters => "only-letters",
            ValidationKey::OnlyLettersInStem => "only-letters-in-stem",
            ValidationKey::TwoPartFileName => "two-part-filename",
            ValidationKey::ValidExtension => "valid-extension",
            ValidationKey::DateTimeFormat => "date-time-format",
            ValidationKey::YearRange => "year-range",
        }
    }

    /// Resolve the key to its rule
    pub fn rule(self) -> ValidationRule {
        match self {
            ValidationKey::OnlyLetters => ValidationRule {
                key: self,
                predicate: only_letters,
                error: only_letter_error,
            },
            ValidationKey::OnlyLettersInStem => ValidationRule {
                key: self,
                predicate: only_letters_in_stem,
                error: only_letter_error,
            },
            ValidationKey::TwoPartFileName => ValidationRule {
                key: self,
                predicate: two_part_file_name,
                error: file_name_format_error,
            },
            ValidationKey::ValidExtension => ValidationRule {
                key: self,
                predicate: valid_extension,
                error: image_extension_error,
            },
            ValidationKey::DateTimeFormat => ValidationRule {
                key: self,
                predicate: date_time_format,
                error: date_time_format_error,
            },
            ValidationKey::YearRange => ValidationRule {
                key: self,
                predicate: year_in_range,
                error: year_range_error,
            },
        }
    }
}

impl fmt::Display for ValidationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ValidationKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.key() == s)
            .ok_or_else(|| Error::data_validation(format!("Unknown validation rule '{}'", s)))
    }
}

type Predicate = fn(&str, &FieldParams) -> bool;
type ErrorBuilder = fn(&str, &FieldParams) -> ValidationError;

/// A resolved validation rule: predicate plus the error it raises
#[derive(Clone, Copy)]
pub struct ValidationRule {
    key: ValidationKey,
    predicate: Predicate,
    error: ErrorBuilder,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("key", &self.key)
            .finish()
    }
}

impl ValidationRule {
    pub fn key(&self) -> ValidationKey {
        self.key
    }

    /// Whether `value` satisfies the rule under `params`
    pub fn accepts(&self, value: &str, params: &FieldParams) -> bool {
        (self.predicate)(value, params)
    }

    /// Check `value` against the rule, naming `field` in the error
    pub fn check(&self, value: &str, field: &FieldSpec) -> std::result::Result<(), ValidationError> {
        if self.accepts(value, &field.params) {
            Ok(())
        } else {
            Err((self.error)(&field.name, &field.params))
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

fn only_letters(value: &str, _params: &FieldParams) -> bool {
    ONLY_LETTERS.is_match(value)
}

fn only_letters_in_stem(value: &str, _params: &FieldParams) -> bool {
    let stem = value
        .rsplit_once(EXTENSION_SEPARATOR)
        .map_or(value, |(stem, _)| stem);
    ONLY_LETTERS.is_match(stem)
}

fn two_part_file_name(value: &str, _params: &FieldParams) -> bool {
    value.split(EXTENSION_SEPARATOR).count() == 2
}

fn valid_extension(value: &str, params: &FieldParams) -> bool {
    value
        .rsplit_once(EXTENSION_SEPARATOR)
        .map(|(_, extension)| extension.to_ascii_lowercase())
        .is_some_and(|extension| params.allowed_extensions.contains(&extension))
}

/// Pattern match plus a calendar check, so that `2010-02-31` is rejected here
/// rather than surfacing during construction
fn date_time_format(value: &str, _params: &FieldParams) -> bool {
    DATE_TIME_PATTERN.is_match(value)
        && NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).is_ok()
}

fn year_in_range(value: &str, params: &FieldParams) -> bool {
    let Some(range) = params.year_range else {
        return true;
    };

    let year = NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .map(|date_time| date_time.year())
        .ok()
        .or_else(|| {
            DATE_TIME_PATTERN
                .captures(value)
                .and_then(|captures| captures[1].parse().ok())
        });

    year.is_some_and(|year| range.contains(year))
}

// =============================================================================
// Errors
// =============================================================================

fn only_letter_error(field: &str, _params: &FieldParams) -> ValidationError {
    ValidationError::OnlyLetter {
        field: field.to_string(),
    }
}

fn file_name_format_error(field: &str, _params: &FieldParams) -> ValidationError {
    ValidationError::FileNameFormat {
        field: field.to_string(),
    }
}

fn image_extension_error(field: &str, params: &FieldParams) -> ValidationError {
    ValidationError::ImageExtension {
        field: field.to_string(),
        allowed: describe_extensions(&params.allowed_extensions),
    }
}

fn date_time_format_error(field: &str, _params: &FieldParams) -> ValidationError {
    ValidationError::DateTimeFormat {
        field: field.to_string(),
    }
}

fn year_range_error(field: &str, params: &FieldParams) -> ValidationError {
    let (from, to) = params
        .year_range
        .map_or((i32::MIN, i32::MAX), |range| (range.from, range.to));
    ValidationError::YearRange {
        field: field.to_string(),
        from,
        to,
    }
}
