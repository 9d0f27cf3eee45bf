//! Field specifications and the schema container
//!
//! A [`FieldSpec`] is immutable once built. Its validation and format keys
//! are resolved to rule functions at construction, so parsing a line only
//! walks pre-resolved tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::builders::{TypeBuilder, builder_for};
use super::formatting::{FormatKey, FormatRule};
use super::validation::{ValidationKey, ValidationRule};
use crate::app::models::{FieldType, FieldValue, ValidationError};
use crate::config::AlbumConfig;
use crate::constants::fields;
use crate::{Error, Result};

// =============================================================================
// Field Parameters
// =============================================================================

/// Inclusive range of accepted years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.from..=self.to).contains(&year)
    }
}

/// Window for the bounded-slice format rule
///
/// `min` is the 1-based position of the first kept character and `max` the
/// number of characters kept from there: the `[min-1, max]` start/length pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    /// Check the bounds describe a non-empty window starting at position 1 or later
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(Error::configuration(
                "Length bounds are 1-based: min must be at least 1".to_string(),
            ));
        }
        if self.max == 0 {
            return Err(Error::configuration(
                "Length bounds keep no characters: max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 0-based index of the first kept character
    pub fn start(&self) -> usize {
        self.min.saturating_sub(1)
    }
}

impl fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for LengthBounds {
    type Err = Error;

    /// Parse `MIN-MAX`, e.g. `1-20`
    fn from_str(s: &str) -> Result<Self> {
        let (min, max) = s.trim().split_once('-').ok_or_else(|| {
            Error::data_validation(format!(
                "Invalid length bounds '{}': expected MIN-MAX, e.g. 1-20",
                s
            ))
        })?;

        let parse = |part: &str| {
            part.trim().parse::<usize>().map_err(|e| {
                Error::data_validation(format!("Invalid length bound '{}': {}", part, e))
            })
        };

        let bounds = LengthBounds {
            min: parse(min)?,
            max: parse(max)?,
        };
        bounds.validate()?;
        Ok(bounds)
    }
}

/// Type-specific parameters consulted by validation and format rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,

    /// Lowercase extensions accepted by the valid-extension rule
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_extensions: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthBounds>,
}

// =============================================================================
// Field Specification
// =============================================================================

/// Specification of one positional field
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub validations: Vec<ValidationKey>,
    pub formats: Vec<FormatKey>,
    pub params: FieldParams,

    #[serde(skip)]
    rules: Vec<ValidationRule>,
    #[serde(skip)]
    format_rules: Vec<FormatRule>,
    #[serde(skip)]
    builder: &'static dyn TypeBuilder,
}

impl FieldSpec {
    /// Create a field with no validation, no formatting and no parameters
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            validations: Vec::new(),
            formats: Vec::new(),
            params: FieldParams::default(),
            rules: Vec::new(),
            format_rules: Vec::new(),
            builder: builder_for(field_type),
        }
    }

    /// Declare the validation rules, run in the given order
    pub fn with_validations(mut self, keys: impl IntoIterator<Item = ValidationKey>) -> Self {
        self.validations = keys.into_iter().collect();
        self.rules = self.validations.iter().map(|key| key.rule()).collect();
        self
    }

    /// Declare the format rules, applied in the given order
    pub fn with_formats(mut self, keys: impl IntoIterator<Item = FormatKey>) -> Self {
        self.formats = keys.into_iter().collect();
        self.format_rules = self.formats.iter().map(|key| key.rule()).collect();
        self
    }

    pub fn with_params(mut self, params: FieldParams) -> Self {
        self.params = params;
        self
    }

    /// Run one raw value through validation, construction and formatting
    ///
    /// The first failing validation rule short-circuits.
    pub fn process(&self, raw: &str) -> std::result::Result<FieldValue, ValidationError> {
        for rule in &self.rules {
            rule.check(raw, self)?;
        }

        let value = self.builder.build(raw, self)?;

        Ok(self
            .format_rules
            .iter()
            .fold(value, |value, rule| rule.apply(value, &self.params)))
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Ordered, immutable list of field specifications
///
/// Index lookups panic when out of range, like slice indexing: an invalid
/// index is a programming error, never a data error.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::photo_album(&AlbumConfig::default())
    }
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The compiled-in photo schema: `image_file, city, date`
    pub fn photo_album(config: &AlbumConfig) -> Self {
        let image_file = FieldSpec::new(fields::IMAGE_FILE, FieldType::FileName)
            .with_validations([
                ValidationKey::TwoPartFileName,
                ValidationKey::ValidExtension,
                ValidationKey::OnlyLettersInStem,
            ])
            .with_params(FieldParams {
                allowed_extensions: config.normalized_extensions(),
                ..Default::default()
            });

        let mut city_formats = Vec::new();
        if config.city_format.capitalize {
            city_formats.push(FormatKey::Capitalize);
        }
        if config.city_format.length.is_some() {
            city_formats.push(FormatKey::BoundedSlice);
        }
        let city = FieldSpec::new(fields::CITY, FieldType::Default)
            .with_validations([ValidationKey::OnlyLetters])
            .with_formats(city_formats)
            .with_params(FieldParams {
                length: config.city_format.length,
                ..Default::default()
            });

        let date = FieldSpec::new(fields::DATE, FieldType::DateTime)
            .with_validations([ValidationKey::DateTimeFormat, ValidationKey::YearRange])
            .with_params(FieldParams {
                year_range: Some(config.year_range()),
                ..Default::default()
            });

        let schema = Self::new(vec![image_file, city, date]);
        debug!("Built photo album schema with {} fields", schema.field_count());
        schema
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn type_of(&self, index: usize) -> FieldType {
        self.fields[index].field_type
    }

    pub fn name_of(&self, index: usize) -> &str {
        &self.fields[index].name
    }

    pub fn validation_keys_of(&self, index: usize) -> &[ValidationKey] {
        &self.fields[index].validations
    }

    pub fn format_keys_of(&self, index: usize) -> &[FormatKey] {
        &self.fields[index].formats
    }

    pub fn params_of(&self, index: usize) -> &FieldParams {
        &self.fields[index].params
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }
}
