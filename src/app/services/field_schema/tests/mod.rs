//! Tests for the field schema module
//!
//! Covers rule lookup, predicate behaviour, formatting and typed construction.

pub mod builder_tests;
pub mod formatting_tests;
pub mod validation_tests;

// Test helper functions and fixtures
use super::{FieldParams, FieldSpec, LengthBounds, Schema, YearRange};
use crate::app::models::FieldType;
use crate::config::AlbumConfig;

/// Default photo album schema
pub fn default_schema() -> Schema {
    Schema::photo_album(&AlbumConfig::default())
}

/// Params carrying the default extension set
pub fn extension_params() -> FieldParams {
    FieldParams {
        allowed_extensions: vec!["jpg".to_string(), "png".to_string(), "jpeg".to_string()],
        ..Default::default()
    }
}

/// Params carrying the default year range
pub fn year_params() -> FieldParams {
    FieldParams {
        year_range: Some(YearRange::new(2000, 2020)),
        ..Default::default()
    }
}

/// Params carrying length bounds
pub fn length_params(min: usize, max: usize) -> FieldParams {
    FieldParams {
        length: Some(LengthBounds { min, max }),
        ..Default::default()
    }
}

/// A bare text field with no rules
pub fn plain_text_field(name: &str) -> FieldSpec {
    FieldSpec::new(name, FieldType::Default)
}

/// Field at `index`, in schema order
pub fn field_at(schema: &Schema, index: usize) -> &FieldSpec {
    schema.iter().nth(index).expect("field index in range")
}
