//! Field schema for photo metadata lines
//!
//! The schema is the ordered list of field specifications that drives line
//! parsing. Each field declares its type, the validation rules it must pass,
//! and an optional formatting pipeline; rule keys are resolved to functions
//! once, when the field specification is built.
//!
//! ## Architecture
//!
//! - [`spec`] - Field specifications, parameters and the [`Schema`] container
//! - [`validation`] - Named validation predicates paired with their error kind
//! - [`formatting`] - Named post-validation transforms
//! - [`builders`] - Typed value construction per field type
//!
//! ## Usage
//!
//! ```rust
//! use album_renamer::app::services::field_schema::Schema;
//! use album_renamer::AlbumConfig;
//!
//! let schema = Schema::photo_album(&AlbumConfig::default());
//! assert_eq!(schema.field_count(), 3);
//! assert_eq!(schema.name_of(1), "city");
//! ```

pub mod builders;
pub mod formatting;
pub mod spec;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builders::{TypeBuilder, builder_for};
pub use formatting::FormatKey;
pub use spec::{FieldParams, FieldSpec, LengthBounds, Schema, YearRange};
pub use validation::{ValidationKey, ValidationRule};
