//! Photo list parser for raw metadata listings
//!
//! This module turns a raw text listing into parsed records. Each line is
//! split, validated, built and formatted according to the field [`Schema`];
//! malformed lines become error records instead of aborting the batch.
//!
//! ## Architecture
//!
//! - [`parser`] - Batch orchestration: line cap, indexing, partitioning
//! - [`line_parser`] - Individual line processing against the schema
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use album_renamer::app::services::photo_list_parser::PhotoListParser;
//! use album_renamer::Schema;
//!
//! let parser = PhotoListParser::new(Arc::new(Schema::default()));
//! let result = parser.parse("photo.jpg, Rio, 2010-05-05 10:00:00\nphoto.mp3, Rio, 2010-05-05 10:00:00");
//!
//! assert_eq!(result.valid.len(), 1);
//! assert_eq!(result.errors.len(), 1);
//! assert_eq!(result.errors[0].input_index, 1);
//! ```
//!
//! [`Schema`]: crate::app::services::field_schema::Schema

pub mod line_parser;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{parse_line, split_fields};
pub use parser::{PhotoListParser, listing_lines};
pub use stats::{ParseResult, ParseStats};
