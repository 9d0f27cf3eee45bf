//! Tests for the photo list parser
//!
//! Provides shared fixtures for line and batch parsing tests.


use std::sync::Arc;

use super::PhotoListParser;
use crate::app::services::field_schema::Schema;

/// A well-formed line
pub const VALID_LINE: &str = "photo.jpg, Rio, 2010-05-05 10:00:00";

/// Parser over the default photo schema
pub fn create_test_parser() -> PhotoListParser {
    PhotoListParser::new(Arc::new(Schema::default()))
}

/// Build a listing of `count` valid lines with distinct dates
pub fn create_valid_listing(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "photo.jpg, Rio, 2010-{:02}-{:02} {:02}:00:00",
                i / 28 % 12 + 1,
                i % 28 + 1,
                i % 24
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
