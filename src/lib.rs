//! Album Renamer Library
//!
//! A Rust library for turning a text listing of photo metadata into
//! album-organized file names.
//!
//! This library provides tools for:
//! - Describing input lines with a field schema (types, validation rules, formatting)
//! - Parsing and validating each line, isolating malformed lines as error records
//! - Grouping photos by city, deduplicating by capture date and ordering by date
//! - Rendering sequential, zero-padded names per album group in input order
//!
//! ```rust
//! let names = album_renamer::rename_photos("photo.jpg, Rio, 2010-05-05 10:00:00");
//! assert_eq!(names, vec!["Rio1.jpg".to_string()]);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod album_display;
        pub mod album_organizer;
        pub mod field_schema;
        pub mod photo_list_parser;
        pub mod renamer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ErrorRecord, FieldValue, ParsedLine, Record, ValidationError};
pub use app::services::field_schema::Schema;
pub use app::services::renamer::{PhotoRenamer, RenameResult};
pub use config::AlbumConfig;

/// Rename a photo listing with the default album configuration
///
/// Returns one rendered string per processed input line, in input order.
pub fn rename_photos(input: &str) -> Vec<String> {
    PhotoRenamer::default().rename(input).names
}

/// Result type alias for the album renamer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for operations outside the per-line validation pipeline
///
/// Invalid input lines never surface here; they become error records.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error (command-line values and similar)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
