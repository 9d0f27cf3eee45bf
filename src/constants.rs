//! Application constants for the album renamer
//!
//! This module contains the input limits, field names, default validation
//! bounds and message fragments used throughout the album renamer.

// =============================================================================
// Input Limits and Separators
// =============================================================================

/// Maximum number of input lines processed per batch; the rest are dropped
pub const MAX_INPUT_LINES: usize = 99;

/// Separator between fields within one input line
pub const FIELD_SEPARATOR: char = ',';

/// Separator between a file name stem and its extension
pub const EXTENSION_SEPARATOR: char = '.';

// =============================================================================
// Field Names
// =============================================================================

/// Standard field names of the photo album schema
pub mod fields {
    /// Image file name, e.g. `photo.jpg`
    pub const IMAGE_FILE: &str = "image_file";

    /// City the photo was taken in; the album grouping key
    pub const CITY: &str = "city";

    /// Capture date; the ordering key inside an album group
    pub const DATE: &str = "date";
}

// =============================================================================
// Validation Defaults
// =============================================================================

/// First accepted capture year (inclusive)
pub const DEFAULT_YEAR_FROM: i32 = 2000;

/// Last accepted capture year (inclusive)
pub const DEFAULT_YEAR_TO: i32 = 2020;

/// Image extensions accepted by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg"];

/// Capture date format (chrono syntax)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Capture date format as shown to users
pub const DATE_TIME_FORMAT_DISPLAY: &str = "YYYY-MM-DD hh:mm:ss";

// =============================================================================
// Rendering
// =============================================================================

/// Prefix of every rendered error line
pub const ERROR_PREFIX: &str = "Error: ";

// =============================================================================
// Helper Functions
// =============================================================================

/// Render an extension list the way error messages show it:
/// `"jpg", "png" or "jpeg"`
pub fn describe_extensions<S: AsRef<str>>(extensions: &[S]) -> String {
    let quoted: Vec<String> = extensions
        .iter()
        .map(|ext| format!("\"{}\"", ext.as_ref()))
        .collect();

    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Number of decimal digits needed to print `value`
pub fn decimal_width(value: usize) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}
