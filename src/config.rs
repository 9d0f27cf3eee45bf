//! Configuration management and validation.
//!
//! Provides the album configuration: the bounds that parameterise the
//! compiled-in photo schema and the optional city formatting pipeline.

use crate::app::services::field_schema::{LengthBounds, YearRange};
use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_YEAR_FROM, DEFAULT_YEAR_TO};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional formatting applied to the city field after validation
///
/// Both steps are off by default, so city names render exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFormatConfig {
    /// Uppercase the first letter of the city
    pub capitalize: bool,

    /// Keep `max` characters of the city starting at 1-based position `min`
    pub length: Option<LengthBounds>,
}

impl CityFormatConfig {
    /// Whether any formatting step is enabled
    pub fn is_enabled(&self) -> bool {
        self.capitalize || self.length.is_some()
    }
}

/// Configuration for album renaming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumConfig {
    /// First accepted capture year (inclusive)
    pub year_from: i32,

    /// Last accepted capture year (inclusive)
    pub year_to: i32,

    /// Accepted image extensions, compared case-insensitively
    pub allowed_extensions: Vec<String>,

    /// City formatting pipeline
    pub city_format: CityFormatConfig,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            year_from: DEFAULT_YEAR_FROM,
            year_to: DEFAULT_YEAR_TO,
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            city_format: CityFormatConfig::default(),
        }
    }
}

impl AlbumConfig {
    /// Accepted capture years as a range value
    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.year_from, self.year_to)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.year_from > self.year_to {
            return Err(Error::configuration(format!(
                "Year range is inverted: {} is after {}",
                self.year_from, self.year_to
            )));
        }

        if self.allowed_extensions.is_empty() {
            return Err(Error::configuration(
                "At least one image extension must be allowed".to_string(),
            ));
        }

        for extension in &self.allowed_extensions {
            if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::configuration(format!(
                    "Invalid image extension '{}': expected letters or digits only",
                    extension
                )));
            }
        }

        if let Some(length) = &self.city_format.length {
            length.validate()?;
        }

        debug!("Album configuration validated: {:?}", self);
        Ok(())
    }

    /// Normalise extensions to lowercase without duplicates, keeping order
    pub fn normalized_extensions(&self) -> Vec<String> {
        let mut normalized: Vec<String> = Vec::with_capacity(self.allowed_extensions.len());
        for extension in &self.allowed_extensions {
            let lower = extension.trim().to_ascii_lowercase();
            if !normalized.contains(&lower) {
                normalized.push(lower);
            }
        }
        normalized
    }
}
