//! Photo renaming pipeline
//!
//! Runs a listing through parsing, album organization and rendering with one
//! shared schema, returning the rendered names alongside run statistics.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::Result;
use crate::app::services::album_display::AlbumDisplay;
use crate::app::services::album_organizer::{AlbumOrganizer, OrganizeStats};
use crate::app::services::field_schema::Schema;
use crate::app::services::photo_list_parser::{ParseStats, PhotoListParser};
use crate::config::AlbumConfig;

/// Rendered names and the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenameResult {
    /// One entry per processed input line, in input order
    pub names: Vec<String>,
    pub parse_stats: ParseStats,
    pub organize_stats: OrganizeStats,
}

impl RenameResult {
    /// Number of rendered lines that are errors
    pub fn error_count(&self) -> usize {
        self.parse_stats.records_rejected
    }
}

/// Full listing-to-names pipeline
#[derive(Debug, Clone)]
pub struct PhotoRenamer {
    schema: Arc<Schema>,
    parser: PhotoListParser,
    organizer: AlbumOrganizer,
}

impl Default for PhotoRenamer {
    fn default() -> Self {
        Self::with_schema(Arc::new(Schema::default()))
    }
}

impl PhotoRenamer {
    /// Create a renamer for the photo album schema built from `config`
    pub fn new(config: &AlbumConfig) -> Result<Self> {
        config.validate()?;
        debug!("Building photo schema from {:?}", config);
        Ok(Self::with_schema(Arc::new(Schema::photo_album(config))))
    }

    /// Create a renamer around an existing schema
    pub fn with_schema(schema: Arc<Schema>) -> Self {
        Self {
            parser: PhotoListParser::new(Arc::clone(&schema)),
            organizer: AlbumOrganizer::default(),
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Rename every photo in `input`
    ///
    /// Malformed lines are rendered as `Error: <message>` in their original
    /// position; they never abort the run.
    pub fn rename(&self, input: &str) -> RenameResult {
        let parsed = self.parser.parse(input);
        let organized = self.organizer.organize(parsed.valid);

        let names = AlbumDisplay::new(&organized.album, &parsed.errors).present();
        info!(
            "Renamed {} line(s): {} photo(s), {} error(s)",
            names.len(),
            organized.stats.final_output,
            parsed.errors.len()
        );

        RenameResult {
            names,
            parse_stats: parsed.stats,
            organize_stats: organized.stats,
        }
    }
}
