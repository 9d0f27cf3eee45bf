//! Merge and render pass over organized photos and error records

use tracing::debug;

use super::photo_display::PhotoDisplay;
use crate::app::models::{ErrorRecord, Record};
use crate::app::services::album_organizer::Album;
use crate::constants::ERROR_PREFIX;

/// One output line before rendering
#[derive(Debug, Clone, Copy)]
pub enum DisplayItem<'a> {
    Photo(&'a Record),
    Error(&'a ErrorRecord),
}

impl DisplayItem<'_> {
    pub fn input_index(&self) -> usize {
        match self {
            DisplayItem::Photo(record) => record.input_index(),
            DisplayItem::Error(error) => error.input_index,
        }
    }
}

/// Renders an album and its rejected lines in original input order
#[derive(Debug)]
pub struct AlbumDisplay<'a> {
    album: &'a Album,
    errors: &'a [ErrorRecord],
    photo_display: PhotoDisplay,
}

impl<'a> AlbumDisplay<'a> {
    pub fn new(album: &'a Album, errors: &'a [ErrorRecord]) -> Self {
        Self {
            album,
            errors,
            photo_display: PhotoDisplay::default(),
        }
    }

    /// All photos and errors, sorted by input position
    pub fn items(&self) -> Vec<DisplayItem<'a>> {
        let album = self.album;
        let mut items: Vec<DisplayItem<'a>> = album
            .groups()
            .flat_map(|(_, records)| records.iter().map(DisplayItem::Photo))
            .chain(self.errors.iter().map(DisplayItem::Error))
            .collect();

        items.sort_by_key(|item| item.input_index());
        items
    }

    /// Render every item, one string per surviving input line
    pub fn present(&self) -> Vec<String> {
        let rendered: Vec<String> = self
            .items()
            .into_iter()
            .map(|item| self.show(item))
            .collect();

        debug!("Rendered {} output lines", rendered.len());
        rendered
    }

    fn show(&self, item: DisplayItem<'_>) -> String {
        match item {
            DisplayItem::Photo(photo) => self.photo_display.present(photo),
            DisplayItem::Error(error) => format!("{}{}", ERROR_PREFIX, error.message()),
        }
    }
}
