//! Album organizer orchestration
//!
//! Groups valid records, deduplicates and orders each group, and assigns
//! every record its position within the group.

use std::collections::HashMap;
use tracing::{info, warn};

use super::deduplication::deduplicate_by_date;
use super::stats::{OrganizeResult, OrganizeStats};
use crate::app::models::Record;
use crate::constants::fields;

/// Photos grouped by city, each group sorted by capture date
#[derive(Debug, Clone, Default)]
pub struct Album {
    groups: HashMap<String, Vec<Record>>,
}

impl Album {
    /// Sorted records of one group
    pub fn group(&self, name: &str) -> Option<&[Record]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn photo_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Flatten every group into one list of records
    pub fn into_records(self) -> Vec<Record> {
        self.groups.into_values().flatten().collect()
    }
}

/// Organizes valid records into an [`Album`]
#[derive(Debug, Clone)]
pub struct AlbumOrganizer {
    group_field: String,
    date_field: String,
}

impl Default for AlbumOrganizer {
    fn default() -> Self {
        Self::new(fields::CITY, fields::DATE)
    }
}

impl AlbumOrganizer {
    /// Create an organizer grouping by `group_field` and ordering by `date_field`
    pub fn new(group_field: impl Into<String>, date_field: impl Into<String>) -> Self {
        Self {
            group_field: group_field.into(),
            date_field: date_field.into(),
        }
    }

    /// Group, deduplicate, order and position the given records
    pub fn organize(&self, records: Vec<Record>) -> OrganizeResult {
        let mut stats = OrganizeStats::new();
        stats.total_input = records.len();

        let mut buckets: HashMap<String, Vec<Record>> = HashMap::new();
        for record in records {
            let Some(group) = record.text(&self.group_field) else {
                warn!(
                    "Line {} has no '{}' value; leaving it out of the album",
                    record.input_index(),
                    self.group_field
                );
                stats.ungrouped += 1;
                continue;
            };
            if record.date_time(&self.date_field).is_none() {
                warn!(
                    "Line {} has no '{}' value; leaving it out of the album",
                    record.input_index(),
                    self.date_field
                );
                stats.ungrouped += 1;
                continue;
            }
            buckets.entry(group.to_string()).or_default().push(record);
        }

        let groups: HashMap<String, Vec<Record>> = buckets
            .into_iter()
            .map(|(name, records)| {
                let (group, removed) = self.organize_group(records);
                stats.duplicates_removed += removed;
                (name, group)
            })
            .collect();

        stats.groups = groups.len();
        let album = Album { groups };
        stats.final_output = album.photo_count();

        info!("{}", stats.summary());

        OrganizeResult { album, stats }
    }

    /// Deduplicate, sort and position a single group
    ///
    /// Returns the sorted group and the number of duplicates removed.
    fn organize_group(&self, records: Vec<Record>) -> (Vec<Record>, usize) {
        let (mut group, removed) = deduplicate_by_date(records, &self.date_field);

        // Dates are unique after deduplication
        group.sort_by(|a, b| {
            a.date_time(&self.date_field)
                .cmp(&b.date_time(&self.date_field))
        });

        let group_size = group.len();
        for (group_index, record) in group.iter_mut().enumerate() {
            if !record.assign_group_position(group_index, group_size) {
                warn!(
                    "Line {} already had an album position; keeping it",
                    record.input_index()
                );
            }
        }

        (group, removed)
    }
}
