//! Record deduplication by capture date
//!
//! Within one album group, two photos with the same capture date are
//! duplicates. The record seen first in input order is kept and later ones are
//! discarded entirely: they are not reported as errors.

use std::collections::HashSet;
use tracing::debug;

use crate::app::models::Record;

/// Deduplicate one album group by the date stored in `date_field`
///
/// Records are considered in input order regardless of the order they are
/// passed in; the first record for each date survives. Records without a date
/// in `date_field` are kept as-is.
///
/// # Arguments
///
/// * `records` - Records of a single group
/// * `date_field` - Name of the date-time field used as the duplicate key
///
/// # Returns
///
/// Tuple of (surviving records in input order, number of duplicates removed)
pub fn deduplicate_by_date(mut records: Vec<Record>, date_field: &str) -> (Vec<Record>, usize) {
    records.sort_by_key(Record::input_index);

    let input_count = records.len();
    let mut seen = HashSet::new();
    let deduplicated: Vec<Record> = records
        .into_iter()
        .filter(|record| match record.date_time(date_field) {
            Some(date) => {
                let first = seen.insert(*date);
                if !first {
                    debug!(
                        "Discarding line {}: date {} already in group",
                        record.input_index(),
                        date
                    );
                }
                first
            }
            None => true,
        })
        .collect();

    let removed = input_count - deduplicated.len();
    (deduplicated, removed)
}
