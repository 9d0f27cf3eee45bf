//! Album organization for parsed photo records
//!
//! This module turns valid records into album groups: photos are grouped by
//! city, deduplicated by capture date within each group, ordered by date and
//! given their position inside the group.
//!
//! # Architecture
//!
//! - [`organizer`] - The [`AlbumOrganizer`] pipeline and the resulting [`Album`]
//! - [`deduplication`] - First-seen-wins deduplication by capture date
//! - [`stats`] - Organization statistics
//!
//! # Pipeline
//!
//! 1. **Grouping**: records are bucketed by their city, keeping input order
//! 2. **Deduplication**: within a bucket, later records repeating a date are dropped
//! 3. **Ordering**: the bucket is sorted ascending by date
//! 4. **Positioning**: each record receives its rank and the bucket size
//!
//! Grouping needs every valid record up front; it is a batch step.

pub mod deduplication;
pub mod organizer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use deduplication::deduplicate_by_date;
pub use organizer::{Album, AlbumOrganizer};
pub use stats::{OrganizeResult, OrganizeStats};
