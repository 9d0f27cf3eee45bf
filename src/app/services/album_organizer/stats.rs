//! Organization statistics and result structures

use serde::{Deserialize, Serialize};

use super::organizer::Album;

/// Statistics for album organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizeStats {
    /// Number of valid records received
    pub total_input: usize,
    /// Number of album groups formed
    pub groups: usize,
    /// Number of records discarded as same-date duplicates
    pub duplicates_removed: usize,
    /// Number of records lacking a group or date field
    pub ungrouped: usize,
    /// Number of records placed in the album
    pub final_output: usize,
}

impl OrganizeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get summary of organization statistics
    pub fn summary(&self) -> String {
        format!(
            "Organized {} -> {} photos in {} groups | Duplicates removed: {} | Ungrouped: {}",
            self.total_input, self.final_output, self.groups, self.duplicates_removed, self.ungrouped
        )
    }
}

/// Result of album organization
#[derive(Debug, Clone)]
pub struct OrganizeResult {
    pub album: Album,
    pub stats: OrganizeStats,
}
