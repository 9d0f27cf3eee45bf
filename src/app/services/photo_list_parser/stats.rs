//! Parsing statistics and result structures for photo listings
//!
//! This module provides types for tracking how many lines were parsed or
//! rejected, and for carrying the partitioned records downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::app::models::{ErrorRecord, Record, ValidationError};

/// Parsing result: records partitioned by outcome, each in input order
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed records
    pub valid: Vec<Record>,

    /// Rejected lines
    pub errors: Vec<ErrorRecord>,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of input lines processed (at most the line cap)
    pub total_lines: usize,

    /// Number of input lines beyond the cap that were ignored
    pub lines_dropped: usize,

    /// Number of lines parsed into valid records
    pub records_parsed: usize,

    /// Number of lines rejected as error records
    pub records_rejected: usize,

    /// Rejections per error kind
    pub errors_by_kind: BTreeMap<String, usize>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a rejected line under its error kind
    pub fn add_rejection(&mut self, error: &ValidationError) {
        self.records_rejected += 1;
        *self
            .errors_by_kind
            .entry(error.kind_name().to_string())
            .or_insert(0) += 1;
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Get summary of parsing statistics
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} lines ({:.1}% valid) | Rejected: {} | Dropped past cap: {}",
            self.records_parsed,
            self.total_lines,
            self.success_rate(),
            self.records_rejected,
            self.lines_dropped
        )
    }
}
