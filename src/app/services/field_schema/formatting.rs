//! Post-validation formatting rules
//!
//! Format rules transform text values after they have been validated and
//! built. Non-text values pass through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::spec::FieldParams;
use crate::app::models::FieldValue;
use crate::{Error, Result};

/// Name of a format rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKey {
    /// Uppercase the first character; the rest is left as written
    Capitalize,
    /// Keep the `[min-1, max)` character window from the length parameter
    BoundedSlice,
}

impl FormatKey {
    pub fn key(&self) -> &'static str {
        match self {
            FormatKey::Capitalize => "capitalize",
            FormatKey::BoundedSlice => "bounded-slice",
        }
    }

    /// Resolve the key to its rule
    pub fn rule(self) -> FormatRule {
        match self {
            FormatKey::Capitalize => FormatRule {
                key: self,
                transform: capitalize,
            },
            FormatKey::BoundedSlice => FormatRule {
                key: self,
                transform: bounded_slice,
            },
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormatKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "capitalize" => Ok(FormatKey::Capitalize),
            "bounded-slice" => Ok(FormatKey::BoundedSlice),
            other => Err(Error::data_validation(format!(
                "Unknown format rule '{}'",
                other
            ))),
        }
    }
}

type Transform = fn(&str, &FieldParams) -> String;

/// A resolved format rule
#[derive(Clone, Copy)]
pub struct FormatRule {
    key: FormatKey,
    transform: Transform,
}

impl fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRule").field("key", &self.key).finish()
    }
}

impl FormatRule {
    pub fn key(&self) -> FormatKey {
        self.key
    }

    pub fn apply(&self, value: FieldValue, params: &FieldParams) -> FieldValue {
        match value {
            FieldValue::Text(text) => FieldValue::Text((self.transform)(&text, params)),
            other => other,
        }
    }
}

fn capitalize(text: &str, _params: &FieldParams) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn bounded_slice(text: &str, params: &FieldParams) -> String {
    match params.length {
        Some(bounds) => text.chars().skip(bounds.start()).take(bounds.max).collect(),
        None => text.to_string(),
    }
}
