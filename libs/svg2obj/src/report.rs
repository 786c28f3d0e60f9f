//! # Conversion Report
//!
//! What happened to each path element during a run.

use crate::error::ConversionError;
use serde::{Serialize, Serializer};
use std::fmt;
use svg_document::PathEntity;

/// Identifies a path element in messages and reports.
///
/// Displays as `#id` when the element has an `id`, else `path[index]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathId {
    pub index: usize,
    pub id: Option<String>,
}

impl PathId {
    pub fn new(index: usize, id: Option<String>) -> Self {
        Self { index, id }
    }
}

impl From<&PathEntity> for PathId {
    fn from(entity: &PathEntity) -> Self {
        Self::new(entity.index, entity.id.clone())
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "#{id}"),
            None => write!(f, "path[{}]", self.index),
        }
    }
}

impl Serialize for PathId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome counts and per-path diagnostics of a conversion run.
#[derive(Debug, Default, Serialize)]
pub struct ConversionReport {
    /// `<path>` elements in the document, with or without data
    pub paths_found: usize,
    /// Paths that contributed at least one solid
    pub paths_converted: usize,
    /// Paths without a `d` attribute
    pub paths_without_data: Vec<PathId>,
    /// Paths whose outline had fewer than 3 points
    pub skipped_degenerate: Vec<PathId>,
    /// Paths that failed to parse or extrude
    #[serde(serialize_with = "serialize_failures")]
    pub failed: Vec<ConversionError>,
}

impl ConversionReport {
    /// True when no path failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Serialize)]
struct FailureEntry<'a> {
    path: Option<&'a PathId>,
    error: String,
}

fn serialize_failures<S: Serializer>(
    failed: &[ConversionError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(failed.iter().map(|err| FailureEntry {
        path: err.path(),
        error: err.to_string(),
    }))
}
