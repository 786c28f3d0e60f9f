//! # Conversion Errors
//!
//! Run-level failures abort a conversion. Per-path failures carry the
//! path's [`PathId`] and are collected into the report instead.

use crate::report::PathId;
use extrude_mesh::MeshError;
use svg_document::DocumentError;
use svg_path_parser::ParseError;
use thiserror::Error;

/// Errors produced by a conversion run.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The document could not be loaded
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A path's data is malformed
    #[error("{path}: malformed path data: {source}")]
    MalformedPath {
        path: PathId,
        #[source]
        source: ParseError,
    },

    /// A path could not be extruded
    #[error("{path}: {source}")]
    Extrusion {
        path: PathId,
        #[source]
        source: MeshError,
    },

    /// Writing the mesh failed
    #[error("failed to write mesh: {0}")]
    Export(#[source] MeshError),
}

impl ConversionError {
    /// Creates a malformed path error.
    pub fn malformed(path: PathId, source: ParseError) -> Self {
        Self::MalformedPath { path, source }
    }

    /// Creates an extrusion error.
    pub fn extrusion(path: PathId, source: MeshError) -> Self {
        Self::Extrusion { path, source }
    }

    /// The path the error belongs to, for per-path failures.
    pub fn path(&self) -> Option<&PathId> {
        match self {
            Self::MalformedPath { path, .. } | Self::Extrusion { path, .. } => Some(path),
            _ => None,
        }
    }
}
