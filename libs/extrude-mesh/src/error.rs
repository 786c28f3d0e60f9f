//! # Mesh Errors
//!
//! Error types for triangulation, extrusion and export.

use thiserror::Error;

/// Errors that can occur while building or writing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Outline has too few points to enclose an area
    #[error("Degenerate face: {points} points, at least 3 required")]
    DegenerateFace { points: usize },

    /// Extrusion depth is not a positive finite number
    #[error("Invalid extrusion depth: {depth}")]
    InvalidDepth { depth: f64 },

    /// Ear clipping rejected the outline
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate face error for an outline of `points` points.
    pub fn degenerate(points: usize) -> Self {
        Self::DegenerateFace { points }
    }

    /// Creates a triangulation failed error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// True for [`MeshError::DegenerateFace`].
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateFace { .. })
    }
}
