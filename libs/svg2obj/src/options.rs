//! # Conversion Options

use config::constants::ExtrusionConfig;
use extrude_mesh::{ExtrudeParams, Triangulation};
use svg_path_parser::ParseOptions;

/// How a path with several move commands becomes outlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubpathMode {
    /// All sub-paths joined into one outline.
    #[default]
    Concatenate,
    /// One outline, and one solid, per sub-path.
    Split,
}

/// Settings for a conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    pub extrusion: ExtrusionConfig,
    pub triangulation: Triangulation,
    pub subpaths: SubpathMode,
}

impl ConvertOptions {
    pub fn new(extrusion: ExtrusionConfig) -> Self {
        Self {
            extrusion,
            ..Self::default()
        }
    }

    pub fn with_triangulation(mut self, triangulation: Triangulation) -> Self {
        self.triangulation = triangulation;
        self
    }

    pub fn with_subpaths(mut self, subpaths: SubpathMode) -> Self {
        self.subpaths = subpaths;
        self
    }

    pub(crate) fn parse_options(&self) -> ParseOptions {
        ParseOptions::from(&self.extrusion)
    }

    pub(crate) fn extrude_params(&self) -> ExtrudeParams {
        ExtrudeParams {
            depth: self.extrusion.depth,
            triangulation: self.triangulation,
        }
    }
}
