//! # Conversion Run
//!
//! Drives every path element of a document through parse, scale and
//! extrude, and accumulates the solids into one mesh.
//!
//! ```text
//! PathEntity (d) → parse → scale + flip y → extrude → ConversionRun (Mesh)
//! ```
//!
//! Each path is processed on its own; a degenerate or malformed path is
//! recorded in the report and the run continues. With the `parallel`
//! feature paths are processed on the rayon pool and merged in document
//! order, so the output is the same either way.

use crate::error::ConversionError;
use crate::options::{ConvertOptions, SubpathMode};
use crate::report::{ConversionReport, PathId};
use extrude_mesh::export::{write_obj, ObjHeader};
use extrude_mesh::{extrude_with, ExtrudedSolid, Mesh};
use glam::DVec2;
use std::io::Write;
use std::path::Path;
use svg_document::{Document, DocumentSize, PathEntity};
use svg_path_parser::{parse_subpaths, parse_with, Polyline};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// RESULT
// =============================================================================

/// A finished conversion: the mesh and what happened along the way.
#[derive(Debug)]
pub struct Conversion {
    pub mesh: Mesh,
    pub report: ConversionReport,
    /// Size of the source document
    pub size: DocumentSize,
    pub options: ConvertOptions,
}

impl Conversion {
    /// Header comments describing this conversion.
    pub fn header(&self, source_name: impl Into<String>) -> ObjHeader {
        ObjHeader {
            source_width: self.size.width,
            source_height: self.size.height,
            target_width: self.options.extrusion.target_width,
            depth: self.options.extrusion.depth,
            source_name: source_name.into(),
        }
    }

    /// Writes the mesh as OBJ, with header comments naming `source_name`.
    pub fn write_obj<W: Write>(
        &self,
        out: &mut W,
        source_name: &str,
    ) -> Result<(), ConversionError> {
        let header = self.header(source_name);
        write_obj(out, &self.mesh, Some(&header)).map_err(ConversionError::Export)
    }
}

// =============================================================================
// RUN
// =============================================================================

/// Outcome of processing one path element.
#[derive(Debug)]
enum PathOutcome {
    Converted(Vec<ExtrudedSolid>),
    Degenerate,
    Failed(ConversionError),
}

/// Accumulator owned by a single conversion.
#[derive(Debug, Default)]
struct ConversionRun {
    mesh: Mesh,
    report: ConversionReport,
}

impl ConversionRun {
    fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, path: PathId, outcome: PathOutcome) {
        match outcome {
            PathOutcome::Converted(solids) => {
                log::debug!("{path}: {} solid(s)", solids.len());
                for solid in solids {
                    self.mesh.append_solid(solid);
                }
                self.report.paths_converted += 1;
            }
            PathOutcome::Degenerate => {
                log::warn!("{path}: fewer than 3 points, skipped");
                self.report.skipped_degenerate.push(path);
            }
            PathOutcome::Failed(err) => {
                log::warn!("{err}");
                self.report.failed.push(err);
            }
        }
    }

    fn finish(self, size: DocumentSize, options: ConvertOptions) -> Conversion {
        log::info!(
            "converted {}/{} paths: {} vertices, {} faces",
            self.report.paths_converted,
            self.report.paths_found,
            self.mesh.vertex_count(),
            self.mesh.triangle_count()
        );
        Conversion {
            mesh: self.mesh,
            report: self.report,
            size,
            options,
        }
    }
}

/// Converts a loaded document.
///
/// # Example
///
/// ```rust
/// use svg2obj::{convert, ConvertOptions};
/// use svg_document::Document;
///
/// let doc = Document::parse(
///     r#"<svg viewBox="0 0 10 10"><path d="M0,0 L10,0 L10,10 L0,10 Z"/></svg>"#,
/// )?;
/// let conversion = convert(&doc, &ConvertOptions::default());
/// assert_eq!(conversion.mesh.vertex_count(), 10);
/// # Ok::<(), svg_document::DocumentError>(())
/// ```
pub fn convert(document: &Document, options: &ConvertOptions) -> Conversion {
    let scale = options.extrusion.scale_for(document.size.width);
    log::debug!(
        "scale {scale} ({} -> {})",
        document.size.width,
        options.extrusion.target_width
    );

    let mut run = ConversionRun::new();
    run.report.paths_found = document.paths.len();
    run.report.paths_without_data = document
        .paths
        .iter()
        .filter(|entity| entity.d.as_deref().map_or(true, |d| d.trim().is_empty()))
        .map(PathId::from)
        .collect();

    let drawable: Vec<(&PathEntity, &str)> = document.drawable_paths().collect();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(PathId, PathOutcome)> = drawable
        .par_iter()
        .map(|&(entity, d)| {
            let outcome = process_path(entity, d, scale, options);
            (PathId::from(entity), outcome)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(PathId, PathOutcome)> = drawable
        .iter()
        .map(|&(entity, d)| {
            let outcome = process_path(entity, d, scale, options);
            (PathId::from(entity), outcome)
        })
        .collect();

    for (path, outcome) in outcomes {
        run.record(path, outcome);
    }

    run.finish(document.size, *options)
}

/// Loads the document at `path` and converts it.
pub fn convert_file(
    path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<Conversion, ConversionError> {
    let document = Document::load(path)?;
    Ok(convert(&document, options))
}

// =============================================================================
// PER PATH
// =============================================================================

fn process_path(
    entity: &PathEntity,
    d: &str,
    scale: f64,
    options: &ConvertOptions,
) -> PathOutcome {
    let path = PathId::from(entity);
    let parse_options = options.parse_options();

    let outlines = match options.subpaths {
        SubpathMode::Concatenate => parse_with(d, &parse_options).map(|line| vec![line]),
        SubpathMode::Split => parse_subpaths(d, &parse_options),
    };
    let outlines = match outlines {
        Ok(outlines) => outlines,
        Err(err) => return PathOutcome::Failed(ConversionError::malformed(path, err)),
    };

    let params = options.extrude_params();
    let mut solids = Vec::with_capacity(outlines.len());
    for outline in outlines {
        let points = to_model_space(&outline, scale);
        match extrude_with(&points, &params) {
            Ok(solid) => solids.push(solid),
            Err(err) if err.is_degenerate() => {
                log::debug!("{path}: dropping outline with {} points", points.len());
            }
            Err(err) => return PathOutcome::Failed(ConversionError::extrusion(path, err)),
        }
    }

    if solids.is_empty() {
        PathOutcome::Degenerate
    } else {
        PathOutcome::Converted(solids)
    }
}

/// Scales document coordinates and flips the y axis.
pub fn to_model_space(outline: &Polyline, scale: f64) -> Vec<DVec2> {
    outline
        .points()
        .iter()
        .map(|p| DVec2::new(p.x * scale, -p.y * scale))
        .collect()
}
