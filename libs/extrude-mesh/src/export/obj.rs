//! # Wavefront OBJ Writer
//!
//! Writes `v x y z` and `f a b c` lines; no normals or texture coordinates.
//! Face indices are written 1-based.
//!
//! ```text
//! # header comments
//!
//! v 0.000000 0.000000 1.000000
//! ...
//!
//! f 1 2 3
//! ...
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::OBJ_DECIMAL_PLACES;
use std::io::Write;

/// Provenance written as comment lines at the top of the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjHeader {
    /// Width of the source document in user units
    pub source_width: f64,
    /// Height of the source document in user units
    pub source_height: f64,
    /// Width the document was scaled to
    pub target_width: f64,
    /// Extrusion depth
    pub depth: f64,
    /// Name of the source file
    pub source_name: String,
}

impl ObjHeader {
    fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "# OBJ file generated from SVG")?;
        writeln!(
            out,
            "# Original SVG: {:?}x{:?}",
            self.source_width, self.source_height
        )?;
        // Whole target sizes print without a fraction: `100`, but `50.5`
        writeln!(
            out,
            "# Scaled to: {} units wide, {} units deep",
            self.target_width, self.depth
        )?;
        writeln!(out, "# Generated from: {}", self.source_name)?;
        writeln!(out)
    }
}

/// Writes `mesh` as OBJ text.
///
/// The vertex block and the face block are separated by a blank line.
pub fn write_obj<W: Write>(
    out: &mut W,
    mesh: &Mesh,
    header: Option<&ObjHeader>,
) -> Result<(), MeshError> {
    if let Some(header) = header {
        header.write_to(out)?;
    }

    for v in mesh.vertices() {
        writeln!(
            out,
            "v {:.p$} {:.p$} {:.p$}",
            v.x,
            v.y,
            v.z,
            p = OBJ_DECIMAL_PLACES
        )?;
    }

    writeln!(out)?;

    for [a, b, c] in mesh.triangles() {
        writeln!(out, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    out.flush()?;
    Ok(())
}

/// Renders `mesh` as an OBJ string.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::{export::to_obj_string, ops::extrude, Mesh};
/// use glam::DVec2;
///
/// let mut mesh = Mesh::new();
/// mesh.append_solid(extrude(&[DVec2::ZERO, DVec2::X, DVec2::Y], 2.0)?);
/// let text = to_obj_string(&mesh, None)?;
/// assert!(text.starts_with("v 0.000000 0.000000 1.000000\n"));
/// assert!(text.contains("\n\nf 1 2 3\n"));
/// # Ok::<(), extrude_mesh::MeshError>(())
/// ```
pub fn to_obj_string(mesh: &Mesh, header: Option<&ObjHeader>) -> Result<String, MeshError> {
    let mut buffer = Vec::new();
    write_obj(&mut buffer, mesh, header)?;
    String::from_utf8(buffer).map_err(|err| MeshError::validation_failed(err.to_string()))
}
