//! # Outline Extrusion
//!
//! Extrudes a 2D outline symmetrically about `z = 0` into a closed solid:
//! a front cap at `+depth/2`, a back cap at `-depth/2` with reversed
//! winding, and two wall triangles per boundary edge.
//!
//! ## Layout
//!
//! ```text
//! vertices: [front 0..n) [back n..2n)
//! faces:    front cap, back cap, walls
//! ```
//!
//! Indices are local to the solid; [`crate::Mesh::append_solid`] offsets
//! them when the solid joins a mesh.


use crate::error::MeshError;
use crate::triangulate::Triangulation;
use config::constants::DEFAULT_EXTRUSION_DEPTH;
use glam::{DVec2, DVec3};

/// Parameters for outline extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Total thickness along Z
    pub depth: f64,
    /// Cap triangulation strategy
    pub triangulation: Triangulation,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_EXTRUSION_DEPTH,
            triangulation: Triangulation::Fan,
        }
    }
}

/// Vertices and faces of one extruded outline, indexed from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtrudedSolid {
    /// Front block followed by back block
    pub vertices: Vec<DVec3>,
    /// Triangles into `vertices`
    pub faces: Vec<[u32; 3]>,
}

impl ExtrudedSolid {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Extrudes `points` by `depth` with fan-triangulated caps.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::ops::extrude;
/// use glam::DVec2;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
/// ];
/// let solid = extrude(&square, 2.0)?;
/// assert_eq!(solid.vertex_count(), 8);
/// assert_eq!(solid.face_count(), 12);
/// # Ok::<(), extrude_mesh::MeshError>(())
/// ```
pub fn extrude(points: &[DVec2], depth: f64) -> Result<ExtrudedSolid, MeshError> {
    extrude_with(
        points,
        &ExtrudeParams {
            depth,
            triangulation: Triangulation::Fan,
        },
    )
}

/// Extrudes `points` with explicit parameters.
///
/// # Errors
///
/// - [`MeshError::DegenerateFace`] for fewer than 3 points
/// - [`MeshError::InvalidDepth`] for a non-positive or non-finite depth
/// - [`MeshError::TriangulationFailed`] when ear clipping fails
pub fn extrude_with(
    points: &[DVec2],
    params: &ExtrudeParams,
) -> Result<ExtrudedSolid, MeshError> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::degenerate(n));
    }
    if !(params.depth.is_finite() && params.depth > 0.0) {
        return Err(MeshError::InvalidDepth {
            depth: params.depth,
        });
    }

    let cap = params.triangulation.triangulate(points)?;
    log::trace!(
        "extruding {n} points by {} with {:?} caps ({} triangles)",
        params.depth,
        params.triangulation,
        cap.len()
    );
    let half = params.depth / 2.0;

    let mut vertices = Vec::with_capacity(2 * n);
    vertices.extend(points.iter().map(|p| DVec3::new(p.x, p.y, half)));
    vertices.extend(points.iter().map(|p| DVec3::new(p.x, p.y, -half)));

    let front = 0u32;
    let back = n as u32;
    let mut faces = Vec::with_capacity(2 * cap.len() + 2 * n);

    // Front cap
    for &[a, b, c] in &cap {
        faces.push([front + a, front + b, front + c]);
    }

    // Back cap, reversed winding
    for &[a, b, c] in &cap {
        faces.push([back + a, back + c, back + b]);
    }

    // Walls (quads split into two triangles)
    for i in 0..n {
        let next = (i + 1) % n;
        let (fi, fnext) = (front + i as u32, front + next as u32);
        let (bi, bnext) = (back + i as u32, back + next as u32);
        faces.push([fi, bi, bnext]);
        faces.push([fi, bnext, fnext]);
    }

    Ok(ExtrudedSolid { vertices, faces })
}
