//! # Mesh Data Structure
//!
//! Append-only triangle mesh accumulated across extruded outlines.

use crate::error::MeshError;
use crate::ops::ExtrudedSolid;
use glam::DVec3;

/// A triangle mesh with vertices and 0-based indices.
///
/// Each appended solid occupies a contiguous vertex range, and its faces
/// only reference that range.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::{ops::extrude, Mesh};
/// use glam::DVec2;
///
/// let triangle = [DVec2::ZERO, DVec2::X, DVec2::Y];
/// let mut mesh = Mesh::new();
/// mesh.append_solid(extrude(&triangle, 1.0)?);
/// mesh.append_solid(extrude(&triangle, 1.0)?);
/// assert_eq!(mesh.vertex_count(), 12);
/// assert!(mesh.validate().is_ok());
/// # Ok::<(), extrude_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    #[cfg(test)]
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Appends a solid, offsetting its local indices by the current
    /// vertex count.
    pub fn append_solid(&mut self, solid: ExtrudedSolid) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend(solid.vertices);
        self.triangles.extend(
            solid
                .faces
                .into_iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Checks that every triangle index addresses an existing vertex.
    ///
    /// Zero-area triangles are allowed: an outline that repeats its first
    /// point produces them.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len() as u32;

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(index) = tri.iter().find(|&&index| index >= vertex_count) {
                return Err(MeshError::validation_failed(format!(
                    "triangle {i} references vertex {index}, mesh has {vertex_count}"
                )));
            }
        }

        Ok(())
    }
}
