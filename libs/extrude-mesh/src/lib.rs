//! # Extrude Mesh
//!
//! Builds closed triangle meshes from 2D outlines and writes them as
//! Wavefront OBJ.
//!
//! ## Architecture
//!
//! ```text
//! outline (DVec2) → triangulate (cap) → extrude (ExtrudedSolid) → Mesh → OBJ
//! ```
//!
//! ## Algorithms
//!
//! - **Triangulation**: fixed-anchor fan by default, ear clipping via `earcutr`
//! - **Extrusion**: symmetric about `z = 0`, caps with opposite winding,
//!   two wall triangles per edge
//!
//! ## Usage
//!
//! ```rust
//! use extrude_mesh::{export::to_obj_string, ops::extrude, Mesh};
//! use glam::DVec2;
//!
//! let mut mesh = Mesh::new();
//! let outline = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0)];
//! mesh.append_solid(extrude(&outline, 1.0)?);
//! assert!(to_obj_string(&mesh, None)?.contains("f 1 2 3"));
//! # Ok::<(), extrude_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod triangulate;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{extrude, extrude_with, ExtrudeParams, ExtrudedSolid};
pub use triangulate::Triangulation;
