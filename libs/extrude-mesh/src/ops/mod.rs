//! # Mesh Operations
//!
//! - **extrude**: Extrude a 2D outline along Z into a closed solid

pub mod extrude;

pub use extrude::{extrude, extrude_with, ExtrudeParams, ExtrudedSolid};
