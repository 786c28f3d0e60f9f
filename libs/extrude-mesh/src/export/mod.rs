//! # Mesh Export
//!
//! Text serializations of a finished [`crate::Mesh`].

pub mod obj;

pub use obj::{to_obj_string, write_obj, ObjHeader};
