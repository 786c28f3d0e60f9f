//! # svg2obj
//!
//! Extrudes the path outlines of an SVG document into a closed triangle
//! mesh and writes it as Wavefront OBJ.
//!
//! ## Architecture
//!
//! ```text
//! svg-document (Document) → svg-path-parser (Polyline) → extrude-mesh (Mesh) → OBJ
//! ```
//!
//! The document is scaled so its width maps onto the target width, and
//! the y axis is flipped so the outline reads upright in a y-up viewer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use svg2obj::{convert_file, ConvertOptions};
//!
//! let conversion = convert_file("logo.svg", &ConvertOptions::default())?;
//! let mut obj = Vec::new();
//! conversion.write_obj(&mut obj, "logo.svg")?;
//! println!("{} paths skipped", conversion.report.skipped_degenerate.len());
//! # Ok::<(), svg2obj::ConversionError>(())
//! ```

pub mod convert;
pub mod error;
pub mod options;
pub mod report;

pub use convert::{convert, convert_file, to_model_space, Conversion};
pub use error::ConversionError;
pub use options::{ConvertOptions, SubpathMode};
pub use report::{ConversionReport, PathId};
