//! # Config Crate
//!
//! Centralized configuration constants for the SVG extrusion pipeline.
//! All magic numbers and tunable parameters are defined here so the parser,
//! the mesh builder and the command-line front end agree on their defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ExtrusionConfig, DEFAULT_CURVE_SEGMENTS, DEFAULT_EXTRUSION_DEPTH};
//!
//! let config = ExtrusionConfig::default();
//! assert_eq!(config.depth, DEFAULT_EXTRUSION_DEPTH);
//! assert_eq!(config.curve_segments, DEFAULT_CURVE_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure Rust values, usable from every crate
//! - **Compatible Defaults**: Defaults reproduce the reference converter output

pub mod constants;

#[cfg(test)]
mod tests;
