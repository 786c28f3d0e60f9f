//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants.

use crate::constants::*;

// =============================================================================
// EXTRUSION DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_curve_segments_matches_reference() {
    // Reference converter flattens every cubic into five chords
    assert_eq!(DEFAULT_CURVE_SEGMENTS, 5);
}

#[test]
fn test_default_dimensions() {
    assert_eq!(DEFAULT_TARGET_WIDTH, 100.0);
    assert_eq!(DEFAULT_EXTRUSION_DEPTH, 10.0);
    assert_eq!(DEFAULT_DOCUMENT_SIZE, 100.0);
}

#[test]
fn test_obj_decimal_places() {
    assert_eq!(format!("{:.*}", OBJ_DECIMAL_PLACES, -0.25), "-0.250000");
}

#[test]
fn test_svg_namespace() {
    assert!(SVG_NAMESPACE.starts_with("http://www.w3.org/"));
}
