//! Centralized configuration values shared across the SVG extrusion pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Width, in output units, that the source document is scaled to.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TARGET_WIDTH;
/// assert_eq!(DEFAULT_TARGET_WIDTH, 100.0);
/// ```
pub const DEFAULT_TARGET_WIDTH: f64 = 100.0;

/// Total extrusion depth. Caps are emitted at `+depth/2` and `-depth/2`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EXTRUSION_DEPTH;
/// let front_z = DEFAULT_EXTRUSION_DEPTH / 2.0;
/// assert_eq!(front_z, 5.0);
/// ```
pub const DEFAULT_EXTRUSION_DEPTH: f64 = 10.0;

/// Number of equal-parameter chords a cubic Bezier segment is flattened into.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CURVE_SEGMENTS;
/// // Sampling at t = 0, 1/5, ..., 1 yields segments + 1 points.
/// assert_eq!(DEFAULT_CURVE_SEGMENTS + 1, 6);
/// ```
pub const DEFAULT_CURVE_SEGMENTS: u32 = 5;

// =============================================================================
// DOCUMENT CONSTANTS
// =============================================================================

/// Fallback document width and height when neither `viewBox` nor
/// `width`/`height` attributes are present on the root element.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DOCUMENT_SIZE;
/// assert!(DEFAULT_DOCUMENT_SIZE > 0.0);
/// ```
pub const DEFAULT_DOCUMENT_SIZE: f64 = 100.0;

/// XML namespace of SVG documents.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Decimal places written for every vertex coordinate in OBJ output.
///
/// # Examples
/// ```
/// use config::constants::OBJ_DECIMAL_PLACES;
/// assert_eq!(format!("{:.*}", OBJ_DECIMAL_PLACES, 1.5), "1.500000");
/// ```
pub const OBJ_DECIMAL_PLACES: usize = 6;

// =============================================================================
// EXTRUSION CONFIG
// =============================================================================

/// Immutable snapshot of the settings for a single conversion run.
///
/// # Examples
/// ```
/// use config::constants::ExtrusionConfig;
/// let config = ExtrusionConfig::default();
/// assert!(config.depth > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionConfig {
    /// Output width the document's source width is scaled to.
    pub target_width: f64,
    /// Total extrusion depth along Z.
    pub depth: f64,
    /// Chords per cubic Bezier segment.
    pub curve_segments: u32,
}

impl ExtrusionConfig {
    /// Builds a configuration, rejecting values that cannot produce a solid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExtrusionConfig;
    /// let cfg = ExtrusionConfig::new(50.0, 2.0, 8).expect("valid config");
    /// assert_eq!(cfg.curve_segments, 8);
    /// assert!(ExtrusionConfig::new(50.0, 0.0, 8).is_err());
    /// ```
    pub fn new(target_width: f64, depth: f64, curve_segments: u32) -> Result<Self, ConfigError> {
        if !target_width.is_finite() || target_width <= 0.0 {
            return Err(ConfigError::InvalidWidth(target_width));
        }
        if !depth.is_finite() || depth <= 0.0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        if curve_segments == 0 {
            return Err(ConfigError::InvalidSegments(curve_segments));
        }
        Ok(Self {
            target_width,
            depth,
            curve_segments,
        })
    }

    /// Uniform scale factor mapping a document of `source_width` onto
    /// [`ExtrusionConfig::target_width`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExtrusionConfig;
    /// let cfg = ExtrusionConfig::default();
    /// assert_eq!(cfg.scale_for(200.0), 0.5);
    /// ```
    pub fn scale_for(&self, source_width: f64) -> f64 {
        self.target_width / source_width
    }
}

impl Default for ExtrusionConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            depth: DEFAULT_EXTRUSION_DEPTH,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the target width is zero, negative or not finite.
    InvalidWidth(f64),
    /// Raised when the extrusion depth is zero, negative or not finite.
    InvalidDepth(f64),
    /// Raised when a curve would be flattened into zero chords.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWidth(value) => {
                write!(f, "target width must be positive: {value}")
            }
            ConfigError::InvalidDepth(value) => {
                write!(f, "extrusion depth must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "curve segments must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
