//! # SVG Path Parser
//!
//! Parses the SVG path mini-language (the `d` attribute of `<path>`) into
//! polylines. Cubic Bezier segments are flattened into straight chords.
//!
//! ## Architecture
//!
//! ```text
//! d string → Lexer (tokens) → decode (Command) → trace (Polyline)
//! ```
//!
//! ## Supported Commands
//!
//! `M m L l H h V v C c Z z`. Other command letters are skipped along with
//! their operands. Numbers that follow a complete command are ignored, so
//! implicit command repetition is not supported.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use svg_path_parser::parse;
//!
//! let line = parse("M0,0 l10,0 l0,10 l-10,0 Z").unwrap();
//! assert_eq!(line.points(), &[
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(10.0, 0.0),
//!     DVec2::new(10.0, 10.0),
//!     DVec2::new(0.0, 10.0),
//!     DVec2::new(0.0, 0.0),
//! ]);
//! ```

pub mod bezier;
pub mod command;
pub mod error;
pub mod lexer;
pub mod polyline;
pub mod span;
pub mod trace;

pub use command::{decode, Command};
pub use error::{ParseError, ParseErrorKind};
pub use polyline::Polyline;
pub use span::{Span, Spanned};
pub use trace::trace;

use config::constants::{ExtrusionConfig, DEFAULT_CURVE_SEGMENTS};
use lexer::Lexer;

// =============================================================================
// OPTIONS
// =============================================================================

/// Options controlling how path data is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Chords per cubic Bezier segment.
    pub curve_segments: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            curve_segments: DEFAULT_CURVE_SEGMENTS,
        }
    }
}

impl From<&ExtrusionConfig> for ParseOptions {
    fn from(config: &ExtrusionConfig) -> Self {
        Self {
            curve_segments: config.curve_segments,
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Parse path data into a single polyline with default options.
///
/// All sub-paths are concatenated in order. Empty input yields an empty
/// polyline.
///
/// ## Errors
///
/// Returns [`ParseError`] when a command is short of operands or when a
/// coordinate precedes the first command.
pub fn parse(d: &str) -> Result<Polyline, ParseError> {
    parse_with(d, &ParseOptions::default())
}

/// Parse path data into a single polyline with explicit options.
pub fn parse_with(d: &str, options: &ParseOptions) -> Result<Polyline, ParseError> {
    let subpaths = parse_subpaths(d, options)?;
    let mut line = Polyline::new();
    for subpath in subpaths {
        line.extend(subpath);
    }
    Ok(line)
}

/// Parse path data into one polyline per sub-path.
///
/// Every move command starts a new polyline.
///
/// ```rust
/// use svg_path_parser::{parse_subpaths, ParseOptions};
///
/// let parts = parse_subpaths("M0,0 H4 V4 Z M1,1 H2 V2 Z", &ParseOptions::default()).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].len(), 4);
/// ```
pub fn parse_subpaths(d: &str, options: &ParseOptions) -> Result<Vec<Polyline>, ParseError> {
    let tokens = Lexer::new(d).tokenize();
    let commands = decode(&tokens)?;
    log::trace!("decoded {} commands from {} tokens", commands.len(), tokens.len());
    Ok(trace(&commands, options.curve_segments))
}
