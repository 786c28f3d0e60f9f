//! # Parse Errors
//!
//! Error types for malformed path data.
//!
//! ## Example
//!
//! ```rust
//! use svg_path_parser::{parse, ParseErrorKind};
//!
//! let error = parse("M10").unwrap_err();
//! assert!(matches!(error.kind, ParseErrorKind::MissingOperands { command: 'M', .. }));
//! ```

use crate::span::{Span, Spanned};
use thiserror::Error;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A malformed path error with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at byte {}", .span.start)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of the offending token.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Command ran out of operands before the end of input.
    pub fn missing_operands(command: char, expected: usize, found: usize, span: Span) -> Self {
        Self::new(
            ParseErrorKind::MissingOperands {
                command,
                expected,
                found,
            },
            span,
        )
    }

    /// A command letter showed up where an operand was expected.
    pub fn expected_number(command: char, found: char, span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedNumber { command, found }, span)
    }

    /// Coordinates appeared before any command.
    pub fn leading_number(text: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::LeadingNumber {
                text: text.to_string(),
            },
            span,
        )
    }
}

impl Spanned for ParseError {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of malformed path data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The input ended before the command received all its operands.
    #[error("command '{command}' needs {expected} operands, found {found}")]
    MissingOperands {
        /// Command letter.
        command: char,
        /// Operands the command takes.
        expected: usize,
        /// Operands present before the input ended.
        found: usize,
    },

    /// Another command letter appeared in operand position.
    #[error("command '{command}' expected a number, found command '{found}'")]
    ExpectedNumber {
        /// Command whose operands were being read.
        command: char,
        /// The letter found instead.
        found: char,
    },

    /// A coordinate appeared before the first command letter.
    #[error("coordinate '{text}' appears before any command")]
    LeadingNumber {
        /// The number text.
        text: String,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_operands_display() {
        let error = ParseError::missing_operands('C', 6, 4, Span::new(0, 1));
        let msg = error.to_string();
        assert!(msg.contains("'C' needs 6 operands, found 4"));
        assert!(msg.contains("at byte 0"));
    }

    #[test]
    fn test_expected_number_display() {
        let error = ParseError::expected_number('L', 'Z', Span::new(7, 8));
        assert_eq!(
            error.to_string(),
            "command 'L' expected a number, found command 'Z' at byte 7"
        );
    }

    #[test]
    fn test_spanned() {
        let error = ParseError::leading_number("7", Span::new(3, 4));
        assert_eq!(Spanned::span(&error).len(), 1);
    }

    #[test]
    fn test_leading_number_display() {
        let error = ParseError::leading_number("10", Span::new(0, 2));
        assert!(error.to_string().contains("'10' appears before any command"));
    }
}
