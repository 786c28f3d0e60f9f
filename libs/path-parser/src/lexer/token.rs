//! # Tokens
//!
//! Token types for the path data lexer. Path data has exactly two token
//! categories: single command letters and numeric literals.
//!
//! ## Example
//!
//! ```rust
//! use svg_path_parser::lexer::{Token, TokenKind};
//! use svg_path_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::new(0, 2), "10".to_string());
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::{Span, Spanned};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The numeric value, if this is a number token.
    ///
    /// The lexer only emits number tokens that match the float grammar, so
    /// this is `Some` for every number it produces.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => self.text.parse().ok(),
            _ => None,
        }
    }

    /// The command letter, if this is a command token.
    pub fn command(&self) -> Option<char> {
        match self.kind {
            TokenKind::Command(letter) => Some(letter),
            _ => None,
        }
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of `M m L l H h V v C c Z z`.
    Command(char),
    /// Numeric literal like `10`, `-3.5` or `1e-3`.
    Number,
    /// End of input.
    Eof,
}

/// True for the command letters the lexer recognizes.
pub fn is_command_letter(c: char) -> bool {
    matches!(
        c,
        'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'Z' | 'z'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_letters() {
        for c in "MmLlHhVvCcZz".chars() {
            assert!(is_command_letter(c), "{c} should be a command");
        }
        for c in "AaQqSsTtEe".chars() {
            assert!(!is_command_letter(c), "{c} should not be a command");
        }
    }

    #[test]
    fn test_token_command_accessor() {
        let token = Token::new(TokenKind::Command('L'), Span::new(0, 1), "L".to_string());
        assert_eq!(token.command(), Some('L'));
        let number = Token::new(TokenKind::Number, Span::new(1, 2), "5".to_string());
        assert_eq!(number.command(), None);
        assert_eq!(number.value(), Some(5.0));
        assert_eq!(token.value(), None);
    }
}
