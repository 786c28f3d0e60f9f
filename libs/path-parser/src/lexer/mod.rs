//! # Path Data Lexer
//!
//! Tokenizes the contents of a `d` attribute in a single forward scan.
//! Command letters and numeric literals become tokens; every other
//! character (whitespace, commas, unsupported command letters) is dropped.
//!
//! ## Example
//!
//! ```rust
//! use svg_path_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("M0,0 L10-5").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Command('M'));
//! assert_eq!(tokens[5].text, "-5");
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{is_command_letter, Token, TokenKind};

use crate::span::Span;

// =============================================================================
// LEXER
// =============================================================================

/// Path data lexer.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for path data.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// ## Returns
    ///
    /// Vector of tokens ending with an EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.scan_token();
        }

        let eof = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Span::at(eof), String::new()));

        self.tokens
    }

    /// Scan a single token, or skip one unrecognized character.
    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let Some(c) = self.cursor.peek() else {
            return;
        };

        if is_command_letter(c) {
            self.cursor.advance();
            self.push(TokenKind::Command(c), start);
            return;
        }

        if let Some(len) = number_length(self.cursor.rest()) {
            self.cursor.advance_bytes(len);
            self.push(TokenKind::Number, start);
            return;
        }

        self.cursor.advance();
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

/// Length in bytes of the numeric literal at the start of `input`, if any.
///
/// Grammar: `[+-]? digits* ('.' digits+)? ([eE] [+-]? digits+)?` with at
/// least one mantissa digit. A dot not followed by a digit ends the number,
/// and so does an exponent marker not followed by a digit.
fn number_length(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let integer_end = digits_from(i);
    let has_integer = integer_end > i;
    i = integer_end;

    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
        i = digits_from(i + 1);
    } else if !has_integer {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent_end = digits_from(j);
        if exponent_end > j {
            i = exponent_end;
        }
    }

    Some(i)
}

// =============================================================================
// TESTS
// =============================================================================
