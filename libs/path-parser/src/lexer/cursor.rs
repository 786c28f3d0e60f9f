//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks the byte offset as it advances.
//!
//! ## Example
//!
//! ```rust
//! use svg_path_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("M0");
//! assert_eq!(cursor.peek(), Some('M'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('0'));
//! ```

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with byte offset tracking.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.byte
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.byte..]
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Advance by `len` bytes. The caller guarantees `len` lands on a char
    /// boundary, which holds for the ASCII runs the lexer measures.
    pub fn advance_bytes(&mut self, len: usize) {
        self.byte = (self.byte + len).min(self.source.len());
    }

    /// Source slice between a previous position and the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
