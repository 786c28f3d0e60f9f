//! # Source Spans
//!
//! Byte ranges into a path data string, attached to tokens and errors.

/// Half-open byte range `start..end` in the path data string.
///
/// ## Example
///
/// ```rust
/// use svg_path_parser::Span;
///
/// let span = Span::new(2, 5);
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte of the range.
    pub end: usize,
}

impl Span {
    /// Create a span from byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty span at a single offset.
    pub const fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Length of the span in bytes.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-length spans.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Anything that knows where it came from in the source.
pub trait Spanned {
    /// Source location of this item.
    fn span(&self) -> Span;
}
