//! # Polyline
//!
//! Ordered boundary points produced by the path interpreter.

use glam::DVec2;

/// An ordered sequence of 2D points approximating a path boundary.
///
/// Duplicates are kept: a closed path usually repeats its first point at
/// the end.
///
/// ## Example
///
/// ```rust
/// use glam::DVec2;
/// use svg_path_parser::Polyline;
///
/// let line = Polyline::from(vec![DVec2::ZERO, DVec2::X, DVec2::ZERO]);
/// assert!(line.is_closed());
/// assert_eq!(line.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<DVec2>,
}

impl Polyline {
    /// Creates an empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point.
    pub fn push(&mut self, point: DVec2) {
        self.points.push(point);
    }

    /// Returns the points in traversal order.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points were appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last appended point.
    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    /// True when the polyline has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Appends every point of `other`.
    pub fn extend(&mut self, other: Polyline) {
        self.points.extend(other.points);
    }

    /// Returns a new polyline with `f` applied to every point.
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use svg_path_parser::Polyline;
    ///
    /// let line = Polyline::from(vec![DVec2::new(1.0, 2.0)]);
    /// let flipped = line.map(|p| DVec2::new(p.x, -p.y));
    /// assert_eq!(flipped.points(), &[DVec2::new(1.0, -2.0)]);
    /// ```
    pub fn map(&self, f: impl Fn(DVec2) -> DVec2) -> Self {
        Self {
            points: self.points.iter().copied().map(f).collect(),
        }
    }

    /// Consumes the polyline, returning its points.
    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }
}

impl From<Vec<DVec2>> for Polyline {
    fn from(points: Vec<DVec2>) -> Self {
        Self { points }
    }
}

impl FromIterator<DVec2> for Polyline {
    fn from_iter<I: IntoIterator<Item = DVec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polyline() {
        let line = Polyline::new();
        assert!(line.is_empty());
        assert!(!line.is_closed());
        assert_eq!(line.last(), None);
    }

    #[test]
    fn test_single_point_is_not_closed() {
        let line = Polyline::from(vec![DVec2::ONE]);
        assert!(!line.is_closed());
    }

    #[test]
    fn test_extend_concatenates() {
        let mut a: Polyline = [DVec2::ZERO, DVec2::X].into_iter().collect();
        let b = Polyline::from(vec![DVec2::Y]);
        a.extend(b);
        assert_eq!(a.points(), &[DVec2::ZERO, DVec2::X, DVec2::Y]);
    }
}
