//! # Cap Triangulation
//!
//! Turns an ordered boundary into index triangles covering its interior.
//! Indices are 0-based into the boundary as given, duplicates included.
//!
//! - **Fan**: fixed-anchor fan from the first point. Exact for convex outlines.
//! - **EarClip**: `earcutr` ear clipping, for concave outlines.

use crate::error::MeshError;
use glam::DVec2;

/// Cap triangulation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Triangulation {
    /// `(0, i, i + 1)` for every `i` in `1..n - 1`.
    #[default]
    Fan,
    /// Ear clipping, re-oriented to follow the outline's winding.
    EarClip,
}

impl Triangulation {
    /// Triangulate `points` with this strategy.
    ///
    /// Fewer than 3 points yields no triangles.
    pub fn triangulate(self, points: &[DVec2]) -> Result<Vec<[u32; 3]>, MeshError> {
        match self {
            Self::Fan => Ok(fan_triangulate(points.len())),
            Self::EarClip => ear_clip(points),
        }
    }
}

/// Fan triangulation of an outline with `count` points.
///
/// # Example
///
/// ```rust
/// use extrude_mesh::triangulate::fan_triangulate;
///
/// assert_eq!(fan_triangulate(4), vec![[0, 1, 2], [0, 2, 3]]);
/// assert!(fan_triangulate(2).is_empty());
/// ```
pub fn fan_triangulate(count: usize) -> Vec<[u32; 3]> {
    if count < 3 {
        return Vec::new();
    }
    (1..count - 1)
        .map(|i| [0, i as u32, (i + 1) as u32])
        .collect()
}

/// Ear-clipping triangulation of a simple outline.
///
/// A trailing point equal to the first is left out of the input to
/// `earcutr`; the returned indices still address `points` directly. Every
/// triangle is wound the same way as the outline so caps built from fan
/// and ear-clip output face the same direction.
pub fn ear_clip(points: &[DVec2]) -> Result<Vec<[u32; 3]>, MeshError> {
    let ring = open_ring(points);
    if ring.len() < 3 {
        return Ok(Vec::new());
    }

    let coords: Vec<f64> = ring.iter().flat_map(|p| [p.x, p.y]).collect();
    let indices = earcutr::earcut(&coords, &[], 2)
        .map_err(|err| MeshError::triangulation_failed(format!("{err:?}")))?;
    if indices.len() % 3 != 0 {
        return Err(MeshError::triangulation_failed(format!(
            "earcut returned {} indices",
            indices.len()
        )));
    }

    let outline_ccw = signed_area(ring) >= 0.0;
    let mut rewound = 0;
    let triangles = indices
        .chunks_exact(3)
        .map(|tri| {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            let ccw = cross(ring[a], ring[b], ring[c]) >= 0.0;
            if ccw == outline_ccw {
                [a as u32, b as u32, c as u32]
            } else {
                rewound += 1;
                [a as u32, c as u32, b as u32]
            }
        })
        .collect::<Vec<_>>();
    if rewound > 0 {
        log::debug!(
            "re-wound {rewound} of {} ear-clip triangles to match the outline",
            triangles.len()
        );
    }
    Ok(triangles)
}

/// Signed area of a ring (shoelace); positive for counter-clockwise.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn open_ring(points: &[DVec2]) -> &[DVec2] {
    match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_fan_square() {
        let tris = Triangulation::Fan.triangulate(&square()).unwrap();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_fan_counts_duplicate_closing_point() {
        let mut closed = square();
        closed.push(DVec2::ZERO);
        assert_eq!(Triangulation::Fan.triangulate(&closed).unwrap().len(), 3);
    }

    #[test]
    fn test_fewer_than_three_points() {
        let two = [DVec2::ZERO, DVec2::X];
        assert!(Triangulation::Fan.triangulate(&two).unwrap().is_empty());
        assert!(Triangulation::EarClip.triangulate(&two).unwrap().is_empty());
    }

    #[test]
    fn test_signed_area() {
        assert_relative_eq!(signed_area(&square()), 16.0);
        let mut cw = square();
        cw.reverse();
        assert_relative_eq!(signed_area(&cw), -16.0);
    }

    #[test]
    fn test_ear_clip_covers_concave_outline() {
        // L-shape, area 12
        let outline = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(2.0, 4.0),
            DVec2::new(0.0, 4.0),
            DVec2::new(0.0, 0.0),
        ];
        let tris = ear_clip(&outline).unwrap();
        assert_eq!(tris.len(), 4);
        let area: f64 = tris
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| outline[i as usize]);
                0.5 * cross(a, b, c)
            })
            .sum();
        assert_relative_eq!(area, 12.0, epsilon = 1e-9);
        assert!(tris.iter().all(|t| t.iter().all(|&i| i < 6)));
    }

    #[test]
    fn test_ear_clip_follows_clockwise_winding() {
        let mut cw = square();
        cw.reverse();
        for t in ear_clip(&cw).unwrap() {
            let c = cross(cw[t[0] as usize], cw[t[1] as usize], cw[t[2] as usize]);
            assert!(c < 0.0);
        }
    }
}
