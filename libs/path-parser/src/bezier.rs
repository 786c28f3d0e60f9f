//! # Cubic Bezier Flattening
//!
//! Samples a cubic Bezier at equal parameter steps.

use glam::DVec2;

/// Evaluate the cubic Bezier `p0 p1 p2 p3` at parameter `t`.
///
/// `P(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
///
/// ## Example
///
/// ```rust
/// use glam::DVec2;
/// use svg_path_parser::bezier::cubic_point;
///
/// let p0 = DVec2::new(0.0, 0.0);
/// let p3 = DVec2::new(3.0, 0.0);
/// let mid = cubic_point(p0, DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0), p3, 0.5);
/// assert_eq!(mid, DVec2::new(1.5, 0.0));
/// ```
pub fn cubic_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    DVec2::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Sample the curve at `t = i / segments` for `i` in `0..=segments`.
///
/// The result has `segments + 1` points; the first is `p0` and the last is
/// `p3`. A `segments` of zero is treated as one.
pub fn flatten_cubic(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, segments: u32) -> Vec<DVec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| cubic_point(p0, p1, p2, p3, f64::from(i) / f64::from(segments)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CONTROL_SETS: [[(f64, f64); 4]; 4] = [
        [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)],
        [(-5.5, 3.25), (100.0, -7.0), (0.125, 0.0), (12.0, 1e3)],
        [(1e-6, 1e6), (0.0, 0.0), (0.0, 0.0), (-1e-6, -1e6)],
        [(2.0, 2.0), (2.0, 2.0), (2.0, 2.0), (2.0, 2.0)],
    ];

    fn points(set: &[(f64, f64); 4]) -> [DVec2; 4] {
        set.map(|(x, y)| DVec2::new(x, y))
    }

    #[test]
    fn test_endpoints_are_reproduced() {
        for set in &CONTROL_SETS {
            let [p0, p1, p2, p3] = points(set);
            let start = cubic_point(p0, p1, p2, p3, 0.0);
            let end = cubic_point(p0, p1, p2, p3, 1.0);
            assert_abs_diff_eq!(start.x, p0.x, epsilon = 1e-9);
            assert_abs_diff_eq!(start.y, p0.y, epsilon = 1e-9);
            assert_abs_diff_eq!(end.x, p3.x, epsilon = 1e-9);
            assert_abs_diff_eq!(end.y, p3.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_flatten_sample_count() {
        let [p0, p1, p2, p3] = points(&CONTROL_SETS[0]);
        let samples = flatten_cubic(p0, p1, p2, p3, 5);
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0], p0);
        assert_eq!(samples[5], p3);
    }

    #[test]
    fn test_flatten_interior_samples() {
        let [p0, p1, p2, p3] = points(&CONTROL_SETS[0]);
        let samples = flatten_cubic(p0, p1, p2, p3, 5);
        // t = 0.2: a = 0.512, b = 0.384, c = 0.096, d = 0.008
        assert_abs_diff_eq!(samples[1].x, 0.384 + 0.288 + 0.032, epsilon = 1e-12);
        assert_abs_diff_eq!(samples[1].y, 0.768 + 0.192, epsilon = 1e-12);
        // symmetric control polygon: midpoint sample pairs mirror around x = 2
        assert_abs_diff_eq!(samples[2].x + samples[3].x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(samples[2].y, samples[3].y, epsilon = 1e-12);
    }

    #[test]
    fn test_flatten_zero_segments_is_one_chord() {
        let [p0, p1, p2, p3] = points(&CONTROL_SETS[1]);
        assert_eq!(flatten_cubic(p0, p1, p2, p3, 0), vec![p0, p3]);
    }
}
