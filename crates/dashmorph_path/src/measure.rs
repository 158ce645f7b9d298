//! Arc-length measurement
//!
//! [`PathMeasure`] is the capability the compiler depends on. Straight
//! segments are measured exactly; implementations only differ in how they
//! measure cubic curves.
//!
//! - [`LyonMeasure`] uses lyon's curve approximation (default)
//! - [`SubdivisionMeasure`] sums chords over a fixed number of steps
//!
//! # Example
//!
//! ```rust
//! use dashmorph_path::{LyonMeasure, PathMeasure};
//!
//! let len = LyonMeasure::default().measure_length("M 0 0 L 3 4")?;
//! assert!((len - 5.0).abs() < 1e-9);
//! # Ok::<(), dashmorph_path::PathError>(())
//! ```

use dashmorph_core::Point;
use lyon::geom::{point, CubicBezierSegment};

use crate::error::PathError;
use crate::parse::parse_path_data;
use crate::path::{Path, PathCommand};

/// Measures the length of paths
pub trait PathMeasure {
    /// Arc length of the cubic curve `from → to` with the given controls
    fn cubic_length(&self, from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> f64;

    /// Total length of a path
    ///
    /// A segment before any move-to starts at the origin. Close commands add
    /// the straight segment back to the subpath start.
    fn measure_path(&self, path: &Path) -> f64 {
        let mut length = 0.0;
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    length += current.distance(p);
                    current = p;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    length += self.cubic_length(current, control1, control2, end);
                    current = end;
                }
                PathCommand::Close => {
                    length += current.distance(subpath_start);
                    current = subpath_start;
                }
            }
        }

        length
    }

    /// Total length of SVG path data; the empty string measures 0
    fn measure_length(&self, data: &str) -> Result<f64, PathError> {
        let path = parse_path_data(data)?;
        Ok(self.measure_path(&path))
    }
}

/// Default tolerance for [`LyonMeasure`]
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Measures curves with lyon's quadratic-approximation arc length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LyonMeasure {
    pub tolerance: f64,
}

impl LyonMeasure {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for LyonMeasure {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl PathMeasure for LyonMeasure {
    fn cubic_length(&self, from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> f64 {
        // Zero-size curves have nothing to approximate
        let hull = from.distance(ctrl1) + ctrl1.distance(ctrl2) + ctrl2.distance(to);
        if hull < f64::EPSILON {
            return 0.0;
        }

        let segment = CubicBezierSegment {
            from: point(from.x, from.y),
            ctrl1: point(ctrl1.x, ctrl1.y),
            ctrl2: point(ctrl2.x, ctrl2.y),
            to: point(to.x, to.y),
        };
        let length = segment.approximate_length(self.tolerance);

        if length.is_finite() {
            length
        } else {
            tracing::trace!("lyon length not finite, subdividing instead");
            SubdivisionMeasure::default().cubic_length(from, ctrl1, ctrl2, to)
        }
    }
}

/// Default step count for [`SubdivisionMeasure`]
pub const DEFAULT_STEPS: u32 = 256;

/// Measures curves by summing chords of a uniform subdivision.
///
/// Needs no geometry library; with the default step count the error on
/// canvas-sized curves stays well below 0.01 units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubdivisionMeasure {
    pub steps: u32,
}

impl SubdivisionMeasure {
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
        }
    }
}

impl Default for SubdivisionMeasure {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl PathMeasure for SubdivisionMeasure {
    fn cubic_length(&self, from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> f64 {
        let steps = self.steps.max(1);
        let mut length = 0.0;
        let mut prev = from;
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let p = cubic_point(from, ctrl1, ctrl2, to, t);
            length += prev.distance(p);
            prev = p;
        }
        length
    }
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_lengths() {
        let m = LyonMeasure::default();
        assert!((m.measure_length("M 20 30 L 80 30").unwrap() - 60.0).abs() < 1e-9);
        assert!((m.measure_length("M 20 20 L 80 80").unwrap() - 7200f64.sqrt()).abs() < 1e-9);
        assert_eq!(m.measure_length("").unwrap(), 0.0);
    }

    #[test]
    fn test_close_adds_return_segment() {
        let m = LyonMeasure::default();
        let len = m.measure_length("M 0 0 L 10 0 L 10 10 Z").unwrap();
        assert!((len - (20.0 + 200f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_data_is_an_error() {
        let m = LyonMeasure::default();
        assert!(m.measure_length("M 0 0 L x 4").is_err());
    }

    #[test]
    fn test_cubic_is_longer_than_chord() {
        let m = LyonMeasure::default();
        let len = m.measure_length("M 80 30 C 50 30 50 20 20 20").unwrap();
        let chord = Point::new(80.0, 30.0).distance(Point::new(20.0, 20.0));
        // Arc length lies between the chord and the control polygon
        assert!(len > chord, "{} should exceed chord {}", len, chord);
        assert!(len < 70.0, "{} should be under the hull length", len);
    }

    #[test]
    fn test_straight_cubic_matches_line() {
        let m = LyonMeasure::default();
        let len = m.measure_length("M 80 50 C 65 50 65 50 50 50").unwrap();
        assert!((len - 30.0).abs() < 1e-3, "got {}", len);
    }

    #[test]
    fn test_degenerate_cubic_is_zero() {
        let p = Point::new(50.0, 50.0);
        assert_eq!(LyonMeasure::default().cubic_length(p, p, p, p), 0.0);
        assert_eq!(SubdivisionMeasure::default().cubic_length(p, p, p, p), 0.0);
    }

    #[test]
    fn test_measurers_agree() {
        let lyon = LyonMeasure::default();
        let sub = SubdivisionMeasure::default();
        for d in [
            "M 80 30 C 50 30 50 20 20 20",
            "M 80 50 C 65 50 65 50 50 50",
            "M 80 70 C 50 70 50 80 20 80",
            "M 0 0 C 0 100 100 100 100 0",
        ] {
            let a = lyon.measure_length(d).unwrap();
            let b = sub.measure_length(d).unwrap();
            assert!((a - b).abs() < 0.05, "{}: lyon {} vs subdivision {}", d, a, b);
            // Well inside the 0.5% needed to avoid visible dash jumps
            assert!((a - b).abs() / a < 0.005);
        }
    }

    #[test]
    fn test_quarter_circle_approximation() {
        // Cubic approximation of a quarter circle with radius 50
        let k = 0.5522847498 * 50.0;
        let d = format!("M 50 0 C {} 0 100 {} 100 50", 50.0 + k, 50.0 - k);
        let len = LyonMeasure::default().measure_length(&d).unwrap();
        let expected = std::f64::consts::PI * 50.0 / 2.0;
        assert!((len - expected).abs() < 0.05, "got {} expected {}", len, expected);
    }
}
