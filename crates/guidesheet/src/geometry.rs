//! Core geometry for guide-line layout.
//!
//! Everything here is pure arithmetic over explicit inputs: point rotation
//! about a center, perpendicular spans between parallel lines, and
//! general-form line equations intersected with Cramer's rule. No shared
//! state, so each routine can be tested in isolation.

use std::f64::consts::FRAC_PI_2;

/// Rotated coordinates are rounded to 3 decimal places so that downstream
/// degeneracy checks (shared x-coordinates, zero determinants) stay stable.
const PRECISION: f64 = 1000.0;

/// Round to 3 decimal places.
#[inline]
pub fn round3(v: f64) -> f64 {
    (v * PRECISION).round() / PRECISION
}

/// A 2D point in page coordinates.
///
/// Coordinates stay real-valued through layout and clipping; nothing is
/// pixel-snapped until the final draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A line in general form `a·x + b·y = c`.
///
/// General form can represent the vertical margin boundaries (`x = k`),
/// which slope-intercept cannot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEq {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEq {
    /// The vertical line `x = x0`.
    #[inline]
    pub fn vertical(x0: f64) -> Self {
        Self { a: 1.0, b: 0.0, c: x0 }
    }

    /// The horizontal line `y = y0`.
    #[inline]
    pub fn horizontal(y0: f64) -> Self {
        Self { a: 0.0, b: 1.0, c: y0 }
    }

    /// The line through two points.
    ///
    /// When the points share an x-coordinate the slope falls back to 0,
    /// producing a horizontal equation rather than a true vertical line.
    /// Segment endpoints only coincide in x for 90°-family guide angles,
    /// and the margin clipper's y-clamp fallback keeps those contained;
    /// see `clip::clip_segment`.
    pub fn through(pa: Point, pb: Point) -> Self {
        let dx = pb.x - pa.x;
        let m = if dx == 0.0 { 0.0 } else { (pb.y - pa.y) / dx };
        Self {
            a: -m,
            b: 1.0,
            c: pa.y - m * pa.x,
        }
    }

    /// Intersection of two lines via Cramer's rule.
    ///
    /// Returns `None` when the determinant is exactly zero (parallel or
    /// coincident lines); callers fall back to clamping instead.
    pub fn intersect(&self, other: &LineEq) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }
        let x = (self.c * other.b - other.c * self.b) / det;
        let y = (self.a * other.c - other.a * self.c) / det;
        Some(Point::new(x, y))
    }
}

/// Rotate `p` about `center` by `-angle` radians.
///
/// The sign convention is clockwise-positive: guide angle 0 keeps
/// horizontal lines horizontal, and increasing angle tilts them
/// counter-clockwise on screen (y grows downward in image space).
/// The result is rounded to 3 decimal places.
pub fn rotate_about(angle: f64, center: Point, p: Point) -> Point {
    let a = -angle;
    let (sin, cos) = a.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point::new(
        round3(dx * cos - dy * sin + center.x),
        round3(dx * sin + dy * cos + center.y),
    )
}

/// Distance between the two parallel lines of slope `tan(-angle)` passing
/// through `p1` and `p2`.
///
/// This measures how far apart the points sit along the direction
/// perpendicular to `angle`; the span calculator uses it against page
/// corners to size the rotated footprint. At odd multiples of 90° the
/// reference lines are vertical and the span is simply `|x1 - x2|`,
/// avoiding the tangent discontinuity.
pub fn perpendicular_span(angle: f64, p1: Point, p2: Point) -> f64 {
    if is_odd_quarter_turn(angle) {
        return round3((p1.x - p2.x).abs());
    }
    let m = (-angle).tan();
    let c1 = -m * p1.x + p1.y;
    let c2 = -m * p2.x + p2.y;
    round3((c1 - c2).abs() / (1.0 + m * m).sqrt())
}

/// True when `angle` is an odd multiple of 90° (within float tolerance).
fn is_odd_quarter_turn(angle: f64) -> bool {
    let quarters = angle / FRAC_PI_2;
    let nearest = quarters.round();
    (quarters - nearest).abs() < 1e-9 && (nearest as i64).rem_euclid(2) == 1
}
