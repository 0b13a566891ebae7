//! Margin clipping for candidate segments.
//!
//! Guide lines are rotated, so endpoints are clipped against the four
//! margin boundaries with general line intersection rather than
//! axis-aligned arithmetic. Clipping reshapes segments but never drops
//! them; a segment fully outside the box degenerates onto the boundary.

use crate::geometry::{LineEq, Point};
use crate::layout::Page;

/// The drawable rectangle once margins are subtracted from the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBox {
    pub x_lo: f64,
    pub x_hi: f64,
    pub y_lo: f64,
    pub y_hi: f64,
}

impl MarginBox {
    pub fn of(page: &Page) -> Self {
        Self {
            x_lo: page.margins.left,
            x_hi: page.width - page.margins.right,
            y_lo: page.margins.top,
            y_hi: page.height - page.margins.bottom,
        }
    }

    /// Containment check with a small tolerance for rounded coordinates.
    pub fn contains(&self, p: Point) -> bool {
        const TOL: f64 = 1e-6;
        p.x >= self.x_lo - TOL
            && p.x <= self.x_hi + TOL
            && p.y >= self.y_lo - TOL
            && p.y <= self.y_hi + TOL
    }
}

/// Clip both endpoints of a candidate segment to the margin box.
///
/// Boundaries are applied in a fixed order: left, right, then top, bottom,
/// each endpoint tested independently against the segment's infinite line.
/// The order matters: y-clipping sees possibly already-x-clipped
/// coordinates, which is a sequential approximation of a true polygon clip.
///
/// Fallbacks when the segment is parallel to a boundary (no intersection):
/// a vertical boundary leaves the endpoint unmodified, since a line
/// parallel to it can never cross it; a horizontal boundary clamps the
/// endpoint's y directly, so a horizontal stroke cannot escape the top or
/// bottom margin.
pub fn clip_segment(a: Point, b: Point, bounds: &MarginBox) -> (Point, Point) {
    let eq = LineEq::through(a, b);
    let (mut a, mut b) = (a, b);

    let left = LineEq::vertical(bounds.x_lo);
    if a.x < bounds.x_lo {
        if let Some(p) = eq.intersect(&left) {
            a = p;
        }
    }
    if b.x < bounds.x_lo {
        if let Some(p) = eq.intersect(&left) {
            b = p;
        }
    }

    let right = LineEq::vertical(bounds.x_hi);
    if a.x > bounds.x_hi {
        if let Some(p) = eq.intersect(&right) {
            a = p;
        }
    }
    if b.x > bounds.x_hi {
        if let Some(p) = eq.intersect(&right) {
            b = p;
        }
    }

    let top = LineEq::horizontal(bounds.y_lo);
    if a.y < bounds.y_lo {
        match eq.intersect(&top) {
            Some(p) => a = p,
            None => a.y = bounds.y_lo,
        }
    }
    if b.y < bounds.y_lo {
        match eq.intersect(&top) {
            Some(p) => b = p,
            None => b.y = bounds.y_lo,
        }
    }

    let bottom = LineEq::horizontal(bounds.y_hi);
    if a.y > bounds.y_hi {
        match eq.intersect(&bottom) {
            Some(p) => a = p,
            None => a.y = bounds.y_hi,
        }
    }
    if b.y > bounds.y_hi {
        match eq.intersect(&bottom) {
            Some(p) => b = p,
            None => b.y = bounds.y_hi,
        }
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;

    const EPS: f64 = 1e-9;

    fn box_40() -> MarginBox {
        let mut page = Page::new(800.0, 600.0);
        page.margins = Margins::uniform(40.0);
        MarginBox::of(&page)
    }

    #[test]
    fn margin_box_from_page() {
        let b = box_40();
        assert_eq!(b, MarginBox { x_lo: 40.0, x_hi: 760.0, y_lo: 40.0, y_hi: 560.0 });
    }

    #[test]
    fn inside_segment_untouched() {
        let b = box_40();
        let a = Point::new(100.0, 100.0);
        let z = Point::new(700.0, 500.0);
        assert_eq!(clip_segment(a, z, &b), (a, z));
    }

    #[test]
    fn diagonal_clipped_to_vertical_boundaries() {
        let b = box_40();
        // Line y = 0.5x + 100 overshooting both sides.
        let (a, z) = clip_segment(Point::new(-60.0, 70.0), Point::new(900.0, 550.0), &b);
        assert!((a.x - 40.0).abs() < EPS && (a.y - 120.0).abs() < EPS, "got {:?}", a);
        assert!((z.x - 760.0).abs() < EPS && (z.y - 480.0).abs() < EPS, "got {:?}", z);
    }

    #[test]
    fn horizontal_segment_clamped_not_dropped() {
        // Parallel to the top boundary and entirely above it: the y-clamp
        // fallback pulls it onto the boundary rather than losing it.
        let b = box_40();
        let (a, z) = clip_segment(Point::new(100.0, 10.0), Point::new(700.0, 10.0), &b);
        assert_eq!(a, Point::new(100.0, 40.0));
        assert_eq!(z, Point::new(700.0, 40.0));
    }

    #[test]
    fn horizontal_segment_clamped_to_bottom() {
        let b = box_40();
        let (a, z) = clip_segment(Point::new(100.0, 590.0), Point::new(700.0, 590.0), &b);
        assert_eq!(a, Point::new(100.0, 560.0));
        assert_eq!(z, Point::new(700.0, 560.0));
    }

    #[test]
    fn steep_segment_crossing_top() {
        let b = box_40();
        // Line y = 2x - 100: crosses y = 40 at x = 70.
        let (a, z) = clip_segment(Point::new(10.0, -80.0), Point::new(300.0, 500.0), &b);
        assert!((a.x - 70.0).abs() < EPS && (a.y - 40.0).abs() < EPS, "got {:?}", a);
        assert_eq!(z, Point::new(300.0, 500.0));
    }

    #[test]
    fn fully_outside_segment_degenerates_onto_boundary() {
        // Both endpoints above the box: each gets clamped; the segment
        // survives as a (possibly odd-looking) boundary segment.
        let b = box_40();
        let (a, z) = clip_segment(Point::new(200.0, -50.0), Point::new(600.0, -50.0), &b);
        assert_eq!(a, Point::new(200.0, 40.0));
        assert_eq!(z, Point::new(600.0, 40.0));
    }

    #[test]
    fn x_clip_applied_before_y_clip() {
        let b = box_40();
        // Line y = x: left clip moves a to (40, 40), already on the top
        // boundary, so the later y pass leaves it alone.
        let (a, z) = clip_segment(Point::new(0.0, 0.0), Point::new(500.0, 500.0), &b);
        assert!((a.x - 40.0).abs() < EPS && (a.y - 40.0).abs() < EPS, "got {:?}", a);
        assert_eq!(z, Point::new(500.0, 500.0));
    }

    #[test]
    fn contains_tolerates_rounding() {
        let b = box_40();
        assert!(b.contains(Point::new(40.0 - 1e-9, 100.0)));
        assert!(!b.contains(Point::new(39.0, 100.0)));
    }
}
