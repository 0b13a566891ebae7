//! Guide span calculation.
//!
//! For each guide group this works out how far the pre-rotation scan
//! rectangle must extend beyond the page so rotated lines still cover it,
//! and where repetitions start so the pattern sits centered in the
//! margin-respecting drawable band instead of flush against one edge.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{perpendicular_span, Point};
use crate::layout::{GuideGroup, Page};

/// The pre-rotation scan rectangle for one guide group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanBounds {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    /// Scan distance consumed by one repetition of the group's lines.
    pub guide_span: f64,
}

/// Compute the scan rectangle for a guide group on a page.
///
/// The extended bounds oversize the page symmetrically so that a line at
/// any scan position still covers the visible page after rotation. The
/// vertical bounds are then shrunk by the centering offset: whole
/// repetitions fill the band exactly and the leftover slack splits evenly
/// above and below.
pub fn scan_bounds(page: &Page, group: &GuideGroup) -> ScanBounds {
    let theta = group.angle_radians();
    let (w, h) = (page.width, page.height);

    // Which page diagonal is "long" at this angle decides the corner pair
    // measured for the rotated footprint.
    let first_half = (0.0..FRAC_PI_2).contains(&theta)
        || (PI..PI + FRAC_PI_2).contains(&theta);
    let (span_x, span_y) = if first_half {
        (
            perpendicular_span(theta + FRAC_PI_2, Point::new(0.0, h), Point::new(w, 0.0)),
            perpendicular_span(theta, Point::new(0.0, 0.0), Point::new(w, h)),
        )
    } else {
        (
            perpendicular_span(theta + FRAC_PI_2, Point::new(0.0, 0.0), Point::new(w, h)),
            perpendicular_span(theta, Point::new(0.0, h), Point::new(w, 0.0)),
        )
    };

    let ext_x = (span_x - w) / 2.0;
    let ext_y = (span_y - h) / 2.0;
    let x_lo = -ext_x;
    let x_hi = w + ext_x;
    let y_lo = -ext_y + page.margins.top;
    let y_hi = h + ext_y - page.margins.bottom;

    let guide_span = group.guide_span();
    let pitch = guide_span + group.spacing;
    let band = y_hi - y_lo;

    // Whole repetitions only; a non-positive pitch can never fill the band,
    // so it gets a count of zero rather than a division blowup.
    let count = if pitch > 0.0 {
        (((band + group.spacing) / pitch).floor()).max(0.0)
    } else {
        0.0
    };
    let field = count * pitch - group.spacing;
    let offset = (band - field) / 2.0;

    ScanBounds {
        x_start: x_lo,
        x_end: x_hi,
        y_start: y_lo + offset,
        y_end: y_hi - offset,
        guide_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LineSpec, Margins};

    const EPS: f64 = 1e-3;

    fn page_800x600() -> Page {
        Page::new(800.0, 600.0)
    }

    fn single_stroke_group(angle: f64, spacing: f64) -> GuideGroup {
        GuideGroup {
            angle,
            spacing,
            lines: vec![LineSpec::Stroke { color: "#000000".into(), width: 1.0 }],
        }
    }

    #[test]
    fn horizontal_group_has_no_extension() {
        // At angle 0 the footprint is the page itself: scan x spans the full
        // width, scan y spans the full height.
        let bounds = scan_bounds(&page_800x600(), &single_stroke_group(0.0, 10.0));
        assert!((bounds.x_start - 0.0).abs() < EPS);
        assert!((bounds.x_end - 800.0).abs() < EPS);
        assert!((bounds.y_start - 0.0).abs() < EPS);
        assert!((bounds.y_end - 600.0).abs() < EPS);
        assert_eq!(bounds.guide_span, 0.0);
    }

    #[test]
    fn quarter_turn_swaps_spans() {
        // At 90° the complementary quadrant branch measures the other
        // diagonal: scan x shrinks to the page height's footprint and scan y
        // widens to the page width's.
        let bounds = scan_bounds(&page_800x600(), &single_stroke_group(90.0, 10.0));
        assert!((bounds.x_start - 100.0).abs() < EPS, "x_start {}", bounds.x_start);
        assert!((bounds.x_end - 700.0).abs() < EPS, "x_end {}", bounds.x_end);
        assert!((bounds.y_start + 100.0).abs() < EPS, "y_start {}", bounds.y_start);
        assert!((bounds.y_end - 700.0).abs() < EPS, "y_end {}", bounds.y_end);
    }

    #[test]
    fn centering_slack_is_symmetric() {
        // band = 600, pitch = 37: 16 repetitions fill 585, slack 15 splits
        // into 7.5 above and 7.5 below.
        let group = GuideGroup {
            angle: 0.0,
            spacing: 7.0,
            lines: vec![
                LineSpec::Stroke { color: "#000000".into(), width: 1.0 },
                LineSpec::Gap { gap: 30.0 },
            ],
        };
        let bounds = scan_bounds(&page_800x600(), &group);
        assert!((bounds.y_start - 7.5).abs() < EPS, "y_start {}", bounds.y_start);
        assert!((bounds.y_end - 592.5).abs() < EPS, "y_end {}", bounds.y_end);

        let slack_above = bounds.y_start - 0.0;
        let slack_below = 600.0 - bounds.y_end;
        assert!((slack_above - slack_below).abs() < EPS);
    }

    #[test]
    fn margins_shrink_vertical_band() {
        let mut page = page_800x600();
        page.margins = Margins { top: 50.0, bottom: 30.0, left: 0.0, right: 0.0 };
        let group = single_stroke_group(0.0, 40.0);
        let bounds = scan_bounds(&page, &group);
        // band = 600 - 50 - 30 = 520; count = floor(560/40) = 14,
        // field = 14*40 - 40 = 520, offset = 0.
        assert!((bounds.y_start - 50.0).abs() < EPS, "y_start {}", bounds.y_start);
        assert!((bounds.y_end - 570.0).abs() < EPS, "y_end {}", bounds.y_end);
    }

    #[test]
    fn oversized_repetition_yields_empty_band() {
        // A repetition taller than the band: count 0, so the scan range
        // collapses and nothing will be emitted.
        let group = GuideGroup {
            angle: 0.0,
            spacing: 0.0,
            lines: vec![
                LineSpec::Stroke { color: "#000000".into(), width: 1.0 },
                LineSpec::Gap { gap: 700.0 },
            ],
        };
        let bounds = scan_bounds(&page_800x600(), &group);
        assert!(bounds.y_start + bounds.guide_span > bounds.y_end);
    }

    #[test]
    fn non_positive_pitch_gets_zero_count() {
        // pitch <= 0 must not produce NaN bounds; the generator skips such
        // groups entirely.
        let group = GuideGroup {
            angle: 0.0,
            spacing: -10.0,
            lines: vec![
                LineSpec::Stroke { color: "#000000".into(), width: 1.0 },
                LineSpec::Gap { gap: 10.0 },
            ],
        };
        let bounds = scan_bounds(&page_800x600(), &group);
        assert!(bounds.y_start.is_finite() && bounds.y_end.is_finite());
    }
}
