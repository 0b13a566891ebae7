//! Segment generation.
//!
//! Walks each guide group's scan cursor through its scan rectangle and
//! emits margin-clipped segments in render order: group order, then scan
//! order, then line order within a repetition. Later segments draw over
//! earlier ones, so emission order is the stacking order.

use crate::clip::{clip_segment, MarginBox};
use crate::geometry::{rotate_about, Point};
use crate::layout::{GuideGroup, Layout, LineSpec, Page};
use crate::span::scan_bounds;

/// One drawable line: clipped endpoints plus stroke styling.
///
/// Segments carry no identity beyond their values; they are produced,
/// drawn, and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
    pub color: String,
    pub width: f64,
}

/// Generate every segment for a layout, in render order.
pub fn generate_sheet(layout: &Layout) -> Vec<Segment> {
    let mut segments = Vec::new();
    for group in &layout.groups {
        generate_group_into(&layout.page, group, &mut segments);
    }
    segments
}

/// Generate the segments for a single guide group.
pub fn generate_group(page: &Page, group: &GuideGroup) -> Vec<Segment> {
    let mut segments = Vec::new();
    generate_group_into(page, group, &mut segments);
    segments
}

fn generate_group_into(page: &Page, group: &GuideGroup, out: &mut Vec<Segment>) {
    let bounds = scan_bounds(page, group);

    // A repetition that consumes no scan distance would never terminate;
    // render nothing for such a group.
    if bounds.guide_span + group.spacing <= 0.0 {
        return;
    }

    let angle = group.angle_radians();
    let center = page.center();
    let margins = MarginBox::of(page);

    let mut y = bounds.y_start;
    // An entire repetition must fit; partial trailing repetitions are
    // dropped rather than truncated.
    while y + bounds.guide_span <= bounds.y_end {
        for line in &group.lines {
            match line {
                LineSpec::Gap { gap } => y += gap,
                LineSpec::Stroke { color, width } => {
                    let a = rotate_about(angle, center, Point::new(bounds.x_start, y));
                    let b = rotate_about(angle, center, Point::new(bounds.x_end, y));
                    let (a, b) = clip_segment(a, b, &margins);
                    out.push(Segment {
                        a,
                        b,
                        color: color.clone(),
                        width: *width,
                    });
                }
            }
        }
        y += group.spacing;
    }
}
