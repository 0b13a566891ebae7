//! # guidesheet
//!
//! Guide-line layout for calligraphy practice sheets.
//!
//! A sheet is a page of rotated, repeating guide-line groups: families of
//! parallel strokes separated by declared gaps, centered within the page's
//! drawable band and clipped to its margins. The pipeline per group:
//!
//! 1. [`span::scan_bounds`] sizes the pre-rotation scan rectangle so
//!    rotated lines still cover the page, and centers the repetitions.
//! 2. [`sheet::generate_group`] walks the scan cursor, rotating each
//!    stroke's endpoints about the page center.
//! 3. [`clip::clip_segment`] pins endpoints to the margin box with general
//!    line intersection.
//!
//! The output is a flat list of [`Segment`]s in render order; rasterizing
//! them is the caller's concern.

pub mod clip;
pub mod geometry;
pub mod layout;
pub mod sheet;
pub mod span;

// Re-export common types at crate root for convenience.
pub use clip::{clip_segment, MarginBox};
pub use geometry::{perpendicular_span, rotate_about, LineEq, Point};
pub use layout::{GuideGroup, Layout, LayoutError, LineSpec, Margins, Page};
pub use sheet::{generate_group, generate_sheet, Segment};
pub use span::{scan_bounds, ScanBounds};
