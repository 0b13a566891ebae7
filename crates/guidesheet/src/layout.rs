//! Layout configuration: the page, its guide groups, and their line specs.
//!
//! A `Layout` is parsed once from TOML, validated, and then consumed
//! read-only by the generator. The core performs no defensive
//! re-validation past this point; numerically inconsistent values (say, a
//! negative gap) degrade to an empty or odd-looking render rather than an
//! error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::geometry::Point;

/// Page margins in pixels. All four default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    pub fn uniform(m: f64) -> Self {
        Self { top: m, bottom: m, left: m, right: m }
    }
}

/// Page dimensions, margins and background, all lengths in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margins: Margins,
    /// Canvas background as a CSS color string.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_background() -> String {
    "#ffffff".to_string()
}

impl Page {
    /// A page with no margins and a white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            background: default_background(),
        }
    }

    /// The rotation center for guide angles.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// One entry in a guide group's repeating pattern.
///
/// A `Stroke` draws a line and consumes no scan distance; a `Gap` only
/// advances the scan cursor. Order matters: the sequence defines the
/// repeating pattern along the scan axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LineSpec {
    Gap {
        gap: f64,
    },
    Stroke {
        /// CSS color string, e.g. `"#2a4d9b"`.
        color: String,
        /// Stroke width in pixels; 0 means hairline.
        width: f64,
    },
}

/// A family of parallel guide lines at a fixed angle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuideGroup {
    /// Angle in degrees; normalized modulo 360 before use.
    pub angle: f64,
    /// Extra scan distance between repetitions of `lines`.
    #[serde(default)]
    pub spacing: f64,
    pub lines: Vec<LineSpec>,
}

impl GuideGroup {
    /// The group angle normalized to `[0, 2π)`, in radians.
    pub fn angle_radians(&self) -> f64 {
        self.angle.rem_euclid(360.0).to_radians()
    }

    /// Scan distance consumed by one repetition: the sum of gap entries.
    /// Strokes contribute nothing to spacing.
    pub fn guide_span(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| match l {
                LineSpec::Gap { gap } => *gap,
                LineSpec::Stroke { .. } => 0.0,
            })
            .sum()
    }

    /// Number of stroke entries in one repetition.
    pub fn stroke_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, LineSpec::Stroke { .. }))
            .count()
    }
}

/// The full sheet configuration: one page plus an ordered list of guide
/// groups. Group order is render order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layout {
    pub page: Page,
    #[serde(default, rename = "group")]
    pub groups: Vec<GuideGroup>,
}

impl Layout {
    /// Parse a layout from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Layout, LayoutError> {
        let layout: Layout =
            toml::from_str(text).map_err(|e| LayoutError::Parse(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read and parse a layout from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Layout, LayoutError> {
        let text = fs::read_to_string(path).map_err(LayoutError::Io)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.page.width <= 0.0 || self.page.height <= 0.0 {
            return Err(LayoutError::Invalid(format!(
                "page dimensions must be positive, got {}x{}",
                self.page.width, self.page.height
            )));
        }
        Ok(())
    }
}

/// Error type for layout loading.
#[derive(Debug)]
pub enum LayoutError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "failed to read layout file: {}", e),
            LayoutError::Parse(msg) => write!(f, "layout parse error: {}", msg),
            LayoutError::Invalid(msg) => write!(f, "invalid layout: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}
