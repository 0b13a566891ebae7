//! Common output plumbing shared by the render and preset front ends.
//!
//! Segments become an SVG document; raster formats go through resvg and
//! tiny-skia, then out via the image crate. The draw capability consumed
//! by the core is exactly "a line between two points with a color and a
//! stroke width", which maps one-to-one onto `<line>` elements.

use std::fs;
use std::process;

use guidesheet::{Page, Segment};
use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::usvg;
use serde::Serialize;
use tiny_skia::Pixmap;

/// Strokes declared with width 0 still render as a visible hairline.
const HAIRLINE_WIDTH: f64 = 0.25;

/// Output format for rendered sheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Svg,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "svg" => Some(OutputFormat::Svg),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Infer the format from an output path's extension.
    pub fn from_path(path: &str) -> Option<OutputFormat> {
        let ext = path.rsplit('.').next()?;
        OutputFormat::from_name(ext)
    }
}

/// A segment in JSON output.
#[derive(Serialize)]
struct JsonSegment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: String,
    width: f64,
}

/// JSON output: page dimensions plus every segment in render order.
#[derive(Serialize)]
struct JsonSheet {
    width: f64,
    height: f64,
    segments: Vec<JsonSegment>,
}

/// Convert segments to a standalone SVG document.
pub fn segments_to_svg(page: &Page, segments: &[Segment]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="{bg}"/>
"#,
        w = page.width,
        h = page.height,
        bg = page.background
    ));

    for seg in segments {
        let width = if seg.width <= 0.0 { HAIRLINE_WIDTH } else { seg.width };
        svg.push_str(&format!(
            "  <line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            seg.a.x, seg.a.y, seg.b.x, seg.b.y, seg.color, width
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Convert segments to a JSON document.
pub fn segments_to_json(page: &Page, segments: &[Segment]) -> String {
    let sheet = JsonSheet {
        width: page.width,
        height: page.height,
        segments: segments
            .iter()
            .map(|s| JsonSegment {
                x1: s.a.x,
                y1: s.a.y,
                x2: s.b.x,
                y2: s.b.y,
                color: s.color.clone(),
                width: s.width,
            })
            .collect(),
    };
    serde_json::to_string(&sheet).expect("segment JSON serialization cannot fail")
}

/// Rasterize segments to an RGBA image via resvg.
pub fn render_to_image(page: &Page, segments: &[Segment]) -> Result<DynamicImage, String> {
    let width = page.width.round() as u32;
    let height = page.height.round() as u32;
    if width == 0 || height == 0 {
        return Err(format!("page too small to rasterize: {}x{}", page.width, page.height));
    }

    let svg = segments_to_svg(page, segments);

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &options)
        .map_err(|e| format!("failed to parse generated SVG: {}", e))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("failed to create {}x{} pixmap", width, height))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| "failed to convert pixmap to image".to_string())?;

    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Write a rendered sheet to `output` in the requested (or inferred) format.
///
/// Exits the process on failure; this is the CLI's terminal step.
pub fn emit(page: &Page, segments: &[Segment], output: &str, format: Option<OutputFormat>) {
    let format = format
        .or_else(|| OutputFormat::from_path(output))
        .unwrap_or(if output == "-" { OutputFormat::Svg } else { OutputFormat::Png });

    match format {
        OutputFormat::Svg => write_text(output, &segments_to_svg(page, segments)),
        OutputFormat::Json => write_text(output, &segments_to_json(page, segments)),
        OutputFormat::Png | OutputFormat::Jpeg => {
            if output == "-" {
                eprintln!("Error: raster output cannot go to stdout; pass -o <file>");
                process::exit(1);
            }
            let img = render_to_image(page, segments).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                process::exit(1);
            });
            // JPEG has no alpha channel.
            let result = match format {
                OutputFormat::Jpeg => img.to_rgb8().save_with_format(output, ImageFormat::Jpeg),
                _ => img.save_with_format(output, ImageFormat::Png),
            };
            if let Err(e) = result {
                eprintln!("Error: failed to write {}: {}", output, e);
                process::exit(1);
            }
            eprintln!("Wrote: {}", output);
        }
    }
}

/// Advance past a flag and return its value, or exit if none follows.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn write_text(output: &str, text: &str) {
    match output {
        "-" => println!("{}", text),
        path => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error: failed to write {}: {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote: {}", path);
        }
    }
}
