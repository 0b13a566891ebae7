//! Preset front end: built-in practice sheet templates.
//!
//! Each preset builds a `Layout` for the requested page dimensions and
//! feeds it through the same generator as the config-file front end; the
//! two commands are thin shells over one core.

use std::process;
use std::time::Instant;

use guidesheet::{generate_sheet, GuideGroup, Layout, LineSpec, Margins, Page};

use super::common::{emit, flag_value, OutputFormat};

const DEFAULT_WIDTH: f64 = 1600.0;
const DEFAULT_HEIGHT: f64 = 1200.0;
const DEFAULT_MARGIN: f64 = 60.0;

// Shared palette.
const INK: &str = "#2a4d9b";
const LIGHT: &str = "#9bb7e0";
const FAINT: &str = "#c9d4ea";
const SEYES_MAJOR: &str = "#8f7bbf";
const SEYES_MINOR: &str = "#c5b9e0";

/// Available sheet templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Ruled,
    Grid,
    Italic,
    Copperplate,
    Seyes,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Ruled,
            Preset::Grid,
            Preset::Italic,
            Preset::Copperplate,
            Preset::Seyes,
        ]
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        match name.to_lowercase().as_str() {
            "ruled" => Some(Preset::Ruled),
            "grid" => Some(Preset::Grid),
            "italic" => Some(Preset::Italic),
            "copperplate" => Some(Preset::Copperplate),
            "seyes" => Some(Preset::Seyes),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Ruled => "ruled",
            Preset::Grid => "grid",
            Preset::Italic => "italic",
            Preset::Copperplate => "copperplate",
            Preset::Seyes => "seyes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Ruled => "plain horizontal ruling",
            Preset::Grid => "square grid",
            Preset::Italic => "italic bands with 85-degree slant guides",
            Preset::Copperplate => "copperplate bands with 55-degree slant guides",
            Preset::Seyes => "French ruling: major lines with three interlines",
        }
    }

    /// Build the preset's layout for the given page geometry.
    pub fn layout(&self, width: f64, height: f64, margin: f64) -> Layout {
        let mut page = Page::new(width, height);
        page.margins = Margins::uniform(margin);
        let groups = match self {
            Preset::Ruled => vec![GuideGroup {
                angle: 0.0,
                spacing: 60.0,
                lines: vec![stroke(INK, 2.0)],
            }],
            Preset::Grid => vec![
                GuideGroup {
                    angle: 0.0,
                    spacing: 50.0,
                    lines: vec![stroke(LIGHT, 1.0)],
                },
                GuideGroup {
                    angle: 90.0,
                    spacing: 50.0,
                    lines: vec![stroke(LIGHT, 1.0)],
                },
            ],
            Preset::Italic => vec![
                // Ascender, waist, baseline, descender; the nib-height gaps
                // between them repeat down the page.
                GuideGroup {
                    angle: 0.0,
                    spacing: 50.0,
                    lines: vec![
                        stroke(FAINT, 1.0),
                        gap(40.0),
                        stroke(INK, 2.0),
                        gap(40.0),
                        stroke(INK, 3.0),
                        gap(40.0),
                        stroke(FAINT, 1.0),
                    ],
                },
                GuideGroup {
                    angle: 85.0,
                    spacing: 120.0,
                    lines: vec![stroke(FAINT, 1.0)],
                },
            ],
            Preset::Copperplate => vec![
                // 3:2:3 ascender/x-height/descender proportions.
                GuideGroup {
                    angle: 0.0,
                    spacing: 60.0,
                    lines: vec![
                        stroke(FAINT, 1.0),
                        gap(75.0),
                        stroke(INK, 1.5),
                        gap(50.0),
                        stroke(INK, 2.5),
                        gap(75.0),
                        stroke(FAINT, 1.0),
                    ],
                },
                GuideGroup {
                    angle: 55.0,
                    spacing: 100.0,
                    lines: vec![stroke(FAINT, 1.0)],
                },
            ],
            Preset::Seyes => vec![
                // One heavy line then three interlines on a continuous 8:2
                // rhythm (spacing 0 keeps the cadence unbroken).
                GuideGroup {
                    angle: 0.0,
                    spacing: 0.0,
                    lines: vec![
                        stroke(SEYES_MAJOR, 1.5),
                        gap(20.0),
                        stroke(SEYES_MINOR, 0.75),
                        gap(20.0),
                        stroke(SEYES_MINOR, 0.75),
                        gap(20.0),
                        stroke(SEYES_MINOR, 0.75),
                        gap(20.0),
                    ],
                },
                GuideGroup {
                    angle: 90.0,
                    spacing: 80.0,
                    lines: vec![stroke(SEYES_MAJOR, 1.0)],
                },
            ],
        };
        Layout { page, groups }
    }
}

fn stroke(color: &str, width: f64) -> LineSpec {
    LineSpec::Stroke { color: color.to_string(), width }
}

fn gap(gap: f64) -> LineSpec {
    LineSpec::Gap { gap }
}

pub fn cmd_presets() {
    println!("Available presets:");
    for preset in Preset::all() {
        println!("  {:12}  {}", preset.name(), preset.description());
    }
}

pub fn cmd_preset(args: &[String]) {
    let mut name: Option<&str> = None;
    let mut output = "sheet.png";
    let mut format: Option<OutputFormat> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut margin = DEFAULT_MARGIN;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => output = flag_value(args, &mut i, "-o"),
            "-f" | "--format" => {
                let value = flag_value(args, &mut i, "-f");
                format = Some(OutputFormat::from_name(value).unwrap_or_else(|| {
                    eprintln!("Unknown format: {}. Use png, jpg, svg or json.", value);
                    process::exit(1);
                }));
            }
            "-w" | "--width" => width = parse_dimension(flag_value(args, &mut i, "-w"), "width"),
            "-H" | "--height" => height = parse_dimension(flag_value(args, &mut i, "-H"), "height"),
            "-m" | "--margin" => margin = parse_dimension(flag_value(args, &mut i, "-m"), "margin"),
            arg => {
                if name.is_none() {
                    name = Some(arg);
                }
            }
        }
        i += 1;
    }

    let name = name.unwrap_or_else(|| {
        eprintln!("Error: preset name required (use 'presets' to list them)");
        process::exit(1);
    });

    let preset = Preset::from_name(name).unwrap_or_else(|| {
        eprintln!("Unknown preset: {}. Use 'presets' to list available presets.", name);
        process::exit(1);
    });

    let layout = preset.layout(width, height, margin);

    let start = Instant::now();
    let segments = generate_sheet(&layout);
    eprintln!(
        "Preset '{}': generated {} segments in {:?}",
        preset.name(),
        segments.len(),
        start.elapsed()
    );

    emit(&layout.page, &segments, output, format);
}

fn parse_dimension(arg: &str, what: &str) -> f64 {
    match arg.parse::<f64>() {
        Ok(v) if v >= 0.0 => v,
        _ => {
            eprintln!("Invalid {}: {}", what, arg);
            process::exit(1);
        }
    }
}
