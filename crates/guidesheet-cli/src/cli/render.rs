//! Config-file front end: render a TOML layout.

use std::process;
use std::time::Instant;

use guidesheet::{generate_sheet, Layout};

use super::common::{emit, flag_value, OutputFormat};

pub fn cmd_render(args: &[String]) {
    let mut config_path: Option<&str> = None;
    let mut output = "sheet.png";
    let mut format: Option<OutputFormat> = None;

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
            path => {
                if config_path.is_none() {
                    config_path = Some(path);
                }
            }
        }
        i += 1;
    }

    let config_path = config_path.unwrap_or_else(|| {
        eprintln!("Error: layout file required");
        eprintln!("Usage: guidesheet render <config.toml> [-o out.png] [-f fmt]");
        process::exit(1);
    });

    let layout = Layout::from_path(config_path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    eprintln!(
        "Loaded {}: {}x{} page, {} guide groups",
        config_path,
        layout.page.width,
        layout.page.height,
        layout.groups.len()
    );

    let start = Instant::now();
    let segments = generate_sheet(&layout);
    eprintln!("Generated {} segments in {:?}", segments.len(), start.elapsed());

    emit(&layout.page, &segments, output, format);
}
