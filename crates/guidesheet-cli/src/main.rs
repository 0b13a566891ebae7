//! guidesheet - ruled practice sheet rendering
//!
//! Usage:
//!   guidesheet render <config.toml> [options]   Render a layout file
//!   guidesheet preset <name> [options]          Render a built-in template
//!   guidesheet presets                          List built-in templates

use std::env;
use std::process;

mod cli;

use cli::{preset, render};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    match args[1].as_str() {
        "render" => render::cmd_render(&args[2..]),
        "preset" => preset::cmd_preset(&args[2..]),
        "presets" => preset::cmd_presets(),
        "help" | "--help" | "-h" => print_usage(&args[0]),
        path if path.ends_with(".toml") => {
            // Bare layout path is shorthand for `render`.
            render::cmd_render(&args[1..]);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("guidesheet - calligraphy practice sheet rendering");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} render <config.toml> [options]", prog);
    eprintln!("  {} preset <name> [options]", prog);
    eprintln!("  {} presets", prog);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>    Output file (- for stdout, default: sheet.png)");
    eprintln!("  -f, --format <fmt>     Output format: png, jpg, svg, json");
    eprintln!("                         (default: inferred from the output extension)");
    eprintln!();
    eprintln!("Preset options:");
    eprintln!("  -w, --width <px>       Page width (default: 1600)");
    eprintln!("  -H, --height <px>      Page height (default: 1200)");
    eprintln!("  -m, --margin <px>      Uniform page margin (default: 60)");
    eprintln!();
    eprintln!("Stdout support:");
    eprintln!("  Use '-o -' with svg or json format to write to stdout:");
    eprintln!("  {} preset ruled -o - -f json", prog);
}
