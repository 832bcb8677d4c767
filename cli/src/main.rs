use clap::Parser;

use chromascii::{RenderConfig, render_file, save_to_file};

/// Fixed input path, relative to the working directory
const INPUT_PATH: &str = "input.png";
/// Fixed output path, overwritten on every run
const OUTPUT_PATH: &str = "ascii_output.txt";

/// Render input.png as colorized ASCII art
#[derive(Parser)]
#[command(name = "chromascii", version)]
struct Cli {
    /// Output width in characters; anything invalid falls back to 50
    #[arg(allow_hyphen_values = true)]
    width: Option<String>,
}

fn main() {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    let config = RenderConfig::from_width_arg(cli.width.as_deref());
    log::debug!("rendering {INPUT_PATH} at {} columns", config.columns);

    // Read, decode and rasterize; either failure ends the run with a message
    // and no output written
    let art = match render_file(INPUT_PATH, &config) {
        Ok(art) => art,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    // A failed file write still leaves the terminal print below
    if let Err(err) = save_to_file(OUTPUT_PATH, &art) {
        println!("{err}");
    }

    println!("{art}");
}
