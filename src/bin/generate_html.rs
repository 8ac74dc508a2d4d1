//! Entry point producing the HTML rendition of the CV

use std::path::Path;
use std::process::ExitCode;

use clap::Command;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use vitae::loading;
use vitae::rendering::{Generator, HtmlGenerator};

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Command::new("generate-html")
        .version(VERSION)
        .about("Generate the CV as a standalone HTML page.")
        .get_matches();

    let record = match loading::load(Path::new(loading::DATA_PATH)) {
        Ok(record) => record,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut generator = HtmlGenerator::new(record, false);
    match generator.generate() {
        Ok(path) => {
            println!("HTML file generated successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            ExitCode::FAILURE
        }
    }
}
