//! Entry point producing the typeset PDF rendition of the CV

use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use vitae::loading;
use vitae::output::OutputError;
use vitae::rendering::{Generator, LatexGenerator};

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = Command::new("generate-pdf")
        .version(VERSION)
        .about("Generate the CV as a PDF, typeset via LaTeX.")
        .arg(
            Arg::new("anon")
                .long("anon")
                .action(ArgAction::SetTrue)
                .help("Omit the name and contact details for a blind application."),
        )
        .get_matches();

    let anonymous = matches.get_flag("anon");

    let record = match loading::load(Path::new(loading::DATA_PATH)) {
        Ok(record) => record,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return ExitCode::FAILURE;
        }
    };

    let mut generator = LatexGenerator::new(record, anonymous);
    match generator.generate() {
        Ok(path) => {
            println!("PDF generated successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

/// Print the failure, with installation guidance when the toolchain is
/// missing and the compiler's own streams when a run went wrong.
fn report(error: &OutputError) {
    match error {
        OutputError::CompilerNotInstalled => {
            eprintln!("{}: {}", "error".bright_red(), error);
            eprintln!();
            eprintln!("Make sure you have pdflatex installed:");
            eprintln!("  Windows: Install MiKTeX (https://miktex.org/)");
            eprintln!("  macOS: Install MacTeX (https://www.tug.org/mactex/)");
            eprintln!("  Linux: sudo apt-get install texlive-latex-base texlive-fonts-recommended");
        }
        OutputError::CompilationFailed { stdout, stderr } => {
            eprintln!("{}: {}:", "error".bright_red(), error);
            eprintln!("{}", stdout);
            eprintln!("{}", stderr);
        }
        _ => {
            eprintln!("{}: {}", "error".bright_red(), error);
        }
    }
}
