//! hne-viewer: build the grossing guide viewer from its source document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use hne_viewer::{config, logging, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "hne-viewer")]
#[command(about = "Build the HTML section viewer from a heading-structured DOCX", long_about = None)]
struct Args {
    /// Settings file (defaults to hne-viewer.toml if present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Source document to read
    #[arg(long, value_name = "DOCX")]
    input: Option<String>,

    /// JSON file to write
    #[arg(long, value_name = "PATH")]
    json: Option<String>,

    /// Existing viewer page to update
    #[arg(long, value_name = "PATH")]
    html: Option<String>,

    /// Title of the root section
    #[arg(long)]
    title: Option<String>,
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    // Override config with command line args
    if let Some(input) = args.input {
        cfg.input_path = input;
    }
    if let Some(json) = args.json {
        cfg.json_path = json;
    }
    if let Some(html) = args.html {
        cfg.html_path = html;
    }
    if let Some(title) = args.title {
        cfg.root_title = title;
    }

    match pipeline::run(&cfg) {
        Ok(summary) => {
            println!(
                "Wrote {} and updated {}",
                summary.json_path.display(),
                summary.html_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
