mod csv_report;
mod scanner;
mod sizer;
mod summary;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use types::RunConfig;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory whose immediate subdirectories are reported
    #[arg(default_value = ".")]
    directory: String,

    /// Output CSV file (defaults to folders_<DD-MM-YYYY>.csv)
    output: Option<String>,

    /// Suppress progress and summary output
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = resolve_config(&args);

    if !config.root.exists() {
        eprintln!("Error: Directory '{}' not found.", config.root.display());
        std::process::exit(1);
    }
    if !config.root.is_dir() {
        eprintln!("Error: '{}' is not a directory.", config.root.display());
        std::process::exit(1);
    }

    let subdirs = match scanner::immediate_subdirs(&config.root) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {e}", config.root.display());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        println!(
            "{}",
            format!(
                "=== Folder Size Report: {} ===",
                Local::now().format("%Y-%m-%d %H:%M")
            )
            .cyan()
        );
        println!(
            "Scanning {} ({} subdirectories)...",
            config.root.display(),
            subdirs.len()
        );
    }

    let records = scanner::collect_records(&subdirs, &config.captured_date, args.quiet);

    if let Err(e) = csv_report::write_report(&config.output_path, &records) {
        eprintln!(
            "Error: Cannot write report to {}: {e}",
            config.output_path.display()
        );
        std::process::exit(1);
    }

    if !args.quiet {
        summary::print_summary(&records);
    }
    println!("Report written to: {}", config.output_path.display());
}

fn resolve_config(args: &Args) -> RunConfig {
    let captured_date = Local::now().format("%d-%m-%Y").to_string();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| format!("folders_{captured_date}.csv"));

    RunConfig {
        root: PathBuf::from(&args.directory),
        output_path: PathBuf::from(output_path),
        captured_date,
    }
}
