use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::error;

use decl_scanner::DeclScanner;
use decl_scanner::report;

/// Extract importable top-level declarations from Python modules
#[derive(Debug, Parser)]
#[command(name = "decl_scanner")]
struct Cli {
    /// Python module file, or directory to scan recursively
    path: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut scanner = DeclScanner::new(&cli.path);
    if cli.path.is_dir() {
        // A walk failure aborts the directory scan but not the process;
        // the report is printed either way
        if let Err(e) = scanner.scan_all() {
            error!("Directory scan failed: {:#}", e);
        }
    } else {
        scanner.scan_file(&cli.path);
    }

    if let Err(e) = report::print_report(scanner.results()) {
        error!("Failed to write report: {:#}", e);
    }
}
