mod classifier;
mod file_collector;

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::decl::types::{ScanResult, ScanStats};

// Re-export from submodules
pub use classifier::{LineKind, classify, is_module_file};
pub use file_collector::FileCollector;

/// Declaration scanner responsible for finding importable symbols in
/// Python module files
#[derive(Debug)]
pub struct DeclScanner {
    /// File or directory the scanner was constructed over
    source: PathBuf,

    /// File collector for finding candidate files
    file_collector: FileCollector,

    /// Declarations accumulated across every scanned file
    results: ScanResult,

    /// Statistics about the scanning process
    stats: ScanStats,
}

impl DeclScanner {
    /// Create a new declaration scanner over a file or directory
    pub fn new(source: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            file_collector: FileCollector::new(),
            results: ScanResult::default(),
            stats: ScanStats::default(),
        }
    }

    /// Scan every regular file under the source directory, accumulating
    /// declarations in traversal order. A walk-level failure aborts the
    /// whole directory scan and is returned to the caller; per-file
    /// failures are logged and do not stop the walk.
    pub fn scan_all(&mut self) -> Result<()> {
        let files = self.file_collector.collect_files(&self.source)?;
        info!("Scanning {} files under {}", files.len(), self.source.display());

        for file in &files {
            self.scan_file(file);
        }

        info!(
            "Scanned {} files ({} skipped, {} errors), found {} declarations",
            self.stats.scanned_files,
            self.stats.skipped_files,
            self.stats.error_files,
            self.results.len()
        );
        Ok(())
    }

    /// Scan a single file, appending every declaration found to the
    /// accumulated results. Open and read failures are logged and end the
    /// scan of this file only; lines already read keep their contribution.
    pub fn scan_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.stats.total_files += 1;

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if !is_module_file(name) {
            debug!("Skipping non-module file: {}", path.display());
            self.stats.skipped_files += 1;
            return;
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("File not found: {}", path.display());
                self.record_error(path);
                return;
            }
            Err(e) => {
                error!("Failed to open file {}: {}", path.display(), e);
                self.record_error(path);
                return;
            }
        };

        debug!("Scanning file: {}", path.display());
        self.stats.scanned_files += 1;

        // Single pass, line by line; the reader is dropped on every exit path
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to read file {}: {}", path.display(), e);
                    self.record_error(path);
                    break;
                }
            };
            self.classify_line(&line);
        }
    }

    /// Get the declarations accumulated so far
    pub fn results(&self) -> &ScanResult {
        &self.results
    }

    /// Get the statistics accumulated so far
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Consume the scanner and return its accumulated declarations
    pub fn into_results(self) -> ScanResult {
        self.results
    }

    /// Append the declarations of a single line to the results
    fn classify_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::ClassDecl(name) => self.results.classes.push(name),
            LineKind::FuncDecl(name) => self.results.functions.push(name),
            LineKind::ConstAssign(names) => self.results.constants.extend(names),
            LineKind::Other => {}
        }
    }

    fn record_error(&mut self, path: &Path) {
        self.stats.error_files += 1;
        self.stats.error_file_paths.push(path.to_path_buf());
    }
}
