use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, trace};
use walkdir::WalkDir;

/// File collector for finding candidate module files
#[derive(Debug, Default)]
pub struct FileCollector {}

impl FileCollector {
    /// Create a new file collector
    pub fn new() -> Self {
        Self {}
    }

    /// Collect every regular file under the input directory, in traversal
    /// order. The walk keeps everything; module-file filtering is a
    /// per-file concern applied at scan time.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());

        let mut files = Vec::new();

        // Sorted traversal keeps multi-file accumulation order deterministic
        for entry in WalkDir::new(input_dir).follow_links(true).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk directory {}", input_dir.display()))?;
            if entry.file_type().is_file() {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }

        debug!("Collected {} files for scanning", files.len());
        Ok(files)
    }
}
