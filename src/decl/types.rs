use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Importable declarations collected from one or more Python module files
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Names of top-level classes, in encounter order
    pub classes: Vec<String>,

    /// Names of top-level functions, in encounter order
    pub functions: Vec<String>,

    /// Names of top-level constants, in encounter order
    pub constants: Vec<String>,
}

impl ScanResult {
    /// True when no declarations of any kind were collected
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty() && self.constants.is_empty()
    }

    /// Total number of collected declarations across all three categories
    pub fn len(&self) -> usize {
        self.classes.len() + self.functions.len() + self.constants.len()
    }
}

/// Statistics about the declaration scanning process
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of files handed to the scanner
    pub total_files: usize,

    /// Number of files rejected by the module-file filter
    pub skipped_files: usize,

    /// Number of files read line by line
    pub scanned_files: usize,

    /// Number of files that failed to open or read
    pub error_files: usize,

    /// Paths to files that failed to open or read
    pub error_file_paths: Vec<PathBuf>,
}
