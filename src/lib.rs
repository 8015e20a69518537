pub mod decl;

// Re-export main types and functions for easier access
pub use decl::report;
pub use decl::scanner::{DeclScanner, FileCollector, LineKind, classify, is_module_file};
pub use decl::types::{ScanResult, ScanStats};
