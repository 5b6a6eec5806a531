use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SOURCE_EXTENSIONS: [&str; 3] = ["py", "pyi", "pyw"];

/// Finds scannable source files under a directory root.
pub struct SourceScanner;

impl SourceScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<PathBuf>> {
        // Collect entries first so the extension filter can run in parallel
        let entries: Vec<_> = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.path().is_file())
            .collect();

        let files: Vec<PathBuf> = entries
            .par_iter()
            .filter_map(|entry| {
                let path = entry.path();
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .filter(|ext| SOURCE_EXTENSIONS.contains(ext))
                    .map(|_| path.to_path_buf())
            })
            .collect();

        Ok(files)
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}
