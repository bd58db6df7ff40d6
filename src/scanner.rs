use crate::sizer;
use crate::types::FolderRecord;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// List the immediate child directories of `root`, in whatever order the
/// filesystem yields them. Non-directory entries are excluded; dot-prefixed
/// directories are included. Entries that fail to stat are skipped.
pub fn immediate_subdirs(root: &Path) -> io::Result<Vec<PathBuf>> {
    let dirs = fs::read_dir(root)?
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    Ok(dirs)
}

/// Measure every subdirectory sequentially and build the report rows.
#[must_use]
pub fn collect_records(subdirs: &[PathBuf], captured_date: &str, silent: bool) -> Vec<FolderRecord> {
    let total = subdirs.len();

    let records = subdirs
        .iter()
        .enumerate()
        .map(|(i, dir)| {
            if !silent {
                print!("\r  Measuring folders: {}/{}...", i + 1, total);
                io::stdout().flush().ok();
            }

            let name = dir
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().to_string());

            FolderRecord {
                name,
                captured_date: captured_date.to_string(),
                size_bytes: sizer::measure(dir),
            }
        })
        .collect();

    if !silent && total > 0 {
        println!(); // New line after progress
    }
    records
}
