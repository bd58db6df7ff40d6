use std::path::PathBuf;

/// One row of the report, built once per immediate child directory.
#[derive(Debug, Clone)]
pub struct FolderRecord {
    pub name: String,
    pub captured_date: String,
    pub size_bytes: u64,
}

/// Everything the run needs, resolved once at startup so the rest of the
/// logic is pure given this config.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub captured_date: String,
}
