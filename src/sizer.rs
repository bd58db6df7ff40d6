use std::path::Path;
use std::process::Command;
use walkdir::WalkDir;

type Strategy = fn(&Path) -> Option<u64>;

// Tried in order, first success wins. Accurate byte counts are preferred,
// but the report must still come out on systems without a usable du.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("du apparent bytes", du_apparent_bytes),
    ("du 1K blocks", du_kilo_blocks),
    ("recursive walk", walk_total),
];

/// Total recursive size of `path` in bytes, via the fallback chain.
/// Never fails: if no strategy produces a usable result, the answer is 0
/// so one unmeasurable directory cannot sink the whole report.
#[must_use]
pub fn measure(path: &Path) -> u64 {
    for (name, strategy) in STRATEGIES {
        if let Some(bytes) = strategy(path) {
            log::debug!("{}: {} bytes via {}", path.display(), bytes, name);
            return bytes;
        }
    }

    log::warn!(
        "no size strategy succeeded for {}, recording 0",
        path.display()
    );
    0
}

fn du_apparent_bytes(path: &Path) -> Option<u64> {
    run_du("-sb", path)
}

fn du_kilo_blocks(path: &Path) -> Option<u64> {
    // du -sk reports 1K blocks
    run_du("-sk", path).map(|kb| kb * 1024)
}

fn run_du(flag: &str, path: &Path) -> Option<u64> {
    let output = Command::new("du").arg(flag).arg(path).output().ok()?;
    if !output.status.success() {
        return None;
    }

    // du output: "<count>\t<path>"
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_whitespace()
        .next()
        .and_then(|count| count.parse::<u64>().ok())
}

fn walk_total(path: &Path) -> Option<u64> {
    // Unreadable entries are skipped rather than failing the walk, so a
    // permission-denied or race-deleted file only costs its own bytes.
    let total = WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum();

    Some(total)
}
