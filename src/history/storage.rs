use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "cmdframe";
const HISTORY_FILE: &str = "history";

pub fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(HISTORY_FILE))
}

/// Load the saved history, oldest first
///
/// A missing or unreadable file yields an empty history.
pub fn load_history_from_path(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("Could not read history at {}: {}", path.display(), e);
            }
            Vec::new()
        }
    }
}

/// Save `entries` to `path`, deduplicated and trimmed to `max_entries`
pub fn save_history_to_path(path: &Path, entries: &[String], max_entries: usize) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let kept = trim_to_max(&deduplicate(entries), max_entries);
    let mut contents = kept.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }

    fs::write(path, contents)
}

/// Drop repeated commands, keeping each at its most recent position
pub fn deduplicate(entries: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut kept: Vec<String> = entries
        .iter()
        .rev()
        .filter(|entry| !entry.contains('\n'))
        .filter(|entry| seen.insert(entry.as_str()))
        .cloned()
        .collect();
    kept.reverse();
    kept
}

/// Keep only the newest `max_entries` commands
pub fn trim_to_max(entries: &[String], max_entries: usize) -> Vec<String> {
    let start = entries.len().saturating_sub(max_entries);
    entries[start..].to_vec()
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
