use std::path::{Path, PathBuf};

use dirs_next as dirs;

/// Replace the home directory prefix with `~` to make output easier to read.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        let mut display = PathBuf::from("~");
        display.push(stripped);
        return display.display().to_string();
    }

    path.display().to_string()
}

/// Case-insensitive search filter matching either the `parent/name` label or
/// the full path, the way the panel search entry matched.
pub fn matches_search(label: &str, path: &Path, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&query)
        || path.to_string_lossy().to_lowercase().contains(&query)
}
