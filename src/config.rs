use std::fs;
use std::io::Write;
use std::path::PathBuf;

use dirs_next as dirs;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Root directory scanned when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_directory: Option<PathBuf>,

    /// Absolute project paths hidden from scan output and the picker.
    #[serde(default)]
    pub ignored_projects: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let path = config_file_path()?;
        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&mut self) -> Result<(), AppError> {
        self.normalize_ignored();
        let path = config_file_path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path)?;
        let contents = toml::to_string_pretty(self)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    pub fn ignore_project(&mut self, value: String) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        if !self.ignored_projects.iter().any(|existing| existing == trimmed) {
            self.ignored_projects.push(trimmed.to_string());
        }
    }

    pub fn unignore_project(&mut self, value: &str) -> bool {
        let before = self.ignored_projects.len();
        self.ignored_projects.retain(|existing| existing != value.trim());
        self.ignored_projects.len() != before
    }

    pub fn is_ignored(&self, path: &std::path::Path) -> bool {
        let candidate = path.to_string_lossy();
        self.ignored_projects.iter().any(|ignored| ignored.as_str() == candidate)
    }

    /// Trim entries, drop empties, sort, and deduplicate.
    fn normalize_ignored(&mut self) {
        let mut entries: Vec<String> = self
            .ignored_projects
            .iter()
            .map(|entry| entry.trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        entries.sort();
        entries.dedup();
        self.ignored_projects = entries;
    }
}

pub fn config_file_path() -> Result<PathBuf, AppError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            AppError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("codelaunch").join("config.toml"))
}

pub fn ensure_config_file() -> Result<PathBuf, AppError> {
    let path = config_file_path()?;
    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let default = Config::default();
        let contents = toml::to_string_pretty(&default)?;
        fs::write(&path, contents)?;
    }
    Ok(path)
}
