use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;
use serde::Serialize;

use crate::classify::{display_label, pick_toolchain};
use crate::config::Config;
use crate::error::AppError;
use crate::model::Toolchain;
use crate::scanner::{ScanOptions, ScanSession, Scanner};
use crate::utils::{display_path, matches_search};

pub struct ScanCmdOptions {
    pub root: Option<PathBuf>,
    pub search: Option<String>,
    pub max_projects: Option<usize>,
    pub max_depth: Option<usize>,
    pub json: bool,
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub path: PathBuf,
    pub label: String,
    pub toolchain: Toolchain,
}

pub fn execute_scan(options: ScanCmdOptions) -> Result<Vec<ProjectEntry>, AppError> {
    let config = Config::load()?;
    let root = resolve_root(options.root.clone(), &config)?;

    let entries = scan_projects(&root, &config, &options)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_entries(&root, &entries, options.verbose);
    }

    Ok(entries)
}

pub fn resolve_root(explicit: Option<PathBuf>, config: &Config) -> Result<PathBuf, AppError> {
    explicit.or_else(|| config.scan_directory.clone()).ok_or_else(|| {
        AppError::config(
            "No scan directory configured. Pass a path or run `codelaunch config --set-dir <DIR>`",
        )
    })
}

/// Scan, then apply the ignore list and the search query the way the panel
/// did: the core scanner knows nothing about either.
pub fn scan_projects(
    root: &std::path::Path,
    config: &Config,
    options: &ScanCmdOptions,
) -> Result<Vec<ProjectEntry>, AppError> {
    let mut scan_options = ScanOptions::default();
    if let Some(max_projects) = options.max_projects {
        scan_options.max_projects = max_projects;
    }
    if let Some(max_depth) = options.max_depth {
        scan_options.max_depth = max_depth;
    }

    let scanner = Scanner::new(scan_options);
    let mut session = ScanSession::new();
    let (cancel, _generation) = session.begin();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Scanning...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = scanner.scan(root, &cancel, |count| {
        spinner.set_message(format!("Scanning... {count} project(s)"));
    });
    spinner.finish_and_clear();
    let projects = result?;

    let entries = projects
        .into_iter()
        .filter(|path| !config.is_ignored(path))
        .map(|path| {
            let label = display_label(&path);
            let toolchain = pick_toolchain(&path);
            ProjectEntry { path, label, toolchain }
        })
        .filter(|entry| match &options.search {
            Some(query) => matches_search(&entry.label, &entry.path, query),
            None => true,
        })
        .collect();

    Ok(entries)
}

fn print_entries(root: &std::path::Path, entries: &[ProjectEntry], verbose: bool) {
    println!("Projects under {}:", display_path(root));
    for entry in entries {
        if verbose {
            println!(
                "- {:<40} [{:<9}] {}",
                entry.label,
                entry.toolchain,
                display_path(&entry.path)
            );
        } else {
            println!("- {:<40} [{}]", entry.label, entry.toolchain);
        }
    }
    println!("Found {} project(s)", entries.len());
}
