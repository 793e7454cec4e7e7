use std::io;
use std::path::PathBuf;

use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;

use crate::classify::{display_label, pick_toolchain};
use crate::config::Config;
use crate::error::AppError;
use crate::launcher::launch_project;
use crate::model::Toolchain;

pub struct LaunchOptions {
    pub path: Option<PathBuf>,
    pub toolchain: Option<Toolchain>,
    pub search: Option<String>,
}

pub fn execute_launch(options: LaunchOptions) -> Result<(), AppError> {
    match options.path {
        Some(path) => launch_path(path, options.toolchain),
        None => pick_and_launch(options.toolchain, options.search),
    }
}

fn launch_path(path: PathBuf, explicit: Option<Toolchain>) -> Result<(), AppError> {
    if !path.is_dir() {
        return Err(AppError::InvalidRoot(path));
    }

    let toolchain = explicit.unwrap_or_else(|| pick_toolchain(&path));
    launch_project(&path, toolchain)?;
    println!("Launched {} for {}", toolchain.display_name(), display_label(&path));
    Ok(())
}

/// Scan first, then offer a fuzzy picker over the filtered labels. The CLI
/// stand-in for the panel menu with its search entry.
fn pick_and_launch(explicit: Option<Toolchain>, search: Option<String>) -> Result<(), AppError> {
    let config = Config::load()?;
    let root = super::scan::resolve_root(None, &config)?;

    let scan_options = super::scan::ScanCmdOptions {
        root: None,
        search,
        max_projects: None,
        max_depth: None,
        json: false,
        verbose: false,
    };
    let entries = super::scan::scan_projects(&root, &config, &scan_options)?;

    if entries.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    let labels: Vec<&str> = entries.iter().map(|entry| entry.label.as_str()).collect();
    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Launch project")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(io::Error::other)?;

    let Some(index) = selection else {
        println!("Aborted. Nothing was launched.");
        return Ok(());
    };

    let entry = &entries[index];
    let toolchain = explicit.unwrap_or(entry.toolchain);
    launch_project(&entry.path, toolchain)?;
    println!("Launched {} for {}", toolchain.display_name(), entry.label);
    Ok(())
}
