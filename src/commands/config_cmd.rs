use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::utils::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub set_dir: Option<PathBuf>,
    pub ignore: Option<String>,
    pub unignore: Option<String>,
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    let mut acted = false;

    if options.show_path {
        let path = config_file_path()?;
        println!("Configuration file: {}", display_path(&path));
        acted = true;
    }

    if let Some(ref dir) = options.set_dir {
        if !dir.is_dir() {
            return Err(AppError::InvalidRoot(dir.clone()));
        }
        let mut config = Config::load()?;
        config.scan_directory = Some(dir.clone());
        config.save()?;
        println!("Scan directory set to {}", display_path(dir));
        acted = true;
    }

    if let Some(ref project) = options.ignore {
        let mut config = Config::load()?;
        config.ignore_project(project.clone());
        config.save()?;
        println!("Ignoring project '{}'.", project);
        acted = true;
    }

    if let Some(ref project) = options.unignore {
        let mut config = Config::load()?;
        if config.unignore_project(project) {
            config.save()?;
            println!("No longer ignoring project '{}'.", project);
        } else {
            println!("Project '{}' was not ignored.", project);
        }
        acted = true;
    }

    if options.edit {
        let path = ensure_config_file()?;
        open_editor(&path)?;
        acted = true;
    }

    if !acted {
        print_current()?;
    }

    Ok(())
}

fn print_current() -> Result<(), AppError> {
    let path = config_file_path()?;
    let config = Config::load()?;

    println!("Configuration file: {}", display_path(&path));
    match &config.scan_directory {
        Some(dir) => println!("Scan directory: {}", display_path(dir)),
        None => println!("Scan directory: (not set)"),
    }
    if config.ignored_projects.is_empty() {
        println!("Ignored projects: (none)");
    } else {
        println!("Ignored projects:");
        for project in &config.ignored_projects {
            println!("  - {project}");
        }
    }
    Ok(())
}

fn open_editor(path: &Path) -> Result<(), AppError> {
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "nano".to_string());

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(err.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("Editor exited with status {}", status)))
    }
}
