use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::classify::toolbox_scripts_dir;
use crate::error::AppError;
use crate::model::Toolchain;

/// Locate the launcher executable for a toolchain: the JetBrains Toolbox
/// script wins over a plain PATH lookup.
pub fn resolve_command(toolchain: Toolchain) -> Option<PathBuf> {
    let cmd = toolchain.command();
    find_toolbox_script(cmd).or_else(|| find_in_path(cmd))
}

/// Spawn the IDE for `project_path`, detached from this process.
pub fn launch_project(project_path: &Path, toolchain: Toolchain) -> Result<(), AppError> {
    let cmd = toolchain.command();
    let cmd_path = resolve_command(toolchain).ok_or_else(|| {
        AppError::launch(format!("Could not find \"{cmd}\" in PATH or Toolbox scripts"))
    })?;

    Command::new(&cmd_path)
        .arg(project_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| AppError::launch(format!("Failed to launch {cmd}: {err}")))?;

    Ok(())
}

fn find_toolbox_script(cmd: &str) -> Option<PathBuf> {
    let candidate = toolbox_scripts_dir()?.join(cmd);
    candidate.is_file().then_some(candidate)
}

fn find_in_path(cmd: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(cmd))
        .find(|candidate| candidate.is_file())
}
