use std::path::{Path, PathBuf};

use dirs_next as dirs;

use crate::model::Toolchain;

/// Basename of the project and of its parent directory. Pure path splitting,
/// no filesystem access.
pub fn project_parts(path: &Path) -> (String, String) {
    let project_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent_name = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    (parent_name, project_name)
}

/// `parent/name` label used for sorting, searching, and plain display.
pub fn display_label(path: &Path) -> String {
    let (parent_name, project_name) = project_parts(path);
    format!("{parent_name}/{project_name}")
}

/// Same label as Pango-style markup with the parent segment de-emphasized.
/// Opaque to this crate; a rendering layer interprets it.
pub fn display_markup(path: &Path) -> String {
    let (parent_name, project_name) = project_parts(path);
    format!(
        "<span size=\"small\" alpha=\"70%\">{}/</span>{}",
        escape_markup(&parent_name),
        escape_markup(&project_name)
    )
}

pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Best-guess toolchain for a project directory. Walks the fixed detection
/// order and returns the first toolchain with a marker file present; falls
/// back to the generic IntelliJ key. Existence checks only, file contents are
/// never read.
pub fn pick_toolchain(path: &Path) -> Toolchain {
    for toolchain in Toolchain::DETECTION_ORDER {
        for marker in toolchain.markers() {
            if path.join(marker).exists() {
                return toolchain;
            }
        }
    }
    Toolchain::FALLBACK
}

/// Resolved icon for a project entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    /// Project-local `.idea/icon.png`.
    Custom(PathBuf),
    /// Icon image shipped with a JetBrains Toolbox app.
    Toolbox(PathBuf),
    /// Freedesktop icon-theme name.
    Themed(&'static str),
}

/// Icon precedence: project-local custom icon, then the Toolbox app icon for
/// the toolchain, then a generic development icon.
pub fn icon_for(path: &Path, toolchain: Toolchain) -> IconRef {
    let custom = path.join(".idea").join("icon.png");
    if custom.exists() {
        return IconRef::Custom(custom);
    }

    if let Some(icon) = toolbox_icon(toolchain) {
        return IconRef::Toolbox(icon);
    }

    IconRef::Themed("applications-development-symbolic")
}

/// `~/.local/share/JetBrains/Toolbox/apps`.
pub fn toolbox_apps_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local/share/JetBrains/Toolbox/apps"))
}

/// `~/.local/share/JetBrains/Toolbox/scripts`.
pub fn toolbox_scripts_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local/share/JetBrains/Toolbox/scripts"))
}

fn toolbox_icon(toolchain: Toolchain) -> Option<PathBuf> {
    let bin = toolbox_apps_dir()?.join(toolchain.toolbox_app_dir()).join("bin");
    let base = toolchain.command();
    for ext in ["png", "svg"] {
        let candidate = bin.join(format!("{base}.{ext}"));
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}
