use std::fmt;

/// Hard cap on the number of projects a single scan may report.
pub const SCAN_LIMIT_PROJECTS: usize = 5000;

/// Directories deeper than this (relative to the scan root) are not descended into.
pub const SCAN_LIMIT_DEPTH: usize = 50;

/// Directory basenames that are never descended into, regardless of depth.
pub const SKIP_DIR_NAMES: &[&str] = &["node_modules", ".git", ".hg", ".svn", ".cache"];

/// Marker basenames whose presence as an immediate child makes a directory a
/// project root and terminates descent into it.
pub const PROJECT_ROOT_MARKERS: &[&str] = &[".idea", ".git", ".hg", ".svn"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Toolchain {
    Webstorm,
    Goland,
    Rustrover,
    Pycharm,
    Intellij,
}

impl Toolchain {
    /// Fixed classification order. The first toolchain whose marker list hits
    /// wins, so reordering this array changes classification outcomes.
    pub const DETECTION_ORDER: [Toolchain; 4] =
        [Toolchain::Webstorm, Toolchain::Goland, Toolchain::Rustrover, Toolchain::Pycharm];

    /// Fallback when no marker matches.
    pub const FALLBACK: Toolchain = Toolchain::Intellij;

    /// Marker filenames whose presence in a project directory selects this
    /// toolchain. Checked in declared order.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            Toolchain::Webstorm => &[
                "package.json",
                "pnpm-lock.yaml",
                "yarn.lock",
                "tsconfig.json",
                "vite.config.js",
                "vite.config.ts",
                "next.config.js",
            ],
            Toolchain::Goland => &["go.mod", "go.work"],
            Toolchain::Rustrover => &["Cargo.toml", "rust-toolchain", "rust-toolchain.toml"],
            Toolchain::Pycharm => &["pyproject.toml", "requirements.txt", "setup.py", "Pipfile", "poetry.lock"],
            Toolchain::Intellij => &[],
        }
    }

    /// Launcher command name (Toolbox script or PATH lookup).
    pub fn command(&self) -> &'static str {
        match self {
            Toolchain::Webstorm => "webstorm",
            Toolchain::Goland => "goland",
            Toolchain::Rustrover => "rustrover",
            Toolchain::Pycharm => "pycharm",
            Toolchain::Intellij => "idea",
        }
    }

    /// Directory name under the Toolbox apps directory.
    pub fn toolbox_app_dir(&self) -> &'static str {
        match self {
            Toolchain::Webstorm => "webstorm",
            Toolchain::Goland => "goland",
            Toolchain::Rustrover => "rustrover",
            Toolchain::Pycharm => "pycharm",
            Toolchain::Intellij => "intellij-idea",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "webstorm" => Some(Toolchain::Webstorm),
            "goland" => Some(Toolchain::Goland),
            "rustrover" => Some(Toolchain::Rustrover),
            "pycharm" => Some(Toolchain::Pycharm),
            "intellij" | "idea" => Some(Toolchain::Intellij),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Toolchain::Webstorm => "webstorm",
            Toolchain::Goland => "goland",
            Toolchain::Rustrover => "rustrover",
            Toolchain::Pycharm => "pycharm",
            Toolchain::Intellij => "intellij",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Toolchain::Webstorm => "WebStorm",
            Toolchain::Goland => "GoLand",
            Toolchain::Rustrover => "RustRover",
            Toolchain::Pycharm => "PyCharm",
            Toolchain::Intellij => "IntelliJ IDEA",
        }
    }
}

impl serde::Serialize for Toolchain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl std::str::FromStr for Toolchain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Toolchain::from_name(s).ok_or_else(|| format!("Unknown toolchain '{s}'"))
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
