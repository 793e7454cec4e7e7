use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use walkdir::WalkDir;

use crate::classify::display_label;
use crate::error::AppError;
use crate::model::{PROJECT_ROOT_MARKERS, SCAN_LIMIT_DEPTH, SCAN_LIMIT_PROJECTS, SKIP_DIR_NAMES};

/// Cooperative cancellation handle shared between a scan and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Bounds for a single scan. Defaults match the panel limits.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Hard cap on the result size; the scan stops once reached.
    pub max_projects: usize,
    /// Directories at this depth are still marker-checked but never enumerated.
    pub max_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { max_projects: SCAN_LIMIT_PROJECTS, max_depth: SCAN_LIMIT_DEPTH }
    }
}

/// Issues one cancellation token per scan and supersedes the previous one,
/// so at most one scan is ever actively walking the filesystem. The returned
/// generation lets the caller decide whether a finished scan is still the
/// current one.
#[derive(Debug, Default)]
pub struct ScanSession {
    generation: u64,
    active: Option<CancelToken>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> (CancelToken, u64) {
        if let Some(previous) = &self.active {
            previous.cancel();
        }
        self.generation += 1;
        let token = CancelToken::new();
        self.active = Some(token.clone());
        (token, self.generation)
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Walk `root` for project roots (directories holding an `.idea`, `.git`,
    /// `.hg`, or `.svn` child) and return their paths sorted by display label,
    /// lowercased.
    ///
    /// Directories named in [`SKIP_DIR_NAMES`] are pruned unconditionally, and
    /// a recognized project root is never descended into, so nested projects
    /// are not reported. Directories that cannot be enumerated are skipped
    /// without failing the scan. Cancellation is checked at every traversal
    /// step and reported as [`AppError::Cancelled`].
    pub fn scan(
        &self,
        root: &Path,
        cancel: &CancelToken,
        mut on_progress: impl FnMut(usize),
    ) -> Result<Vec<PathBuf>, AppError> {
        if !root.is_dir() {
            return Err(AppError::InvalidRoot(root.to_path_buf()));
        }

        let max_projects = self.options.max_projects.max(1);
        let mut projects: Vec<PathBuf> = Vec::new();

        let mut walker = WalkDir::new(root)
            .max_depth(self.options.max_depth)
            .follow_links(false)
            .into_iter();

        while let Some(entry) = walker.next() {
            if cancel.is_cancelled() {
                return Err(AppError::Cancelled);
            }
            if projects.len() >= max_projects {
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable or vanished directories are not an error for the
                // whole scan.
                Err(_) => continue,
            };

            // Symlinked directories report a symlink file type here, so they
            // are neither marker-checked nor descended into.
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if SKIP_DIR_NAMES.contains(&name.as_ref()) {
                walker.skip_current_dir();
                continue;
            }

            if has_project_marker(entry.path()) {
                projects.push(entry.path().to_path_buf());
                on_progress(projects.len());
                walker.skip_current_dir();
            }
        }

        projects.sort_by_key(|path| display_label(path).to_lowercase());
        Ok(projects)
    }
}

/// Existence check for project-root markers as immediate children. This is a
/// membership test against fixed names, not a traversal step.
fn has_project_marker(dir: &Path) -> bool {
    PROJECT_ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists())
}
