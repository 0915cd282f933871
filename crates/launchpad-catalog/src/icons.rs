//! Icon path resolution.

use crate::paths::LauncherPaths;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolves icon references from the catalog file to files on disk.
///
/// Precedence is fixed: the item's own icon if it exists, then the default
/// icon if it exists, then nothing.
#[derive(Clone, Debug)]
pub struct IconResolver {
    base_dir: PathBuf,
    default_icon: PathBuf,
}

impl IconResolver {
    pub fn new(base_dir: impl Into<PathBuf>, default_icon: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            default_icon: default_icon.into(),
        }
    }

    pub fn from_paths(paths: &LauncherPaths) -> Self {
        Self::new(&paths.base_dir, &paths.default_icon)
    }

    /// Resolve an icon reference as written in the catalog file.
    pub fn resolve(&self, icon: Option<&str>) -> Option<PathBuf> {
        // Whitespace only marks a blank reference; the reference itself is
        // used verbatim.
        let icon = match icon {
            Some(icon) if !icon.trim().is_empty() => icon,
            _ => return self.fallback(),
        };

        let candidate = self.candidate_path(icon);
        if candidate.is_file() {
            return Some(candidate);
        }

        debug!("Icon {:?} not found, falling back to default", candidate);
        self.fallback()
    }

    /// The default icon, if it exists.
    pub fn fallback(&self) -> Option<PathBuf> {
        self.default_icon
            .is_file()
            .then(|| self.default_icon.clone())
    }

    fn candidate_path(&self, icon: &str) -> PathBuf {
        let path = Path::new(icon);
        // Root-relative (`\icons\x.png`) and drive-relative Windows paths
        // count as rooted, not as relative to the base directory.
        if path.is_absolute() || path.has_root() || is_drive_prefixed(path) {
            return path.to_path_buf();
        }

        // Relative references may use either separator.
        icon.trim_start_matches(['.', '\\', '/'])
            .split(['\\', '/'])
            .filter(|part| !part.is_empty())
            .fold(self.base_dir.clone(), |acc, part| acc.join(part))
    }
}

#[cfg(windows)]
fn is_drive_prefixed(path: &Path) -> bool {
    matches!(path.components().next(), Some(std::path::Component::Prefix(_)))
}

#[cfg(not(windows))]
fn is_drive_prefixed(_path: &Path) -> bool {
    false
}
