//! Path helpers for the launcher's base directory and data files.

use std::path::{Path, PathBuf};

/// Catalog file name, relative to the base directory.
pub const CATALOG_FILE: &str = "apps.json";

/// Default icon location, relative to the base directory.
pub const DEFAULT_ICON: [&str; 2] = ["icons", "default.ico"];

/// Files the launcher reads, all anchored at one base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherPaths {
    pub base_dir: PathBuf,
    pub catalog_file: PathBuf,
    pub default_icon: PathBuf,
}

impl LauncherPaths {
    /// Lay out the standard files under `base_dir`.
    pub fn from_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let catalog_file = base_dir.join(CATALOG_FILE);
        let default_icon = DEFAULT_ICON
            .iter()
            .fold(base_dir.clone(), |acc, part| acc.join(part));

        Self {
            base_dir,
            catalog_file,
            default_icon,
        }
    }

    /// Use the directory of the running executable as the base directory.
    pub fn discover() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let base_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self::from_base_dir(base_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_dir_layout() {
        let paths = LauncherPaths::from_base_dir("/opt/launchpad");

        assert_eq!(paths.base_dir, PathBuf::from("/opt/launchpad"));
        assert_eq!(paths.catalog_file, PathBuf::from("/opt/launchpad/apps.json"));
        assert_eq!(
            paths.default_icon,
            PathBuf::from("/opt/launchpad/icons/default.ico")
        );
    }

    #[test]
    fn test_discover_uses_exe_dir() {
        let paths = LauncherPaths::discover().unwrap();
        let exe = std::env::current_exe().unwrap();

        assert_eq!(Some(paths.base_dir.as_path()), exe.parent());
    }
}
