//! App activation: start an executable or hand a URI to the OS.

use crate::error::LaunchError;
use crate::model::AppItem;
use log::info;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// File suffix treated as directly executable on every platform.
pub const EXECUTABLE_EXTENSION: &str = ".exe";

/// Platform operations activation relies on.
pub trait Opener {
    /// Start `program` as a detached process and return its pid.
    fn spawn(&self, program: &Path) -> std::io::Result<u32>;

    /// Ask the OS default handler to open `uri`.
    fn open_uri(&self, uri: &str) -> std::io::Result<()>;
}

/// The real platform: `std::process` for executables, `open` for URIs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn spawn(&self, program: &Path) -> std::io::Result<u32> {
        let mut command = Command::new(program);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        if let Some(dir) = program.parent().filter(|d| !d.as_os_str().is_empty()) {
            command.current_dir(dir);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // Own process group so the child outlives the launcher.
            command.process_group(0);
        }

        let mut child = command.spawn()?;
        let pid = child.id();

        // Reap the child when it exits so it never lingers as a zombie.
        thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(pid)
    }

    fn open_uri(&self, uri: &str) -> std::io::Result<()> {
        open::that(uri)
    }
}

/// Where an app's `path` points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchTarget {
    Executable(PathBuf),
    Uri(url::Url),
}

impl LaunchTarget {
    /// Classify an app's `path`. Existing executables are started directly,
    /// absolute paths become `file://` URIs, everything else must parse as
    /// a URI.
    pub fn for_item(item: &AppItem) -> Result<Self, LaunchError> {
        let raw = match item.path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => {
                return Err(LaunchError::NoTarget {
                    name: item.name.clone(),
                });
            }
        };

        let path = Path::new(raw);
        if is_executable(path) {
            return Ok(LaunchTarget::Executable(path.to_path_buf()));
        }

        url::Url::parse(raw)
            .or_else(|err| {
                if path.is_absolute() {
                    url::Url::from_file_path(path).map_err(|()| err)
                } else {
                    Err(err)
                }
            })
            .map(LaunchTarget::Uri)
            .map_err(|source| LaunchError::InvalidUri {
                uri: raw.to_string(),
                source,
            })
    }
}

/// Result of a successful activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Launched {
    Process { pid: u32, path: PathBuf },
    Uri(String),
}

/// Launch `item` through `opener`.
pub fn activate<O: Opener + ?Sized>(item: &AppItem, opener: &O) -> Result<Launched, LaunchError> {
    match LaunchTarget::for_item(item)? {
        LaunchTarget::Executable(path) => {
            let pid = opener.spawn(&path).map_err(|source| LaunchError::Spawn {
                path: path.clone(),
                source,
            })?;
            info!("Started \"{}\" ({:?}, pid {})", item.name, path, pid);
            Ok(Launched::Process { pid, path })
        }
        LaunchTarget::Uri(uri) => {
            let uri = uri.to_string();
            opener.open_uri(&uri).map_err(|source| LaunchError::Open {
                uri: uri.clone(),
                source,
            })?;
            info!("Opened \"{}\" ({})", item.name, uri);
            Ok(Launched::Uri(uri))
        }
    }
}

/// `.exe` files anywhere; on Unix also any file with an execute bit.
fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }

    let has_exe_suffix = path
        .to_string_lossy()
        .to_lowercase()
        .ends_with(EXECUTABLE_EXTENSION);

    has_exe_suffix || has_execute_bit(path)
}

#[cfg(unix)]
fn has_execute_bit(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn has_execute_bit(_path: &Path) -> bool {
    false
}
