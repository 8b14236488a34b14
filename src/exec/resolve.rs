// src/exec/resolve.rs

//! Executable path resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;

/// Inputs to [`resolve_exec`].
#[derive(Debug, Clone, Copy)]
pub struct ExecResolveSpec<'a> {
    /// Caller override: either the executable itself or a directory
    /// containing it.
    pub exec_path: Option<&'a Path>,
    /// Well-known name of the binary, e.g. `srtla_send`.
    pub binary_name: &'a str,
    /// Well-known install location, e.g. `/usr/bin/srtla_send`.
    pub system_path: Option<&'a Path>,
}

/// Resolve the executable to launch.
///
/// Resolution order:
/// 1. `exec_path` is an existing regular file: use it directly.
/// 2. `exec_path` given but not a file: treat it as a directory and append
///    `binary_name`. If the joined path doesn't exist either, it is still
///    returned as the best guess (the eventual spawn surfaces not-found),
///    unless `exec_path` already ends with `binary_name`, in which case
///    `exec_path` is returned unchanged rather than double-appended.
/// 3. `system_path` exists as a file: use it.
/// 4. Fall back to the bare `binary_name` and let PATH decide at spawn time.
///
/// Total: always produces a path, never fails.
pub fn resolve_exec(fs: &dyn FileSystem, spec: &ExecResolveSpec<'_>) -> PathBuf {
    if let Some(exec_path) = spec.exec_path {
        if fs.is_file(exec_path) {
            return exec_path.to_path_buf();
        }
        let candidate = exec_path.join(spec.binary_name);
        if fs.is_file(&candidate) {
            return candidate;
        }
        debug!(
            exec_path = %exec_path.display(),
            binary = spec.binary_name,
            "exec_path does not resolve to an existing file; returning best guess"
        );
        return if exec_path.to_string_lossy().ends_with(spec.binary_name) {
            exec_path.to_path_buf()
        } else {
            candidate
        };
    }

    if let Some(system_path) = spec.system_path {
        if fs.is_file(system_path) {
            return system_path.to_path_buf();
        }
    }

    PathBuf::from(spec.binary_name)
}
