#![allow(dead_code)]

//! Helpers that write small executable shell scripts into a temp dir.
//!
//! The crate under test treats the wrapped binaries and the `killall` /
//! `pgrep` utilities as black boxes, so tests stand them in with scripts
//! whose exit codes and argv recording we control.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write an executable `sh` script named `name` into `dir` and return its
/// path. `body` is the script without the shebang line.
pub fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("writing script {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("chmod {:?}", path))?;
    }

    Ok(path)
}

/// A fake utility that immediately exits with `code`.
pub fn exiting_with(dir: &Path, name: &str, code: i32) -> Result<PathBuf> {
    write_script(dir, name, &format!("exit {code}"))
}

/// A fake binary that records its argv (one token per line) into `out`,
/// then exits successfully.
pub fn argv_recorder(dir: &Path, name: &str, out: &Path) -> Result<PathBuf> {
    write_script(
        dir,
        name,
        &format!("printf '%s\\n' \"$@\" > '{}'", out.display()),
    )
}
