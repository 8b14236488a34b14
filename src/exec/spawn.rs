// src/exec/spawn.rs

//! Spawning the wrapped binaries.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::info;

use crate::errors::{Result, SrtlactlError};
use crate::exec::resolve::{ExecResolveSpec, resolve_exec};
use crate::fs::FileSystem;

/// Well-known identity of a wrapped binary.
///
/// Passed explicitly into spawn/signal/liveness calls instead of living as
/// module-level globals, so tests can point at fake binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySpec {
    /// Process name as it appears in the process table.
    pub name: &'static str,
    /// Default install path checked before falling back to PATH lookup.
    pub system_path: &'static str,
}

/// How the child's stdin/stdout/stderr are routed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdioMode {
    #[default]
    Inherit,
    Null,
    Piped,
}

impl StdioMode {
    fn to_stdio(self) -> Stdio {
        match self {
            StdioMode::Inherit => Stdio::inherit(),
            StdioMode::Null => Stdio::null(),
            StdioMode::Piped => Stdio::piped(),
        }
    }
}

/// Optional spawn configuration: working directory, extra environment,
/// stdio routing.
#[derive(Debug, Clone, Default)]
pub struct SpawnSettings {
    pub current_dir: Option<PathBuf>,
    pub envs: Vec<(String, String)>,
    pub stdio: StdioMode,
}

/// Resolve the executable for `binary` and launch it with `args`.
///
/// Returns the live child handle immediately without waiting for exit.
/// Ownership of the child transfers to the caller; no registry of spawned
/// processes is kept, and the child is not killed on drop. Signal delivery
/// and liveness checks are name-based (see [`super::control`]), not tied to
/// this handle.
pub fn spawn_binary(
    fs: &dyn FileSystem,
    binary: &BinarySpec,
    exec_path: Option<&Path>,
    args: &[String],
    settings: &SpawnSettings,
) -> Result<Child> {
    let exec = resolve_exec(
        fs,
        &ExecResolveSpec {
            exec_path,
            binary_name: binary.name,
            system_path: Some(Path::new(binary.system_path)),
        },
    );

    let mut cmd = Command::new(&exec);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(settings.stdio.to_stdio())
        .stderr(settings.stdio.to_stdio());

    if let Some(dir) = &settings.current_dir {
        cmd.current_dir(dir);
    }
    for (key, value) in &settings.envs {
        cmd.env(key, value);
    }

    let child = cmd.spawn().map_err(|source| SrtlactlError::Spawn {
        binary: exec.display().to_string(),
        source,
    })?;

    info!(
        binary = binary.name,
        exec = %exec.display(),
        pid = child.id(),
        "spawned process"
    );

    Ok(child)
}
