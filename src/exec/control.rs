// src/exec/control.rs

//! Name-based signal delivery and liveness checks.
//!
//! Both operations go through external utilities (`killall`, `pgrep`) and
//! address *all* processes with a given name, including instances this crate
//! never spawned. Each call runs exactly one external command to completion;
//! there are no retries, timeouts or internal state.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::{Result, SrtlactlError};

/// Program paths for the external process utilities.
///
/// Defaults to the bare names (resolved via PATH); tests point these at fake
/// scripts.
#[derive(Debug, Clone)]
pub struct ControlTools {
    pub killall: PathBuf,
    pub pgrep: PathBuf,
}

impl Default for ControlTools {
    fn default() -> Self {
        Self {
            killall: PathBuf::from("killall"),
            pgrep: PathBuf::from("pgrep"),
        }
    }
}

/// Signals deliverable to the wrapped binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Signal {
    /// Terminate. `killall`'s own default, so no flag is passed.
    #[default]
    Term,
    /// Hang-up; `srtla_send` reloads its address list on SIGHUP.
    Hup,
}

impl Signal {
    fn flag(self) -> Option<&'static str> {
        match self {
            Signal::Term => None,
            Signal::Hup => Some("-HUP"),
        }
    }
}

/// Send `signal` to every process named `process_name`.
///
/// Resolves once the broadcast command completes, not once the targets have
/// exited. The command's exit code is ignored: `killall` exits 1 when no
/// process matches, and signaling an already-stopped process is not an error.
/// Fails only when the utility itself cannot be run.
pub async fn send_signal(
    tools: &ControlTools,
    process_name: &str,
    signal: Signal,
) -> Result<()> {
    let mut cmd = Command::new(&tools.killall);
    if let Some(flag) = signal.flag() {
        cmd.arg(flag);
    }
    cmd.arg(process_name)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = cmd.status().await.map_err(|source| SrtlactlError::Signal {
        tool: tools.killall.display().to_string(),
        source,
    })?;

    debug!(
        process = process_name,
        ?signal,
        exit = status.code(),
        "signal broadcast completed"
    );
    Ok(())
}

/// Whether at least one process with exactly `process_name` is running.
///
/// Queries `pgrep -x`. Never fails: if the query mechanism itself errors the
/// result collapses to `false` (a false negative is acceptable, a false
/// positive is not).
pub async fn is_running(tools: &ControlTools, process_name: &str) -> bool {
    let result = Command::new(&tools.pgrep)
        .arg("-x")
        .arg(process_name)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match result {
        Ok(status) => status.success(),
        Err(err) => {
            warn!(
                process = process_name,
                error = %err,
                "liveness query failed; reporting not running"
            );
            false
        }
    }
}
