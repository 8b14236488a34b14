// src/sender/process.rs

//! Process operations for `srtla_send`.

use std::path::{Path, PathBuf};

use tokio::process::Child;

use crate::errors::Result;
use crate::exec::{
    BinarySpec, ControlTools, ExecResolveSpec, Signal, SpawnSettings, is_running, resolve_exec,
    send_signal, spawn_binary,
};
use crate::fs::FileSystem;
use crate::sender::args::build_send_args;
use crate::sender::options::SenderOptions;

pub const SRTLA_SEND: BinarySpec = BinarySpec {
    name: "srtla_send",
    system_path: "/usr/bin/srtla_send",
};

/// Resolve the `srtla_send` executable without spawning it.
pub fn send_exec(fs: &dyn FileSystem, exec_path: Option<&Path>) -> PathBuf {
    resolve_exec(
        fs,
        &ExecResolveSpec {
            exec_path,
            binary_name: SRTLA_SEND.name,
            system_path: Some(Path::new(SRTLA_SEND.system_path)),
        },
    )
}

/// Spawn `srtla_send` with a pre-built argument vector.
pub fn spawn_send(
    fs: &dyn FileSystem,
    exec_path: Option<&Path>,
    args: &[String],
    settings: &SpawnSettings,
) -> Result<Child> {
    spawn_binary(fs, &SRTLA_SEND, exec_path, args, settings)
}

/// Validate options, build the argument vector, and spawn.
pub fn build_and_spawn_send(
    fs: &dyn FileSystem,
    options: SenderOptions,
    settings: &SpawnSettings,
) -> Result<Child> {
    let built = build_send_args(options)?;
    spawn_send(fs, built.config.exec_path.as_deref(), &built.args, settings)
}

/// Send a signal to every running `srtla_send` instance.
///
/// SIGHUP makes the binary reload its address list; the default (TERM)
/// stops it.
pub async fn signal_send(tools: &ControlTools, signal: Signal) -> Result<()> {
    send_signal(tools, SRTLA_SEND.name, signal).await
}

/// Whether any `srtla_send` instance is currently running.
pub async fn is_send_running(tools: &ControlTools) -> bool {
    is_running(tools, SRTLA_SEND.name).await
}
