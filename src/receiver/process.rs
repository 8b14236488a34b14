// src/receiver/process.rs

//! Process operations for `srtla_rec`.

use std::path::{Path, PathBuf};

use tokio::process::Child;

use crate::errors::Result;
use crate::exec::{
    BinarySpec, ControlTools, ExecResolveSpec, Signal, SpawnSettings, is_running, resolve_exec,
    send_signal, spawn_binary,
};
use crate::fs::FileSystem;
use crate::receiver::args::build_rec_args;
use crate::receiver::options::ReceiverOptions;

pub const SRTLA_REC: BinarySpec = BinarySpec {
    name: "srtla_rec",
    system_path: "/usr/bin/srtla_rec",
};

/// Resolve the `srtla_rec` executable without spawning it.
pub fn rec_exec(fs: &dyn FileSystem, exec_path: Option<&Path>) -> PathBuf {
    resolve_exec(
        fs,
        &ExecResolveSpec {
            exec_path,
            binary_name: SRTLA_REC.name,
            system_path: Some(Path::new(SRTLA_REC.system_path)),
        },
    )
}

/// Spawn `srtla_rec` with a pre-built argument vector.
pub fn spawn_rec(
    fs: &dyn FileSystem,
    exec_path: Option<&Path>,
    args: &[String],
    settings: &SpawnSettings,
) -> Result<Child> {
    spawn_binary(fs, &SRTLA_REC, exec_path, args, settings)
}

/// Validate options, build the argument vector, and spawn.
pub fn build_and_spawn_rec(
    fs: &dyn FileSystem,
    options: ReceiverOptions,
    settings: &SpawnSettings,
) -> Result<Child> {
    let built = build_rec_args(options)?;
    spawn_rec(fs, built.config.exec_path.as_deref(), &built.args, settings)
}

/// Send a signal to every running `srtla_rec` instance.
pub async fn signal_rec(tools: &ControlTools, signal: Signal) -> Result<()> {
    send_signal(tools, SRTLA_REC.name, signal).await
}

/// Whether any `srtla_rec` instance is currently running.
pub async fn is_rec_running(tools: &ControlTools) -> bool {
    is_running(tools, SRTLA_REC.name).await
}
