// src/exec/mod.rs

//! Process execution layer.
//!
//! Everything here operates against OS primitives and keeps no state between
//! calls:
//!
//! - [`resolve`] turns a binary name plus optional overrides into a concrete
//!   launchable path.
//! - [`spawn`] launches a resolved binary with `tokio::process::Command` and
//!   hands the live child back to the caller.
//! - [`control`] delivers signals and answers liveness queries by *process
//!   name* via the external `killall` / `pgrep` utilities, so they reach
//!   instances this layer never spawned.

pub mod control;
pub mod resolve;
pub mod spawn;

pub use control::{ControlTools, Signal, is_running, send_signal};
pub use resolve::{ExecResolveSpec, resolve_exec};
pub use spawn::{BinarySpec, SpawnSettings, StdioMode, spawn_binary};
