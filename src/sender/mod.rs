// src/sender/mod.rs

//! Binding for the `srtla_send` binary: option schema, argument vector
//! builder, and name-based process operations.

pub mod args;
pub mod options;
pub mod process;

pub use args::{SendArgs, build_send_args};
pub use options::{SenderConfig, SenderOptions};
pub use process::{
    SRTLA_SEND, build_and_spawn_send, is_send_running, send_exec, signal_send, spawn_send,
};
