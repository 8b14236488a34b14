// src/receiver/mod.rs

//! Binding for the `srtla_rec` binary: option schema, argument vector
//! builder, and name-based process operations.

pub mod args;
pub mod options;
pub mod process;

pub use args::{RecArgs, build_rec_args};
pub use options::{RecLogLevel, ReceiverConfig, ReceiverOptions};
pub use process::{
    SRTLA_REC, build_and_spawn_rec, is_rec_running, rec_exec, signal_rec, spawn_rec,
};
