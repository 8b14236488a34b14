// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::exec::Signal;
use crate::receiver::options::RecLogLevel;

/// Command-line arguments for `srtlactl`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "srtlactl",
    version,
    about = "Control the srtla_send and srtla_rec bonded-connection binaries.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to an optional TOML config file with [sender] / [receiver]
    /// tables and an `ips` array. CLI flags override file values.
    ///
    /// If omitted, `Srtlactl.toml` is used when it exists.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level of this tool (error, warn, info, debug, trace).
    ///
    /// If omitted, `SRTLACTL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Spawn srtla_send.
    Send(SendCmd),
    /// Spawn srtla_rec.
    Rec(RecCmd),
    /// Signal all running instances of a binary by process name.
    Stop(StopCmd),
    /// Check whether a binary is currently running.
    Status(StatusCmd),
    /// Validate and write the sender's address-list file.
    WriteIps(WriteIpsCmd),
}

#[derive(Debug, Clone, Args)]
pub struct SendCmd {
    /// Local port srtla_send listens on.
    #[arg(long, value_name = "PORT")]
    pub listen_port: Option<u16>,

    /// SRTLA receiver host to connect to (required unless set in config).
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// SRTLA receiver port.
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path of the address-list file passed to the binary.
    #[arg(long, value_name = "PATH")]
    pub ips_file: Option<PathBuf>,

    /// Address to write into the address-list file (repeatable).
    ///
    /// When given, the file is written before the process is spawned.
    #[arg(long = "ip", value_name = "ADDR")]
    pub ips: Vec<String>,

    /// Pass --verbose to the binary.
    #[arg(long)]
    pub verbose: bool,

    /// Executable override: a file, or a directory containing srtla_send.
    #[arg(long, value_name = "PATH")]
    pub exec_path: Option<PathBuf>,

    /// Wait for the process to exit instead of detaching.
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RecCmd {
    /// Port srtla_rec listens on for bonded connections.
    #[arg(long, value_name = "PORT")]
    pub srtla_port: Option<u16>,

    /// Upstream SRT host the receiver forwards to.
    #[arg(long, value_name = "HOST")]
    pub srt_hostname: Option<String>,

    /// Upstream SRT port.
    #[arg(long, value_name = "PORT")]
    pub srt_port: Option<u16>,

    /// Verbosity of the srtla_rec binary itself (passed as --log_level).
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub rec_log_level: Option<RecLogLevel>,

    /// Executable override: a file, or a directory containing srtla_rec.
    #[arg(long, value_name = "PATH")]
    pub exec_path: Option<PathBuf>,

    /// Wait for the process to exit instead of detaching.
    #[arg(long)]
    pub wait: bool,
}

#[derive(Debug, Clone, Args)]
pub struct StopCmd {
    /// Which binary to signal.
    #[arg(value_enum)]
    pub target: Target,

    /// Signal to deliver.
    #[arg(long, value_enum, default_value = "term")]
    pub signal: SignalArg,
}

#[derive(Debug, Clone, Args)]
pub struct StatusCmd {
    /// Which binary to query.
    #[arg(value_enum)]
    pub target: Target,
}

#[derive(Debug, Clone, Args)]
pub struct WriteIpsCmd {
    /// IPv4 addresses, one per line in the output file.
    #[arg(value_name = "ADDR", required = true)]
    pub addresses: Vec<String>,

    /// Output path.
    #[arg(long, value_name = "PATH", default_value = "/tmp/srtla_ips")]
    pub file: PathBuf,
}

/// The two wrapped binaries, as subcommand targets.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum Target {
    Sender,
    Rec,
}

/// Signal names accepted on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum, PartialEq, Eq)]
pub enum SignalArg {
    Term,
    Hup,
}

impl From<SignalArg> for Signal {
    fn from(value: SignalArg) -> Self {
        match value {
            SignalArg::Term => Signal::Term,
            SignalArg::Hup => Signal::Hup,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
