// src/receiver/options.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::errors::{PORT_RANGE_MSG, Result, ValidationErrors};

/// Log level understood by the `srtla_rec` binary's `--log_level` flag.
///
/// This is the *wrapped binary's* verbosity, distinct from this tool's own
/// tracing level (which has no `critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecLogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl RecLogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RecLogLevel::Trace => "trace",
            RecLogLevel::Debug => "debug",
            RecLogLevel::Info => "info",
            RecLogLevel::Warn => "warn",
            RecLogLevel::Error => "error",
            RecLogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RecLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecLogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(RecLogLevel::Trace),
            "debug" => Ok(RecLogLevel::Debug),
            "info" => Ok(RecLogLevel::Info),
            "warn" => Ok(RecLogLevel::Warn),
            "error" => Ok(RecLogLevel::Error),
            "critical" => Ok(RecLogLevel::Critical),
            other => Err(format!(
                "invalid log level: {other} (expected trace, debug, info, warn, error or critical)"
            )),
        }
    }
}

/// Loose input for the receiver binding, as supplied by a caller or read
/// from a `[receiver]` TOML table. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReceiverOptions {
    /// Port `srtla_rec` listens on for bonded connections.
    pub srtla_port: Option<u16>,
    /// Upstream SRT host the receiver forwards to.
    pub srt_hostname: Option<String>,
    /// Upstream SRT port.
    pub srt_port: Option<u16>,
    /// Verbosity passed to the binary as `--log_level`.
    pub log_level: Option<RecLogLevel>,
    /// Override for the executable location (file or directory).
    pub exec_path: Option<PathBuf>,
}

/// Fully-defaulted, validated receiver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverConfig {
    pub srtla_port: u16,
    pub srt_hostname: String,
    pub srt_port: u16,
    pub log_level: Option<RecLogLevel>,
    pub exec_path: Option<PathBuf>,
}

impl ReceiverOptions {
    /// Apply defaults and check constraints.
    ///
    /// Unlike the sender, empty input is valid: every field has a default or
    /// is optional.
    pub fn validate(self) -> Result<ReceiverConfig> {
        let mut errors = ValidationErrors::default();

        let srtla_port = self.srtla_port.unwrap_or(5000);
        if srtla_port == 0 {
            errors.push("srtla_port", PORT_RANGE_MSG);
        }

        let srt_port = self.srt_port.unwrap_or(4001);
        if srt_port == 0 {
            errors.push("srt_port", PORT_RANGE_MSG);
        }

        let srt_hostname = match self.srt_hostname {
            Some(host) if host.is_empty() => {
                errors.push("srt_hostname", "must not be empty");
                host
            }
            Some(host) => host,
            None => "127.0.0.1".to_string(),
        };

        errors.into_result(ReceiverConfig {
            srtla_port,
            srt_hostname,
            srt_port,
            log_level: self.log_level,
            exec_path: self.exec_path,
        })
    }
}
