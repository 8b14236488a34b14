// src/sender/options.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{PORT_RANGE_MSG, Result, ValidationErrors};

/// Loose input for the sender binding, as supplied by a caller or read from
/// a `[sender]` TOML table. Every field is optional; defaults are applied
/// during validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SenderOptions {
    /// Local UDP port `srtla_send` listens on for the SRT caller.
    pub listen_port: Option<u16>,
    /// Remote SRTLA receiver host. Required; no default.
    pub srtla_host: Option<String>,
    /// Remote SRTLA receiver port.
    pub srtla_port: Option<u16>,
    /// Path of the address-list file passed to the binary.
    pub ips_file: Option<PathBuf>,
    /// Pass `--verbose` to the binary.
    pub verbose: bool,
    /// Override for the executable location (file or directory).
    pub exec_path: Option<PathBuf>,
}

/// Fully-defaulted, validated sender configuration.
///
/// Constructed only via [`SenderOptions::validate`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderConfig {
    pub listen_port: u16,
    pub srtla_host: String,
    pub srtla_port: u16,
    pub ips_file: PathBuf,
    pub verbose: bool,
    pub exec_path: Option<PathBuf>,
}

impl SenderOptions {
    /// Apply defaults and check constraints.
    ///
    /// Pure: no filesystem or process access. All violations are reported
    /// together in a single `Validation` error.
    pub fn validate(self) -> Result<SenderConfig> {
        let mut errors = ValidationErrors::default();

        let listen_port = self.listen_port.unwrap_or(5000);
        if listen_port == 0 {
            errors.push("listen_port", PORT_RANGE_MSG);
        }

        let srtla_port = self.srtla_port.unwrap_or(5001);
        if srtla_port == 0 {
            errors.push("srtla_port", PORT_RANGE_MSG);
        }

        let srtla_host = match self.srtla_host {
            Some(host) if !host.is_empty() => host,
            Some(_) => {
                errors.push("srtla_host", "must not be empty");
                String::new()
            }
            None => {
                errors.push("srtla_host", "required field missing");
                String::new()
            }
        };

        let ips_file = match self.ips_file {
            Some(path) if path.as_os_str().is_empty() => {
                errors.push("ips_file", "must not be empty");
                path
            }
            Some(path) => path,
            None => PathBuf::from("/tmp/srtla_ips"),
        };

        errors.into_result(SenderConfig {
            listen_port,
            srtla_host,
            srtla_port,
            ips_file,
            verbose: self.verbose,
            exec_path: self.exec_path,
        })
    }
}
