// src/config/model.rs

use serde::Deserialize;

use crate::receiver::options::ReceiverOptions;
use crate::sender::options::SenderOptions;

/// Top-level configuration as read from a TOML file:
///
/// ```toml
/// ips = ["10.0.0.1", "192.168.1.20"]
///
/// [sender]
/// srtla_host = "relay.example.com"
/// srtla_port = 8890
///
/// [receiver]
/// srt_port = 4001
/// log_level = "debug"
/// ```
///
/// All sections are optional; absent fields stay `None` and pick up their
/// defaults during schema validation, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// `[sender]` table.
    pub sender: SenderOptions,

    /// `[receiver]` table.
    pub receiver: ReceiverOptions,

    /// Addresses for the sender's address-list file.
    pub ips: Vec<String>,
}
