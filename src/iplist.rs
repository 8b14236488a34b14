// src/iplist.rs

//! Address-list handling for `srtla_send`.
//!
//! The sender binary reads its candidate network paths from a plain text file
//! with one IPv4 address per line. This module validates a list of addresses
//! against a strict dotted-quad pattern and writes the file in a single call.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{Result, ValidationErrors};
use crate::fs::FileSystem;

// Strict dotted-quad: each octet 0-255, no extra characters.
static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$")
        .expect("IPv4 pattern is valid")
});

/// Validate a list of IPv4 addresses.
///
/// Each entry is trimmed before matching. Returns the trimmed list, or a
/// `Validation` error naming every entry that is not a dotted-quad address.
/// Pure: no filesystem access.
pub fn validate_ips(addresses: &[String]) -> Result<Vec<String>> {
    let mut errors = ValidationErrors::default();
    let mut ips = Vec::with_capacity(addresses.len());

    for addr in addresses {
        let trimmed = addr.trim();
        if IPV4_RE.is_match(trimmed) {
            ips.push(trimmed.to_string());
        } else {
            errors.push("ips", format!("invalid IPv4 address: '{trimmed}'"));
        }
    }

    errors.into_result(ips)
}

/// Validate and write an address-list file, one address per line.
///
/// The file is created or overwritten in a single call; on validation failure
/// nothing is written. Returns the validated addresses in their input order.
pub fn write_ip_list(
    fs: &dyn FileSystem,
    addresses: &[String],
    path: &Path,
) -> Result<Vec<String>> {
    let ips = validate_ips(addresses)?;
    fs.write(path, ips.join("\n").as_bytes())?;
    debug!(path = %path.display(), count = ips.len(), "wrote address list");
    Ok(ips)
}
