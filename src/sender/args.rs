// src/sender/args.rs

use crate::errors::Result;
use crate::sender::options::{SenderConfig, SenderOptions};

/// Result of building sender args: the vector plus the validated config,
/// since the caller needs `exec_path` separately (it is not an argument).
#[derive(Debug, Clone)]
pub struct SendArgs {
    pub args: Vec<String>,
    pub config: SenderConfig,
}

/// Build CLI args for `srtla_send`.
///
/// Shape: `<listen_port> <srtla_host> <srtla_port> <ips_file> [--verbose]`
pub fn build_send_args(input: SenderOptions) -> Result<SendArgs> {
    let config = input.validate()?;
    let mut args = vec![
        config.listen_port.to_string(),
        config.srtla_host.clone(),
        config.srtla_port.to_string(),
        config.ips_file.display().to_string(),
    ];
    if config.verbose {
        args.push("--verbose".to_string());
    }
    Ok(SendArgs { args, config })
}
