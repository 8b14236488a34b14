// src/receiver/args.rs

use crate::errors::Result;
use crate::receiver::options::{ReceiverConfig, ReceiverOptions};

/// Result of building receiver args: the vector plus the validated config,
/// since the caller needs `exec_path` separately (it is not an argument).
#[derive(Debug, Clone)]
pub struct RecArgs {
    pub args: Vec<String>,
    pub config: ReceiverConfig,
}

/// Build CLI args for `srtla_rec`.
///
/// Shape: `--srtla_port <port> --srt_hostname <host> --srt_port <port>
/// [--log_level <level>]`
pub fn build_rec_args(input: ReceiverOptions) -> Result<RecArgs> {
    let config = input.validate()?;
    let mut args = vec![
        "--srtla_port".to_string(),
        config.srtla_port.to_string(),
        "--srt_hostname".to_string(),
        config.srt_hostname.clone(),
        "--srt_port".to_string(),
        config.srt_port.to_string(),
    ];
    if let Some(level) = config.log_level {
        args.push("--log_level".to_string());
        args.push(level.to_string());
    }
    Ok(RecArgs { args, config })
}
