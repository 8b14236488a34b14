// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod iplist;
pub mod logging;
pub mod receiver;
pub mod sender;

use anyhow::{Result, bail};
use tokio::process::Child;
use tracing::info;

use crate::cli::{CliArgs, Command, RecCmd, SendCmd, Target};
use crate::config::ConfigFile;
use crate::exec::{ControlTools, SpawnSettings};
use crate::fs::RealFileSystem;
use crate::receiver::{ReceiverOptions, build_rec_args, is_rec_running, signal_rec, spawn_rec};
use crate::sender::{SenderOptions, build_send_args, is_send_running, signal_send, spawn_send};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - optional TOML config loading (CLI flags win over file values)
/// - schema validation + argument building
/// - spawn / signal / liveness operations against the wrapped binaries
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_config(&args)?;
    let fs = RealFileSystem;
    let tools = ControlTools::default();

    match args.command {
        Command::Send(cmd) => run_send(&fs, cfg, cmd).await,
        Command::Rec(cmd) => run_rec(&fs, cfg, cmd).await,
        Command::Stop(cmd) => {
            let signal = cmd.signal.into();
            match cmd.target {
                Target::Sender => signal_send(&tools, signal).await?,
                Target::Rec => signal_rec(&tools, signal).await?,
            }
            Ok(())
        }
        Command::Status(cmd) => {
            let running = match cmd.target {
                Target::Sender => is_send_running(&tools).await,
                Target::Rec => is_rec_running(&tools).await,
            };
            if running {
                println!("running");
                Ok(())
            } else {
                println!("not running");
                std::process::exit(1);
            }
        }
        Command::WriteIps(cmd) => {
            let ips = iplist::write_ip_list(&fs, &cmd.addresses, &cmd.file)?;
            println!("wrote {} address(es) to {}", ips.len(), cmd.file.display());
            Ok(())
        }
    }
}

fn load_config(args: &CliArgs) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => Ok(config::load_from_path(path)?),
        None => {
            let path = config::default_config_path();
            if path.exists() {
                info!(path = %path.display(), "using default config file");
                Ok(config::load_from_path(path)?)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

async fn run_send(fs: &RealFileSystem, cfg: ConfigFile, cmd: SendCmd) -> Result<()> {
    let wait = cmd.wait;
    // CLI-provided addresses replace the config's list entirely.
    let ips = if cmd.ips.is_empty() { cfg.ips } else { cmd.ips };

    let options = SenderOptions {
        listen_port: cmd.listen_port.or(cfg.sender.listen_port),
        srtla_host: cmd.host.or(cfg.sender.srtla_host),
        srtla_port: cmd.port.or(cfg.sender.srtla_port),
        ips_file: cmd.ips_file.or(cfg.sender.ips_file),
        verbose: cmd.verbose || cfg.sender.verbose,
        exec_path: cmd.exec_path.or(cfg.sender.exec_path),
    };

    let built = build_send_args(options)?;
    if !ips.is_empty() {
        iplist::write_ip_list(fs, &ips, &built.config.ips_file)?;
    }

    let child = spawn_send(
        fs,
        built.config.exec_path.as_deref(),
        &built.args,
        &SpawnSettings::default(),
    )?;
    finish_spawn("srtla_send", child, wait).await
}

async fn run_rec(fs: &RealFileSystem, cfg: ConfigFile, cmd: RecCmd) -> Result<()> {
    let wait = cmd.wait;
    let options = ReceiverOptions {
        srtla_port: cmd.srtla_port.or(cfg.receiver.srtla_port),
        srt_hostname: cmd.srt_hostname.or(cfg.receiver.srt_hostname),
        srt_port: cmd.srt_port.or(cfg.receiver.srt_port),
        log_level: cmd.rec_log_level.or(cfg.receiver.log_level),
        exec_path: cmd.exec_path.or(cfg.receiver.exec_path),
    };

    let built = build_rec_args(options)?;
    let child = spawn_rec(
        fs,
        built.config.exec_path.as_deref(),
        &built.args,
        &SpawnSettings::default(),
    )?;
    finish_spawn("srtla_rec", child, wait).await
}

/// Either detach (print the pid and return) or wait for the child and
/// propagate a non-success exit as an error.
async fn finish_spawn(name: &str, mut child: Child, wait: bool) -> Result<()> {
    if !wait {
        match child.id() {
            Some(pid) => println!("started {name} (pid {pid})"),
            None => println!("started {name}"),
        }
        return Ok(());
    }

    let status = child.wait().await?;
    if !status.success() {
        bail!("{name} exited with {status}");
    }
    Ok(())
}
