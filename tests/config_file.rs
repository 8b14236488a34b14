// tests/config_file.rs

use std::error::Error;
use std::path::PathBuf;

use srtlactl::config::{ConfigFile, load_from_path};
use srtlactl::errors::SrtlactlError;
use srtlactl::receiver::RecLogLevel;
use srtlactl_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

/// A full config file maps onto the sender/receiver option records; values
/// stay loose (`Option`) here and only get defaulted during validation.
#[test]
fn parses_all_sections() -> TestResult {
    init_tracing();

    let cfg: ConfigFile = toml::from_str(
        r#"
        ips = ["10.0.0.1", "192.168.1.20"]

        [sender]
        listen_port = 9000
        srtla_host = "relay.example.com"
        srtla_port = 8890
        ips_file = "/tmp/custom_ips"
        verbose = true

        [receiver]
        srtla_port = 6000
        srt_hostname = "0.0.0.0"
        srt_port = 6001
        log_level = "debug"
        exec_path = "/opt/srtla"
        "#,
    )?;

    assert_eq!(cfg.ips, vec!["10.0.0.1", "192.168.1.20"]);

    assert_eq!(cfg.sender.listen_port, Some(9000));
    assert_eq!(cfg.sender.srtla_host.as_deref(), Some("relay.example.com"));
    assert_eq!(cfg.sender.srtla_port, Some(8890));
    assert_eq!(cfg.sender.ips_file, Some(PathBuf::from("/tmp/custom_ips")));
    assert!(cfg.sender.verbose);

    assert_eq!(cfg.receiver.srtla_port, Some(6000));
    assert_eq!(cfg.receiver.srt_hostname.as_deref(), Some("0.0.0.0"));
    assert_eq!(cfg.receiver.srt_port, Some(6001));
    assert_eq!(cfg.receiver.log_level, Some(RecLogLevel::Debug));
    assert_eq!(cfg.receiver.exec_path, Some(PathBuf::from("/opt/srtla")));

    Ok(())
}

/// Every section is optional.
#[test]
fn empty_file_yields_empty_options() -> TestResult {
    init_tracing();

    let cfg: ConfigFile = toml::from_str("")?;

    assert!(cfg.ips.is_empty());
    assert_eq!(cfg.sender.srtla_host, None);
    assert_eq!(cfg.sender.listen_port, None);
    assert!(!cfg.sender.verbose);
    assert_eq!(cfg.receiver.srt_port, None);
    assert_eq!(cfg.receiver.log_level, None);

    Ok(())
}

#[test]
fn loads_from_a_file_on_disk() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Srtlactl.toml");
    std::fs::write(&path, "[sender]\nsrtla_host = \"relay.example.com\"\n")?;

    let cfg = load_from_path(&path)?;
    assert_eq!(cfg.sender.srtla_host.as_deref(), Some("relay.example.com"));

    Ok(())
}

#[test]
fn malformed_toml_is_a_toml_error() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Srtlactl.toml");
    std::fs::write(&path, "[sender\n")?;

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, SrtlactlError::Toml(_)));

    Ok(())
}

/// An unknown log level name is rejected at deserialization time.
#[test]
fn unknown_log_level_fails_to_parse() {
    init_tracing();

    let result: Result<ConfigFile, _> = toml::from_str(
        r#"
        [receiver]
        log_level = "fatal"
        "#,
    );
    assert!(result.is_err());
}
