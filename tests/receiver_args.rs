// tests/receiver_args.rs

use std::error::Error;
use std::str::FromStr;

use srtlactl::errors::SrtlactlError;
use srtlactl::receiver::{RecLogLevel, ReceiverOptions, build_rec_args};
use srtlactl_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

/// Unlike the sender, the receiver accepts empty input: every field has a
/// default, and no trailing log-level tokens are emitted.
#[test]
fn applies_defaults() -> TestResult {
    init_tracing();

    let built = build_rec_args(ReceiverOptions::default())?;

    assert_eq!(
        built.args,
        vec![
            "--srtla_port",
            "5000",
            "--srt_hostname",
            "127.0.0.1",
            "--srt_port",
            "4001",
        ]
    );
    assert_eq!(built.config.srtla_port, 5000);
    assert_eq!(built.config.srt_hostname, "127.0.0.1");
    assert_eq!(built.config.srt_port, 4001);
    assert_eq!(built.config.log_level, None);

    Ok(())
}

/// `--log_level <level>` is appended after the three fixed flag pairs.
#[test]
fn includes_log_level_when_set() -> TestResult {
    init_tracing();

    let built = build_rec_args(ReceiverOptions {
        srtla_port: Some(6000),
        srt_hostname: Some("0.0.0.0".to_string()),
        srt_port: Some(6001),
        log_level: Some(RecLogLevel::Debug),
        ..Default::default()
    })?;

    assert_eq!(
        built.args[..6],
        ["--srtla_port", "6000", "--srt_hostname", "0.0.0.0", "--srt_port", "6001"]
    );
    assert_eq!(built.args[6..], ["--log_level", "debug"]);

    Ok(())
}

#[test]
fn omits_log_level_when_not_set() -> TestResult {
    init_tracing();

    let built = build_rec_args(ReceiverOptions {
        srtla_port: Some(5000),
        ..Default::default()
    })?;

    assert!(!built.args.iter().any(|a| a == "--log_level"));

    Ok(())
}

/// Port 0 is outside [1, 65535].
#[test]
fn zero_srtla_port_is_rejected() {
    init_tracing();

    let err = build_rec_args(ReceiverOptions {
        srtla_port: Some(0),
        ..Default::default()
    })
    .unwrap_err();

    match err {
        SrtlactlError::Validation(errors) => {
            assert!(errors.0.iter().any(|e| e.field == "srtla_port"));
        }
        other => panic!("expected Validation error, got: {other}"),
    }
}

#[test]
fn empty_srt_hostname_is_rejected() {
    init_tracing();

    assert!(build_rec_args(ReceiverOptions {
        srt_hostname: Some(String::new()),
        ..Default::default()
    })
    .is_err());
}

/// The receiver binary's level set includes `critical`, which this tool's
/// own tracing levels do not have.
#[test]
fn log_level_round_trips_all_levels() -> TestResult {
    init_tracing();

    for (text, level) in [
        ("trace", RecLogLevel::Trace),
        ("debug", RecLogLevel::Debug),
        ("info", RecLogLevel::Info),
        ("warn", RecLogLevel::Warn),
        ("error", RecLogLevel::Error),
        ("critical", RecLogLevel::Critical),
    ] {
        assert_eq!(RecLogLevel::from_str(text)?, level);
        assert_eq!(level.to_string(), text);
    }
    assert!(RecLogLevel::from_str("fatal").is_err());

    Ok(())
}
