// tests/args_property.rs

//! Property tests for the argument builders' numeric formatting.

use proptest::prelude::*;

use srtlactl::receiver::{ReceiverOptions, build_rec_args};
use srtlactl::sender::{SenderOptions, build_send_args};

fn is_plain_decimal(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'))
}

proptest! {
    /// For every valid port pair, the sender vector renders them as base-10
    /// strings with no leading zeros or sign, in positions 0 and 2.
    #[test]
    fn sender_ports_render_as_plain_decimal(
        listen_port in 1u16..=65535,
        srtla_port in 1u16..=65535,
    ) {
        let built = build_send_args(SenderOptions {
            listen_port: Some(listen_port),
            srtla_host: Some("relay.example.com".to_string()),
            srtla_port: Some(srtla_port),
            ..Default::default()
        })
        .expect("valid options must build");

        prop_assert!(is_plain_decimal(&built.args[0]));
        prop_assert!(is_plain_decimal(&built.args[2]));
        prop_assert_eq!(built.args[0].parse::<u16>().unwrap(), listen_port);
        prop_assert_eq!(built.args[2].parse::<u16>().unwrap(), srtla_port);
    }

    /// Same property for the receiver's flag values.
    #[test]
    fn receiver_ports_render_as_plain_decimal(
        srtla_port in 1u16..=65535,
        srt_port in 1u16..=65535,
    ) {
        let built = build_rec_args(ReceiverOptions {
            srtla_port: Some(srtla_port),
            srt_port: Some(srt_port),
            ..Default::default()
        })
        .expect("valid options must build");

        prop_assert!(is_plain_decimal(&built.args[1]));
        prop_assert!(is_plain_decimal(&built.args[5]));
        prop_assert_eq!(built.args[1].parse::<u16>().unwrap(), srtla_port);
        prop_assert_eq!(built.args[5].parse::<u16>().unwrap(), srt_port);
    }
}
