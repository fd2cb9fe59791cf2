//! Parser Integration Tests
//!
//! End-to-end parsing of captured iputils and busybox ping output.

use pingstat::parser::{Dialect, ParseError, StatisticsRecord, detect, parse};

const LINUX_OK: &str = include_str!("fixtures/linux_ok.txt");
const LINUX_PARTIAL_LOSS: &str = include_str!("fixtures/linux_partial_loss.txt");
const LINUX_NO_REPLY: &str = include_str!("fixtures/linux_no_reply.txt");
const LINUX_ADAPTIVE: &str = include_str!("fixtures/linux_adaptive.txt");
const LINUX_PIPE: &str = include_str!("fixtures/linux_pipe.txt");
const BUSYBOX_OK: &str = include_str!("fixtures/busybox_ok.txt");
const BUSYBOX_IPV6: &str = include_str!("fixtures/busybox_ipv6.txt");

// =============================================================================
// Linux (iputils)
// =============================================================================

#[test]
fn test_linux_native_mdev() {
    let record = parse(LINUX_OK, "8.8.8.8").unwrap();

    assert_eq!(
        record,
        StatisticsRecord {
            dialect: Dialect::Linux,
            packets_transmitted: Some(5),
            packets_received: Some(5),
            packet_loss_percent: Some(0.0),
            elapsed_ms: Some(4004),
            rtt_min: Some(10.1),
            rtt_avg: Some(15.2),
            rtt_max: Some(20.3),
            // Reported value, not recomputed from the five replies.
            rtt_mdev: Some(3.4),
        }
    );
}

#[test]
fn test_linux_minimal_report() {
    let raw = "... \n\n--- host ping statistics ---\n\
               5 packets transmitted, 5 received, 0% packet loss, time 4004ms\n\
               rtt min/avg/max/mdev = 10.1/15.2/20.3/3.4 ms\n";

    let record = parse(raw, "host").unwrap();
    assert_eq!(record.packets_transmitted, Some(5));
    assert_eq!(record.packets_received, Some(5));
    assert_eq!(record.packet_loss_percent, Some(0.0));
    assert_eq!(record.elapsed_ms, Some(4004));
    assert_eq!(record.rtt_min, Some(10.1));
    assert_eq!(record.rtt_avg, Some(15.2));
    assert_eq!(record.rtt_max, Some(20.3));
    assert_eq!(record.rtt_mdev, Some(3.4));
}

#[test]
fn test_linux_hostname_target_with_loss() {
    let record = parse(LINUX_PARTIAL_LOSS, "example.com").unwrap();

    assert_eq!(record.packets_transmitted, Some(4));
    assert_eq!(record.packets_received, Some(3));
    assert_eq!(record.packet_loss_percent, Some(25.0));
    assert_eq!(record.elapsed_ms, Some(3005));
    assert_eq!(record.rtt_mdev, Some(1.448));
    assert!(record.is_reachable());
}

#[test]
fn test_linux_target_must_match_header() {
    // The header echoes the hostname, not the resolved address.
    let err = parse(LINUX_PARTIAL_LOSS, "93.184.216.34").unwrap_err();
    assert!(matches!(err, ParseError::MalformedReport { .. }));
}

#[test]
fn test_linux_without_any_reply_is_unrecognized() {
    // iputils omits the rtt line when nothing came back.
    assert_eq!(detect(LINUX_NO_REPLY), Dialect::Unknown);
    assert_eq!(
        parse(LINUX_NO_REPLY, "10.255.255.1").unwrap_err(),
        ParseError::UnrecognizedDialect
    );
}

#[test]
fn test_linux_signature_without_separator() {
    let raw = LINUX_OK.replace("--- 8.8.8.8 ping statistics ---", "--- statistik ---");

    let err = parse(&raw, "8.8.8.8").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedReport {
            separator: "\n\n--- 8.8.8.8 ping statistics ---\n".to_string()
        }
    );
}

#[test]
fn test_linux_adaptive_mode_trailer() {
    // `ping -A` appends the inter-packet gap and moving average to the rtt line.
    let record = parse(LINUX_ADAPTIVE, "192.168.1.1").unwrap();

    assert_eq!(record.packets_transmitted, Some(3));
    assert_eq!(record.elapsed_ms, Some(1));
    assert_eq!(record.rtt_min, Some(0.040));
    assert_eq!(record.rtt_avg, Some(0.045));
    assert_eq!(record.rtt_max, Some(0.050));
    assert_eq!(record.rtt_mdev, Some(0.004));
}

#[test]
fn test_linux_pipe_trailer() {
    let record = parse(LINUX_PIPE, "192.168.1.1").unwrap();

    assert_eq!(record.packets_received, Some(4));
    assert_eq!(record.rtt_min, Some(0.98));
    assert_eq!(record.rtt_avg, Some(1.06));
    assert_eq!(record.rtt_max, Some(1.2));
    assert_eq!(record.rtt_mdev, Some(0.085));
}

// =============================================================================
// Busybox
// =============================================================================

#[test]
fn test_busybox_computed_mdev() {
    let record = parse(BUSYBOX_OK, "8.8.8.8").unwrap();

    assert_eq!(
        record,
        StatisticsRecord {
            dialect: Dialect::Busybox,
            packets_transmitted: Some(3),
            packets_received: Some(3),
            packet_loss_percent: Some(0.0),
            elapsed_ms: None,
            rtt_min: Some(12.0),
            rtt_avg: Some(13.0),
            rtt_max: Some(14.0),
            rtt_mdev: Some(0.816),
        }
    );
}

#[test]
fn test_busybox_ipv6_replies() {
    let record = parse(BUSYBOX_IPV6, "::1").unwrap();

    assert_eq!(record.dialect, Dialect::Busybox);
    assert_eq!(record.packets_received, Some(2));
    assert_eq!(record.rtt_mdev, Some(0.01));
}

#[test]
fn test_busybox_without_reply_lines_keeps_mdev_absent() {
    let raw = "PING h (10.0.0.1): 56 data bytes\n\
               \n\
               --- h ping statistics ---\n\
               1 packets transmitted, 1 packets received, 0% packet loss\n\
               round-trip min/avg/max = 1.0/1.0/1.0 ms\n";

    let record = parse(raw, "h").unwrap();
    assert_eq!(record.rtt_avg, Some(1.0));
    assert_eq!(record.rtt_mdev, None);
}

#[test]
fn test_busybox_unreadable_summary_degrades_fields() {
    let raw = BUSYBOX_OK.replace(
        "3 packets transmitted, 3 packets received, 0% packet loss",
        "3 Pakete gesendet, 3 empfangen",
    );

    let record = parse(&raw, "8.8.8.8").unwrap();
    assert_eq!(record.packets_transmitted, None);
    assert_eq!(record.packets_received, None);
    assert_eq!(record.packet_loss_percent, None);
    assert_eq!(record.rtt_min, Some(12.0));
    assert_eq!(record.rtt_mdev, Some(0.816));
}

// =============================================================================
// General
// =============================================================================

#[test]
fn test_unrecognized_output() {
    let err = parse("ping: unknown host nowhere.invalid\n", "nowhere.invalid").unwrap_err();
    assert_eq!(err, ParseError::UnrecognizedDialect);
}

#[test]
fn test_parse_twice_is_equal() {
    for (raw, target) in [(LINUX_OK, "8.8.8.8"), (BUSYBOX_OK, "8.8.8.8")] {
        assert_eq!(parse(raw, target).unwrap(), parse(raw, target).unwrap());
    }
}

#[test]
fn test_parse_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    parse(LINUX_OK, "8.8.8.8")
                } else {
                    parse(BUSYBOX_OK, "8.8.8.8")
                }
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let record = handle.join().unwrap().unwrap();
        let expected = if i % 2 == 0 {
            Dialect::Linux
        } else {
            Dialect::Busybox
        };
        assert_eq!(record.dialect, expected);
    }
}
