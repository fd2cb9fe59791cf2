//! Ping output dialects and their pattern profiles.
//!
//! Each supported `ping` implementation prints its report in its own format.
//! [`detect`] picks the dialect from a summary signature and [`profile_for`]
//! returns the patterns used to read that dialect.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Summary signature printed by iputils `ping`.
const LINUX_SIGNATURE: &str = "\nrtt min/avg/max/mdev = ";

/// Summary signature printed by busybox `ping`.
const BUSYBOX_SIGNATURE: &str = "\nround-trip min/avg/max = ";

/// Reply source address: dotted IPv4 or an IPv6 literal.
const ADDR: &str = r"(?:\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|[0-9A-Fa-f:]+)";

/// Decimal figure as printed by ping.
const NUM: &str = r"[0-9.]+";

/// Textual report format of a ping implementation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Dialect {
    /// iputils ping, as shipped by most Linux distributions.
    Linux,
    /// busybox ping.
    Busybox,
    /// No known signature found.
    Unknown,
}

/// Identify the dialect of a raw ping report.
///
/// The Linux signature wins when both are present.
pub fn detect(raw: &str) -> Dialect {
    if raw.contains(LINUX_SIGNATURE) {
        Dialect::Linux
    } else if raw.contains(BUSYBOX_SIGNATURE) {
        Dialect::Busybox
    } else {
        Dialect::Unknown
    }
}

/// Compiled patterns for one dialect.
///
/// Capture groups are named so that extraction does not depend on the
/// dialect: `rtt` for per-packet lines, `transmitted`, `received`, `loss`
/// and optionally `elapsed` for the packets line, `min`, `avg`, `max` and
/// optionally `mdev` for the RTT line.
#[derive(Debug)]
pub struct PatternSet {
    pub per_packet: Regex,
    pub packets: Regex,
    pub rtt: Regex,
}

impl PatternSet {
    fn compile(per_packet: &str, packets: &str, rtt: &str) -> Self {
        Self {
            per_packet: Regex::new(per_packet).expect("failed to compile per-packet regex"),
            packets: Regex::new(packets).expect("failed to compile packets regex"),
            rtt: Regex::new(rtt).expect("failed to compile rtt regex"),
        }
    }
}

fn linux_patterns() -> &'static PatternSet {
    static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        PatternSet::compile(
            &format!(
                r"^\d+ bytes from {ADDR}: icmp_seq=\d+ ttl=\d+ time=(?P<rtt>{NUM}) ms$"
            ),
            &format!(
                r"^(?P<transmitted>\d+) packets transmitted, (?P<received>\d+) received, (?:\+\d+ duplicates, )?(?:\+\d+ corrupted, )?(?:\+\d+ errors, )?(?P<loss>{NUM})% packet loss, time (?P<elapsed>\d+)ms$"
            ),
            &format!(
                r"^rtt min/avg/max/mdev = (?P<min>{NUM})/(?P<avg>{NUM})/(?P<max>{NUM})/(?P<mdev>{NUM}) ms(?:, pipe \d+)?(?:, ipg/ewma {NUM}/{NUM} ms)?$"
            ),
        )
    })
}

fn busybox_patterns() -> &'static PatternSet {
    static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

    PATTERNS.get_or_init(|| {
        PatternSet::compile(
            &format!(r"^\d+ bytes from {ADDR}: seq=\d+ ttl=\d+ time=(?P<rtt>{NUM}) ms$"),
            &format!(
                r"^(?P<transmitted>\d+) packets transmitted, (?P<received>\d+) packets received, (?P<loss>{NUM})% packet loss$"
            ),
            &format!(r"^round-trip min/avg/max = (?P<min>{NUM})/(?P<avg>{NUM})/(?P<max>{NUM}) ms$"),
        )
    })
}

/// Patterns and separator for reading one report of a known dialect.
#[derive(Debug, Clone)]
pub struct DialectProfile {
    dialect: Dialect,
    separator: String,
    patterns: &'static PatternSet,
}

impl DialectProfile {
    /// Dialect this profile reads.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Literal text dividing per-packet replies from the summary block.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn patterns(&self) -> &'static PatternSet {
        self.patterns
    }

    /// Whether the dialect prints the RTT standard deviation itself.
    pub fn reports_mdev(&self) -> bool {
        has_group(&self.patterns.rtt, "mdev")
    }

    /// Whether the dialect prints the elapsed time of the run.
    pub fn reports_elapsed(&self) -> bool {
        has_group(&self.patterns.packets, "elapsed")
    }
}

fn has_group(regex: &Regex, name: &str) -> bool {
    regex.capture_names().flatten().any(|n| n == name)
}

/// Build the profile for `dialect` probing `target`.
///
/// `target` is embedded verbatim in the separator since ping echoes it in
/// the statistics header. Returns `None` for [`Dialect::Unknown`].
pub fn profile_for(dialect: Dialect, target: &str) -> Option<DialectProfile> {
    let patterns = match dialect {
        Dialect::Linux => linux_patterns(),
        Dialect::Busybox => busybox_patterns(),
        Dialect::Unknown => return None,
    };

    Some(DialectProfile {
        dialect,
        separator: format!("\n\n--- {target} ping statistics ---\n"),
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_detect_linux() {
        let raw = "PING 8.8.8.8 (8.8.8.8) 56(84) bytes of data.\n\nrtt min/avg/max/mdev = 1/2/3/4 ms";
        assert_eq!(detect(raw), Dialect::Linux);
    }

    #[test]
    fn test_detect_linux_regardless_of_other_content() {
        let raw = "garbage\nround-trip min/avg/max = 1/2/3 ms\nrtt min/avg/max/mdev = 1/2/3/4 ms";
        assert_eq!(detect(raw), Dialect::Linux);
    }

    #[test]
    fn test_detect_busybox() {
        let raw = "PING 8.8.8.8 (8.8.8.8): 56 data bytes\n\nround-trip min/avg/max = 1/2/3 ms";
        assert_eq!(detect(raw), Dialect::Busybox);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect(""), Dialect::Unknown);
        assert_eq!(detect("ping: unknown host nowhere"), Dialect::Unknown);
        // Signature must start a line.
        assert_eq!(detect("rtt min/avg/max/mdev = 1/2/3/4 ms"), Dialect::Unknown);
    }

    #[test]
    fn test_profile_for_unknown_is_none() {
        assert!(profile_for(Dialect::Unknown, "8.8.8.8").is_none());
    }

    #[test]
    fn test_profile_separator_embeds_target_verbatim() {
        let profile = profile_for(Dialect::Linux, " example.com").unwrap();
        assert_eq!(profile.separator(), "\n\n---  example.com ping statistics ---\n");
        assert_eq!(profile.dialect(), Dialect::Linux);
    }

    #[test]
    fn test_profile_capabilities() {
        let linux = profile_for(Dialect::Linux, "h").unwrap();
        assert!(linux.reports_mdev());
        assert!(linux.reports_elapsed());

        let busybox = profile_for(Dialect::Busybox, "h").unwrap();
        assert!(!busybox.reports_mdev());
        assert!(!busybox.reports_elapsed());
    }

    #[test]
    fn test_per_packet_patterns() {
        let linux = linux_patterns();
        let caps = linux
            .per_packet
            .captures("64 bytes from 8.8.8.8: icmp_seq=1 ttl=117 time=10.2 ms")
            .unwrap();
        assert_eq!(&caps["rtt"], "10.2");
        assert!(
            linux
                .per_packet
                .is_match("64 bytes from ::1: icmp_seq=3 ttl=64 time=0.031 ms")
        );
        assert!(
            !linux
                .per_packet
                .is_match("64 bytes from 8.8.8.8: seq=1 ttl=117 time=10.2 ms")
        );

        let busybox = busybox_patterns();
        let caps = busybox
            .per_packet
            .captures("64 bytes from 10.0.0.1: seq=0 ttl=64 time=0.412 ms")
            .unwrap();
        assert_eq!(&caps["rtt"], "0.412");
    }

    #[test]
    fn test_linux_packets_pattern_tolerates_errors_and_duplicates() {
        let linux = linux_patterns();
        let caps = linux
            .packets
            .captures("10 packets transmitted, 7 received, +3 errors, 30% packet loss, time 9012ms")
            .unwrap();
        assert_eq!(&caps["received"], "7");
        assert_eq!(&caps["elapsed"], "9012");
    }

    #[test]
    fn test_linux_packets_pattern_tolerates_corrupted() {
        let caps = linux_patterns()
            .packets
            .captures("8 packets transmitted, 6 received, +1 duplicates, +1 corrupted, +1 errors, 25% packet loss, time 7010ms")
            .unwrap();
        assert_eq!(&caps["transmitted"], "8");
        assert_eq!(&caps["loss"], "25");
    }

    #[test]
    fn test_linux_rtt_pattern_tolerates_pipe_and_ewma() {
        let rtt = &linux_patterns().rtt;
        for line in [
            "rtt min/avg/max/mdev = 0.040/0.045/0.050/0.005 ms, ipg/ewma 0.500/0.042 ms",
            "rtt min/avg/max/mdev = 0.040/0.045/0.050/0.005 ms, pipe 2",
            "rtt min/avg/max/mdev = 0.040/0.045/0.050/0.005 ms, pipe 2, ipg/ewma 0.500/0.042 ms",
        ] {
            let caps = rtt.captures(line).unwrap();
            assert_eq!(&caps["avg"], "0.045");
            assert_eq!(&caps["mdev"], "0.005");
        }
        assert!(!rtt.is_match("rtt min/avg/max/mdev = 1/2/3/4 ms, trailing junk"));
    }

    #[test]
    fn test_dialect_strings() {
        assert_eq!(Dialect::Linux.to_string(), "linux");
        assert_eq!(Dialect::Busybox.as_ref(), "busybox");
        assert_eq!(Dialect::from_str("BusyBox").unwrap(), Dialect::Busybox);
        assert_eq!(
            serde_json::to_string(&Dialect::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
