//! `Host` header validation.
//!
//! A proxy must decide where to open the upstream connection from the raw
//! `Host` header value alone, so the value is held to a strict DNS-style
//! grammar before any of it is trusted: a dot-separated sequence of labels,
//! each one or more alphanumeric-or-hyphen characters that neither starts nor
//! ends with a hyphen, optionally followed by `:<port>`.
//!
//! The matcher is hand-rolled and single-pass rather than a backtracking
//! regex, so validation time stays linear in the input length regardless of
//! how adversarial the input is.
//!
//! IPv4 literals such as `127.0.0.1` fit the label grammar and are accepted
//! like any hostname. Bracketed IPv6 literals (`[::1]`) fall outside the
//! grammar and are rejected.

use tracing::trace;

use crate::ensure;

/// Port assumed when the header carries no explicit `:<port>` suffix.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Maximum length in characters allowed for the hostname part.
const MAX_HOST_LENGTH: usize = 255;

/// A validated `Host` header value, borrowing the hostname from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostHeader<'a> {
    host: &'a str,
    port: u16,
}

impl<'a> HostHeader<'a> {
    /// The validated hostname, without any port suffix.
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// The explicit port, or [`DEFAULT_HTTP_PORT`] if none was given.
    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Parses and validates a raw `Host` header value.
///
/// The whole input must match the hostname grammar with an optional port
/// suffix; no leading or trailing characters are tolerated. Returns `None`
/// when the grammar does not match, the hostname exceeds 255 characters, or
/// the port is outside `1..=65535`. Absence of a result is the only failure
/// signal.
///
/// # Example
///
/// ```
/// use micro_proxy::host::parse_host_header;
///
/// let header = parse_host_header("example.com:8080").unwrap();
/// assert_eq!(header.host(), "example.com");
/// assert_eq!(header.port(), 8080);
///
/// let header = parse_host_header("example.com").unwrap();
/// assert_eq!(header.port(), 80);
///
/// assert!(parse_host_header("example.com:0").is_none());
/// assert!(parse_host_header("[::1]:8080").is_none());
/// ```
pub fn parse_host_header(raw: &str) -> Option<HostHeader<'_>> {
    // The grammar forbids ':' inside the hostname, so the first colon, if
    // any, separates host from port.
    let (host, port_digits) = match raw.split_once(':') {
        Some((host, digits)) => (host, Some(digits)),
        None => (raw, None),
    };

    ensure!(is_valid_hostname(host));
    ensure!(host.len() <= MAX_HOST_LENGTH);

    let port = match port_digits {
        Some(digits) => parse_port(digits)?,
        None => DEFAULT_HTTP_PORT,
    };

    trace!(host, port, "parsed host header");

    Some(HostHeader { host, port })
}

fn parse_port(digits: &str) -> Option<u16> {
    ensure!(!digits.is_empty());
    ensure!(digits.bytes().all(|b| b.is_ascii_digit()));

    // Leading zeros are tolerated ("0080" is port 80); anything above
    // u16::MAX fails the parse and is rejected with it.
    let port = digits.parse::<u16>().ok()?;
    ensure!(port >= 1);

    Some(port)
}

fn is_valid_hostname(host: &str) -> bool {
    !host.is_empty() && host.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
