//! Hop-by-hop header classification.
//!
//! Hop-by-hop headers are meaningful only for a single transport connection
//! and must not be forwarded unchanged to the next hop. The set is the fixed
//! eight-name list from RFC 2616 section 13.5.1; headers nominated at runtime
//! via a `Connection` header value are the caller's concern, not this
//! module's.

use http::HeaderName;

/// The connection-scoped header names a proxy strips before forwarding.
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "Connection",
    "Keep-Alive",
    "Proxy-Authenticate",
    "Proxy-Authorization",
    "TE",
    "Trailers",
    "Transfer-Encoding",
    "Upgrade",
];

/// Returns true if the header name is connection-scoped.
///
/// The comparison is an ASCII case-insensitive exact match; surrounding
/// whitespace is not trimmed, so callers must pass a bare token.
///
/// # Example
///
/// ```
/// use micro_proxy::headers::is_hop_by_hop_header;
///
/// assert!(is_hop_by_hop_header("connection"));
/// assert!(is_hop_by_hop_header("Keep-Alive"));
/// assert!(!is_hop_by_hop_header("Content-Type"));
/// ```
pub fn is_hop_by_hop_header(name: &str) -> bool {
    HOP_BY_HOP_HEADERS.iter().any(|header| header.eq_ignore_ascii_case(name))
}

/// [`is_hop_by_hop_header`] for callers already holding a typed [`HeaderName`].
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    is_hop_by_hop_header(name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_every_listed_header() {
        for name in HOP_BY_HOP_HEADERS {
            assert!(is_hop_by_hop_header(name), "{name} should be hop-by-hop");
        }
    }

    #[test]
    fn case_insensitive_both_directions() {
        assert!(is_hop_by_hop_header("connection"));
        assert!(is_hop_by_hop_header("CONNECTION"));
        assert!(is_hop_by_hop_header("keep-alive"));
        assert!(is_hop_by_hop_header("PROXY-authorization"));
        assert!(is_hop_by_hop_header("te"));
        assert!(is_hop_by_hop_header("tRaIlErS"));
    }

    #[test]
    fn end_to_end_headers_pass_through() {
        assert!(!is_hop_by_hop_header("Content-Type"));
        assert!(!is_hop_by_hop_header("Host"));
        assert!(!is_hop_by_hop_header("Authorization"));
        assert!(!is_hop_by_hop_header("Trailer"));
        assert!(!is_hop_by_hop_header(""));
    }

    #[test]
    fn no_whitespace_normalization() {
        assert!(!is_hop_by_hop_header(" Connection"));
        assert!(!is_hop_by_hop_header("Connection "));
    }

    #[test]
    fn typed_header_names() {
        assert!(is_hop_by_hop(&http::header::CONNECTION));
        assert!(is_hop_by_hop(&http::header::TRANSFER_ENCODING));
        assert!(is_hop_by_hop(&http::header::UPGRADE));
        assert!(!is_hop_by_hop(&http::header::CONTENT_TYPE));
    }
}
