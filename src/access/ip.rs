//! IPv4 parsing and range membership.

use std::net::Ipv4Addr;

use crate::error::{EngineError, EngineResult};

/// Parses a dotted-quad IPv4 address into its 32-bit integer value.
///
/// The value equals folding the octets as `acc * 256 + octet`. Surrounding
/// whitespace is ignored. Malformed octets are rejected rather than read as
/// zero.
///
/// # Errors
///
/// Returns `InvalidIpAddress` if `ip` is not a valid dotted-quad address.
///
/// # Examples
///
/// ```
/// use timetrack_engine::access::ip_to_int;
///
/// assert_eq!(ip_to_int("192.168.1.100").unwrap(), 3_232_235_876);
/// assert!(ip_to_int("abc.1.1.1").is_err());
/// ```
pub fn ip_to_int(ip: &str) -> EngineResult<u32> {
    let trimmed = ip.trim();
    trimmed
        .parse::<Ipv4Addr>()
        .map(u32::from)
        .map_err(|_| EngineError::InvalidIpAddress {
            input: ip.to_string(),
        })
}

/// Returns true if `ip` lies within the inclusive range `"start-end"`.
///
/// The range is split on its first hyphen and both bounds are trimmed.
/// A missing bound, or any address that fails to parse, yields `false`.
///
/// # Examples
///
/// ```
/// use timetrack_engine::access::in_range;
///
/// assert!(in_range("192.168.1.100", "192.168.1.1-192.168.1.254"));
/// assert!(!in_range("192.168.2.1", "192.168.1.1 - 192.168.1.254"));
/// assert!(!in_range("192.168.1.100", "192.168.1.1-"));
/// ```
pub fn in_range(ip: &str, range_spec: &str) -> bool {
    let Some((start, end)) = range_spec.split_once('-') else {
        return false;
    };
    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() {
        return false;
    }

    match (ip_to_int(ip), ip_to_int(start), ip_to_int(end)) {
        (Ok(x), Ok(lo), Ok(hi)) => lo <= x && x <= hi,
        _ => false,
    }
}
