//! IP address and CIDR classification.
//!
//! Addresses follow the strict `std::net` grammar: no leading zeros in IPv4
//! octets and no IPv6 zone identifiers, so a scoped literal such as
//! `fe80::1%eth0` is not an IP here even though Go's `netip.ParseAddr`
//! accepts it. CIDR literals must carry an explicit prefix, which is
//! range-checked through `pnet::ipnetwork`.

use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bits(self) -> u8 {
        match self {
            IpFamily::V4 => 32,
            IpFamily::V6 => 128,
        }
    }
}

/// Returns the family of a bare IP literal such as `1.1.1.1` or `::1`.
pub fn classify_ip(s: &str) -> Option<IpFamily> {
    s.parse::<IpAddr>().ok().map(|addr| IpFamily::of(&addr))
}

/// Returns the family of a CIDR literal such as `10.0.0.0/8`.
///
/// Host bits may be set; only the prefix length is range-checked.
pub fn classify_cidr(s: &str) -> Option<IpFamily> {
    parse_cidr(s).map(|net| IpFamily::of(&net.ip()))
}

pub fn is_ip(s: &str) -> bool {
    classify_ip(s).is_some()
}

pub fn is_cidr(s: &str) -> bool {
    classify_cidr(s).is_some()
}

pub fn is_ipv4(s: &str) -> bool {
    classify_ip(s) == Some(IpFamily::V4)
}

pub fn is_ipv4_cidr(s: &str) -> bool {
    classify_cidr(s) == Some(IpFamily::V4)
}

pub fn is_ipv6(s: &str) -> bool {
    classify_ip(s) == Some(IpFamily::V6)
}

pub fn is_ipv6_cidr(s: &str) -> bool {
    classify_cidr(s) == Some(IpFamily::V6)
}

/// Parses "Address/Prefix" notation.
fn parse_cidr(s: &str) -> Option<IpNetwork> {
    let (ip_str, prefix_str) = s.split_once('/')?;

    let addr: IpAddr = ip_str.parse().ok()?;
    let prefix: u8 = parse_prefix(prefix_str)?;

    IpNetwork::new(addr, prefix).ok()
}

/// Decimal prefix length without sign or leading zeros.
fn parse_prefix(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse::<u8>().ok()
}
