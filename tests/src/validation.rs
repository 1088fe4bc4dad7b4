#![cfg(test)]
use utilkit_common::validate::{
    is_cidr, is_domain, is_ip, is_ipv4, is_ipv4_cidr, is_ipv6, is_ipv6_cidr, is_url,
};

#[test]
fn domains() {
    for ok in ["example.com", "sub.example.co.uk", "example.com.", "xn--bcher-kva.example"] {
        assert!(is_domain(ok), "{ok} should be a domain");
    }
    for bad in ["localhost", "example.123", "exa mple_com", "a/b.com", "", "."] {
        assert!(!is_domain(bad), "{bad} should not be a domain");
    }
    assert!(!is_domain(&42_u32));
    assert!(!is_domain(&None::<&str>));
    assert!(is_domain(&Some("example.org")));
}

#[test]
fn ip_literals() {
    assert!(is_ip("192.168.0.1") && is_ipv4("192.168.0.1") && !is_ipv6("192.168.0.1"));
    assert!(is_ip("::1") && is_ipv6("::1") && !is_ipv4("::1"));
    assert!(!is_ip("256.0.0.1"));
    assert!(!is_ip("10.0.0.0/8"));
}

#[test]
fn cidr_literals() {
    assert!(is_cidr("10.0.0.0/8") && is_ipv4_cidr("10.0.0.0/8") && !is_ipv6_cidr("10.0.0.0/8"));
    assert!(is_ipv6_cidr("2001:db8::/32") && !is_ipv4_cidr("2001:db8::/32"));
    assert!(!is_cidr("10.0.0.0/33"));
    assert!(!is_cidr("10.0.0.1"));
    assert!(!is_cidr("::/129"));
}

#[test]
fn urls() {
    assert!(is_url("https://example.com/path?q=1"));
    assert!(is_url("ftp://files.example.org"));
    assert!(!is_url("example.com"));
    assert!(!is_url("mailto:someone@example.com"));
}
