//! # Validators
//!
//! Total predicates over textual input. Every function here answers `false`
//! for malformed input and never returns an error.
//!
//! * **Domain**: a deliberately weak syntactic heuristic (see [`domain`]).
//! * **IP / CIDR**: family-aware address and prefix parsing (see [`ip`]).
//! * **URL**: absolute URLs with a scheme and a host (see [`url`]).

pub mod domain;
pub mod ip;
pub mod url;

pub use domain::{DomainCandidate, is_domain};
pub use ip::{
    IpFamily, classify_cidr, classify_ip, is_cidr, is_ip, is_ipv4, is_ipv4_cidr, is_ipv6,
    is_ipv6_cidr,
};
pub use url::is_url;
