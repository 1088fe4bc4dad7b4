//! Syntactic domain-name check.
//!
//! The rule set is intentionally weak and must stay that way: callers depend
//! on exactly which inputs slip through. A stricter check belongs in a new,
//! separately named function.

use std::borrow::Cow;

/// Characters that can never appear in a domain candidate.
pub const RESERVED: &str = "~!@#$%^&*()_+`={}|[]\\:\"<>?,/";

/// A value that may or may not be textual.
///
/// Only textual values can be domains; everything else fails validation.
pub trait DomainCandidate {
    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl DomainCandidate for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl DomainCandidate for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl DomainCandidate for Cow<'_, str> {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: DomainCandidate + ?Sized> DomainCandidate for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: DomainCandidate> DomainCandidate for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(DomainCandidate::as_text)
    }
}

macro_rules! non_textual {
    ($($ty:ty),* $(,)?) => {
        $(impl DomainCandidate for $ty {})*
    };
}

non_textual!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, [u8]
);

/// Checks whether `value` looks like a domain name.
///
/// * Non-textual values are rejected.
/// * Any character from [`RESERVED`] rejects the input.
/// * A single trailing dot (fully-qualified form) is tolerated.
/// * At least two labels are required.
/// * The last label must not parse as an integer, so `1.1.1.1` is rejected.
pub fn is_domain<T: DomainCandidate + ?Sized>(value: &T) -> bool {
    value.as_text().is_some_and(is_domain_str)
}

fn is_domain_str(value: &str) -> bool {
    if value.contains(|c| RESERVED.contains(c)) {
        return false;
    }

    let mut labels: Vec<&str> = value.split('.').collect();
    if labels.last().is_some_and(|last| last.is_empty()) {
        labels.pop();
    }
    if labels.len() < 2 {
        return false;
    }

    match labels.last() {
        Some(tld) => tld.parse::<i64>().is_err(),
        None => false,
    }
}
