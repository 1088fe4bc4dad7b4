use url::Url;

/// Checks whether `s` is an absolute URL with a scheme and a non-empty host.
///
/// Bare hostnames and IP literals (`example.com`, `1.1.1.1`) have no scheme
/// and are rejected, as are scheme-only forms like `mailto:someone`. Any
/// whitespace or control character rejects the input, since the parser
/// would otherwise strip or drop it silently.
pub fn is_url(s: &str) -> bool {
    if s.chars().any(|c| c.is_ascii_whitespace() || c.is_ascii_control()) {
        return false;
    }
    match Url::parse(s) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
