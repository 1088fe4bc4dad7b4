//! Character-literal parsing and byte-level text rewrites.

use regex::bytes::{NoExpand, Regex};

use crate::error::{Error, Result};

/// Parses a single character literal.
///
/// Accepts one plain character (`","`, `"|"`, an actual tab) or one escape
/// sequence: `\t \n \r \0 \a \b \f \v \\ \' \"`, `\xNN` up to `\x7F`, and
/// `\u{NNNN}`.
pub fn parse_char(literal: &str) -> Result<char> {
    let invalid = || Error::InvalidCharLiteral { literal: literal.to_string() };

    let mut chars = literal.chars();
    let first = chars.next().ok_or_else(invalid)?;

    let parsed = if first == '\\' {
        parse_escape(&mut chars).ok_or_else(invalid)?
    } else {
        first
    };

    match chars.next() {
        None => Ok(parsed),
        Some(_) => Err(invalid()),
    }
}

/// UTF-8 encoding of the character literal.
pub fn parse_char_bytes(literal: &str) -> Result<Vec<u8>> {
    let c = parse_char(literal)?;
    let mut buf = [0u8; 4];
    Ok(c.encode_utf8(&mut buf).as_bytes().to_vec())
}

fn parse_escape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    let c = match chars.next()? {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        '0' => '\0',
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'v' => '\x0b',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        'x' => {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() != 2 {
                return None;
            }
            let value = u8::from_str_radix(&hex, 16).ok()?;
            if value > 0x7f {
                return None;
            }
            char::from(value)
        }
        'u' => {
            if chars.next()? != '{' {
                return None;
            }
            let mut hex = String::new();
            loop {
                match chars.next()? {
                    '}' => break,
                    h if h.is_ascii_hexdigit() && hex.len() < 6 => hex.push(h),
                    _ => return None,
                }
            }
            char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
        }
        _ => return None,
    };
    Some(c)
}

/// Replaces every match of `pattern` in `data` with the character `new`.
///
/// `new` is a character literal (see [`parse_char`]) and is inserted verbatim;
/// `$` groups are not expanded.
pub fn replace_delimiter(data: &[u8], pattern: &str, new: &str) -> Result<Vec<u8>> {
    let re = Regex::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let replacement = parse_char_bytes(new)?;
    Ok(re.replace_all(data, NoExpand(&replacement)).into_owned())
}

/// Converts Windows line endings (`\r\n`) to Unix ones (`\n`).
///
/// Lone carriage returns are left alone.
pub fn dos_to_unix(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut iter = data.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char_plain_and_escaped() {
        let cases = [
            ("\t", '\t'),
            ("\n", '\n'),
            ("\r", '\r'),
            (",", ','),
            ("|", '|'),
            ("\\t", '\t'),
            ("\\n", '\n'),
            ("\\\\", '\\'),
            ("\\x2c", ','),
            ("\\u{00e9}", 'é'),
            ("é", 'é'),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_char(input).unwrap(), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_parse_char_rejects_garbage() {
        for input in ["", "ab", "\\", "\\q", "\\x8", "\\xff", "\\u{}", "\\u{110000}", "\\u00e9", "\\tx"] {
            assert!(
                matches!(parse_char(input), Err(Error::InvalidCharLiteral { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_char_bytes() {
        assert_eq!(parse_char_bytes("\t").unwrap(), vec![9]);
        assert_eq!(parse_char_bytes("|").unwrap(), vec![124]);
        assert_eq!(parse_char_bytes("é").unwrap(), vec![0xc3, 0xa9]);
    }

    #[test]
    fn test_replace_delimiter() {
        let out = replace_delimiter(b"a,b,c\n1,2,3\n", ",", "\\t").unwrap();
        assert_eq!(out, b"a\tb\tc\n1\t2\t3\n");

        let out = replace_delimiter(b"a||b|c", r"\|+", "$").unwrap();
        assert_eq!(out, b"a$b$c");
    }

    #[test]
    fn test_replace_delimiter_errors() {
        assert!(matches!(replace_delimiter(b"x", "(", ","), Err(Error::Pattern { .. })));
        assert!(matches!(
            replace_delimiter(b"x", ",", "too long"),
            Err(Error::InvalidCharLiteral { .. })
        ));
    }

    #[test]
    fn test_dos_to_unix() {
        assert_eq!(dos_to_unix(b"a\r\nb\r\n"), b"a\nb\n");
        assert_eq!(dos_to_unix(b"lone\rcr\r"), b"lone\rcr\r");
        assert_eq!(dos_to_unix(b"\r\r\n"), b"\r\n");
        assert_eq!(dos_to_unix(b""), b"");
    }
}
