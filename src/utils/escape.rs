use std::fmt::Write;

use crate::error::{EscapeError, Error, Result};

/// Decodes backslash escapes in `text`.
///
/// Recognized escapes are `\a \b \f \n \r \t \v`, `\\ \' \"`, `\x` with one or
/// two hex digits and `\` with one to three octal digits. Everything that is
/// not behind a backslash is copied as is.
pub fn unescape(text: &str) -> Result<Vec<u8>> {
    let input = text.as_bytes();
    let mut buf = Vec::with_capacity(input.len());

    let mut i = 0;
    while i < input.len() {
        let c = input[i];
        if c != b'\\' {
            buf.push(c);
            i += 1;
            continue;
        }

        let offset = i;
        let invalid = |reason| Error::InvalidEscape { offset, reason };

        let Some(&n) = input.get(i + 1) else {
            return Err(invalid(EscapeError::TrailingBackslash));
        };
        i += 2;

        let byte = match n {
            b'a' => 0x07,
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'v' => 0x0B,
            b'\\' | b'\'' | b'"' => n,
            b'x' => {
                let (value, len) = take_digits(&input[i..], 2, 16);
                if len == 0 {
                    return Err(invalid(EscapeError::MissingHexDigits));
                }
                i += len;
                value as u8
            }
            b'0'..=b'7' => {
                // the first digit was already consumed with the escape
                let (value, len) = take_digits(&input[i - 1..], 3, 8);
                i += len - 1;
                u8::try_from(value).map_err(|_| invalid(EscapeError::OctalOverflow(value)))?
            }
            _ => {
                let ch = text[offset + 1..].chars().next().unwrap_or(char::from(n));
                return Err(invalid(EscapeError::UnknownEscape(ch)));
            }
        };
        buf.push(byte);
    }

    Ok(buf)
}

/// Encodes `key` so that [`unescape`] gives it back.
pub fn escape(key: &[u8]) -> String {
    let mut out = String::with_capacity(key.len());
    for &b in key {
        match b {
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            0x0C => out.push_str("\\f"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x0B => out.push_str("\\v"),
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            0x20..=0x7E => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out
}

fn take_digits(input: &[u8], max: usize, radix: u32) -> (u32, usize) {
    input
        .iter()
        .take(max)
        .map_while(|&b| char::from(b).to_digit(radix))
        .fold((0, 0), |(value, len), d| (value * radix + d, len + 1))
}
