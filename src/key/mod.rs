use std::{fmt::Display, str::FromStr};

use bytes::Bytes;

use crate::{
    error::{Error, Result},
    utils::escape,
};

/// The textual encodings a key can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyFormat {
    /// The text is the key.
    #[default]
    Raw,

    /// Backslash escapes, e.g. `t\x80\x00\x01`.
    Escaped,

    /// Hexadecimal, two digits per byte.
    Hex,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Raw => "raw",
            KeyFormat::Escaped => "escaped",
            KeyFormat::Hex => "hex",
        }
    }

    pub fn parse(&self, text: &str) -> Result<Bytes> {
        let key = match self {
            KeyFormat::Raw => Bytes::copy_from_slice(text.as_bytes()),
            KeyFormat::Escaped => escape::unescape(text)?.into(),
            KeyFormat::Hex => hex::decode(text)?.into(),
        };
        Ok(key)
    }

    pub fn format(&self, key: &[u8]) -> Result<String> {
        let text = match self {
            KeyFormat::Raw => std::str::from_utf8(key)?.to_owned(),
            KeyFormat::Escaped => escape::escape(key),
            KeyFormat::Hex => hex::encode(key),
        };
        Ok(text)
    }
}

impl FromStr for KeyFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(KeyFormat::Raw),
            "escaped" => Ok(KeyFormat::Escaped),
            "hex" => Ok(KeyFormat::Hex),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

impl Display for KeyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `text` written in `format` (`raw`, `escaped` or `hex`) into key bytes.
pub fn parse_key(format: &str, text: &str) -> Result<Bytes> {
    let format = format.parse::<KeyFormat>().inspect_err(|e| {
        tracing::debug!("parse key: {}", e);
    })?;

    format.parse(text).inspect_err(|e| {
        tracing::debug!("parse {} key {:?} failed: {}", format, text, e);
    })
}

/// Writes `key` in `format`. The inverse of [`parse_key`].
pub fn format_key(format: &str, key: &[u8]) -> Result<String> {
    let format = format.parse::<KeyFormat>().inspect_err(|e| {
        tracing::debug!("format key: {}", e);
    })?;

    format.format(key)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{format_key, parse_key, KeyFormat};
    use crate::error::Error;

    const SAMPLES: [&str; 6] = ["1234", "abcd", "1a2b", "AA", "\x07", "\\'"];

    #[test]
    fn parse_raw() -> anyhow::Result<()> {
        for text in SAMPLES {
            let key = parse_key("raw", text)?;
            assert_eq!(key, text.as_bytes());
        }
        Ok(())
    }

    #[test]
    fn parse_escaped() -> anyhow::Result<()> {
        let cases: [(&str, &[u8]); 5] = [
            ("\\a\\x1", b"\x07\x01"),
            ("\\b\\f", b"\x08\x0C"),
            ("\\n\\r", b"\n\r"),
            ("\\t\\v", b"\t\x0B"),
            ("\\'", b"'"),
        ];

        for (text, expected) in cases {
            let key = parse_key("escaped", text)?;
            assert_eq!(key, expected);
        }
        Ok(())
    }

    #[test]
    fn parse_hex() -> anyhow::Result<()> {
        let keys: Vec<&[u8]> = SAMPLES
            .into_iter()
            .map(str::as_bytes)
            .chain([&b"\x01"[..], &b"\xAA"[..]])
            .collect();

        for key in keys {
            let parsed = parse_key("hex", &hex::encode(key))?;
            assert_eq!(parsed, key);
        }

        assert_eq!(parse_key("hex", "AbCd")?, &b"\xab\xcd"[..]);
        assert!(parse_key("hex", "")?.is_empty());
        Ok(())
    }

    #[test]
    fn parse_bad_hex() {
        assert!(matches!(
            parse_key("hex", "abc"),
            Err(Error::InvalidHex(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            parse_key("hex", "zz"),
            Err(Error::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }))
        ));
    }

    #[test]
    fn parse_unknown_format() {
        for text in SAMPLES {
            let err = parse_key("notSupport", text).unwrap_err();
            assert!(err.to_string().starts_with("unknown format"));
            assert!(err.to_string().contains("notSupport"));
        }

        let err = parse_key("bogus", "x").unwrap_err();
        assert_eq!(err.to_string(), "unknown format 'bogus'");

        // tags are case sensitive
        assert!(matches!(parse_key("HEX", "00"), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn format_tags() -> anyhow::Result<()> {
        for format in [KeyFormat::Raw, KeyFormat::Escaped, KeyFormat::Hex] {
            assert_eq!(format.to_string().parse::<KeyFormat>()?, format);
        }
        assert_eq!(KeyFormat::default(), KeyFormat::Raw);
        Ok(())
    }

    #[test]
    fn format_keys() -> anyhow::Result<()> {
        assert_eq!(format_key("raw", b"abc")?, "abc");
        assert_eq!(format_key("escaped", b"t\x80\x00\x01")?, "t\\x80\\x00\\x01");
        assert_eq!(format_key("hex", b"\x01\xAA")?, "01aa");
        assert!(matches!(format_key("raw", b"\xff"), Err(Error::NonUtf8RawKey(_))));
        assert!(matches!(format_key("base64", b"a"), Err(Error::UnknownFormat(_))));
        Ok(())
    }

    proptest! {
        #[test]
        fn raw_is_identity(text in ".*") {
            prop_assert_eq!(parse_key("raw", &text).unwrap(), text.as_bytes());
        }

        #[test]
        fn hex_round_trip(key in proptest::collection::vec(any::<u8>(), 0..64)) {
            prop_assert_eq!(parse_key("hex", &hex::encode(&key)).unwrap(), key);
        }

        #[test]
        fn format_then_parse(key in proptest::collection::vec(any::<u8>(), 0..64)) {
            for format in ["escaped", "hex"] {
                let text = format_key(format, &key).unwrap();
                prop_assert_eq!(parse_key(format, &text).unwrap(), &key[..]);
            }
        }
    }
}
