#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("trailing backslash")]
    TrailingBackslash,

    #[error("unknown escape character {0:?}")]
    UnknownEscape(char),

    #[error("\\x not followed by a hex digit")]
    MissingHexDigits,

    #[error("octal escape out of range: {0:#o}")]
    OctalOverflow(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    #[error("Invalid hex key: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid escaped key at offset {offset}: {reason}")]
    InvalidEscape { offset: usize, reason: EscapeError },

    #[error("Raw key is not valid utf-8: {0}")]
    NonUtf8RawKey(#[from] std::str::Utf8Error),

    #[error("Invalid key range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
