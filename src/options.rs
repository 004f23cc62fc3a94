use bytes::Bytes;

use crate::{error::Result, key::KeyFormat};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub(crate) key_format: KeyFormat,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_format(mut self, key_format: KeyFormat) -> Self {
        self.key_format = key_format;
        self
    }

    pub fn key_format(&self) -> KeyFormat {
        self.key_format
    }

    pub fn parse_key(&self, text: &str) -> Result<Bytes> {
        self.key_format.parse(text)
    }

    pub fn format_key(&self, key: &[u8]) -> Result<String> {
        self.key_format.format(key)
    }
}
