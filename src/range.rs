use std::{cmp::Ordering, fmt::Display};

use bytes::Bytes;

use crate::{
    error::{Error, Result},
    options::Options,
    utils::comparators::compare_end_key,
};

/// A half-open range of keys, `[start, end)`.
///
/// An empty `end` means the range has no upper bound, an empty `start` means it
/// begins at the smallest key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyRange {
    start: Bytes,
    end: Bytes,
}

impl KeyRange {
    pub fn new(start: impl Into<Bytes>, end: impl Into<Bytes>) -> Result<Self> {
        let (start, end) = (start.into(), end.into());

        if !end.is_empty() && start > end {
            tracing::debug!("invalid key range: start {:?}, end {:?}", start, end);
            return Err(Error::InvalidRange {
                start: hex::encode(&start),
                end: hex::encode(&end),
            });
        }

        Ok(Self { start, end })
    }

    /// The range covering every key.
    pub fn full() -> Self {
        Self::default()
    }

    /// Parses both bounds with the key format from `opts`.
    pub fn parse(opts: &Options, start: &str, end: &str) -> Result<Self> {
        Self::new(opts.parse_key(start)?, opts.parse_key(end)?)
    }

    pub fn start(&self) -> &[u8] {
        &self.start
    }

    pub fn end(&self) -> &[u8] {
        &self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.end.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_unbounded() && self.start == self.end
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        key >= &self.start[..] && (self.is_unbounded() || key < &self.end[..])
    }

    /// Returns the overlap of two ranges, or `None` if they do not overlap.
    pub fn intersect(&self, other: &KeyRange) -> Option<KeyRange> {
        let start = self.start.clone().max(other.start.clone());
        let end = match compare_end_key(&self.end, &other.end) {
            Ordering::Greater => other.end.clone(),
            _ => self.end.clone(),
        };

        if !end.is_empty() && start >= end {
            return None;
        }
        Some(KeyRange { start, end })
    }
}

impl Display for KeyRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{}, +inf)", hex::encode(&self.start))
        } else {
            write!(f, "[{}, {})", hex::encode(&self.start), hex::encode(&self.end))
        }
    }
}
