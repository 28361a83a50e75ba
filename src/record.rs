// Positional access to the flat XSS data block of a nuclear data record

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::error::{DataFormatError, Result};
use crate::interpolation::Interpolation;

/// Types that can be decoded from one word of a record.
///
/// Records store every word as a floating point number; integer fields
/// (counts, breakpoints, law codes) must hold an exact non-negative integer.
pub trait XssValue: Sized {
    fn from_xss(value: f64, index: usize) -> Result<Self>;
}

impl XssValue for f64 {
    #[inline]
    fn from_xss(value: f64, _index: usize) -> Result<Self> {
        Ok(value)
    }
}

impl XssValue for u32 {
    fn from_xss(value: f64, index: usize) -> Result<Self> {
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Ok(value as u32)
        } else {
            Err(DataFormatError::InvalidCount { index, value })
        }
    }
}

impl XssValue for usize {
    fn from_xss(value: f64, index: usize) -> Result<Self> {
        u32::from_xss(value, index).map(|v| v as usize)
    }
}

impl XssValue for Interpolation {
    fn from_xss(value: f64, index: usize) -> Result<Self> {
        Interpolation::try_from(u32::from_xss(value, index)?)
    }
}

/// Read access to a flat, positionally addressed nuclear data block.
///
/// Offsets are zero based. Implementors only provide [`Record::len`] and
/// [`Record::word`]; typed access is layered on top.
pub trait Record {
    /// Number of words in the record.
    fn len(&self) -> usize;

    /// Raw word at `index`, or `None` past the end.
    fn word(&self, index: usize) -> Option<f64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the word at `index` as `T`.
    fn scalar<T: XssValue>(&self, index: usize) -> Result<T> {
        let value = self.word(index).ok_or(DataFormatError::OutOfBounds {
            index,
            len: self.len(),
        })?;
        T::from_xss(value, index)
    }

    /// Decode `count` consecutive words starting at `index`.
    fn sequence<T: XssValue>(&self, index: usize, count: usize) -> Result<Vec<T>> {
        let end = index.checked_add(count).ok_or(DataFormatError::OutOfBounds {
            index: usize::MAX,
            len: self.len(),
        })?;
        if end > self.len() {
            return Err(DataFormatError::OutOfBounds {
                index: end - 1,
                len: self.len(),
            });
        }
        (index..end).map(|i| self.scalar(i)).collect()
    }
}

impl Record for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn word(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl Record for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn word(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

/// In-memory XSS block, e.g. extracted from an ACE file by an external reader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XssArray {
    pub xss: Vec<f64>,
}

impl XssArray {
    pub fn new(xss: Vec<f64>) -> Self {
        Self { xss }
    }

    /// Parse a record from JSON of the form `{"xss": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.xss
    }
}

impl From<Vec<f64>> for XssArray {
    fn from(xss: Vec<f64>) -> Self {
        Self::new(xss)
    }
}

impl Record for XssArray {
    fn len(&self) -> usize {
        self.xss.len()
    }

    fn word(&self, index: usize) -> Option<f64> {
        self.xss.get(index).copied()
    }
}
