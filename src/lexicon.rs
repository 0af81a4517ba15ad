//! PISA lexicons (`.termlex`, `.doclex`): string tables addressable by position.
//!
//! Layout, all integers 64-bit little-endian:
//! `[count, offset_0 = 0, offset_1, ..., offset_count, payload bytes...]`,
//! where element `i` spans `offset_i..offset_{i+1}` of the payload bytes.

use std::convert::TryFrom;
use std::io::{self, Write};
use std::iter::FromIterator;

use crate::binary_collection::InvalidFormat;

const WORD: usize = std::mem::size_of::<u64>();

/// An encoded lexicon held in memory.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::{Lexicon, LexiconSlice};
/// # use std::convert::TryFrom;
/// # fn main() -> anyhow::Result<()> {
/// let lexicon: Lexicon = vec!["dog", "cat", "gnu"].into_iter().collect();
/// let mut bytes = Vec::new();
/// lexicon.write(&mut bytes)?;
///
/// let slice = LexiconSlice::try_from(&bytes[..])?;
/// assert_eq!(slice.len(), 3);
/// assert_eq!(slice.get(1), Some(&b"cat"[..]));
/// assert_eq!(slice.get(3), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    data: Vec<u8>,
}

impl<Item: AsRef<[u8]>> FromIterator<Item> for Lexicon {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut offsets = vec![0_u64];
        let mut payloads = Vec::<u8>::new();
        for item in iter {
            payloads.extend_from_slice(item.as_ref());
            offsets.push(payloads.len() as u64);
        }
        let count = (offsets.len() - 1) as u64;
        let mut data = Vec::with_capacity((offsets.len() + 1) * WORD + payloads.len());
        data.extend_from_slice(&count.to_le_bytes());
        for offset in offsets {
            data.extend_from_slice(&offset.to_le_bytes());
        }
        data.extend(payloads);
        Self { data }
    }
}

impl Lexicon {
    /// Borrows the encoded lexicon for lookups.
    #[must_use]
    pub fn as_slice(&self) -> LexiconSlice<'_> {
        LexiconSlice {
            data: &self.data,
            len: word_at(&self.data, 0).unwrap_or(0),
        }
    }

    /// Writes the encoded bytes.
    ///
    /// # Errors
    ///
    /// Passes along any IO errors.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)
    }
}

fn word_at(data: &[u8], position: usize) -> Option<u64> {
    let offset = position.checked_mul(WORD)?;
    let bytes = data.get(offset..offset + WORD)?;
    let mut word = [0_u8; WORD];
    word.copy_from_slice(bytes);
    Some(u64::from_le_bytes(word))
}

/// A borrowed, validated lexicon, typically over a memory-mapped file.
#[derive(Debug, Clone, Copy)]
pub struct LexiconSlice<'a> {
    data: &'a [u8],
    len: u64,
}

impl<'a> TryFrom<&'a [u8]> for LexiconSlice<'a> {
    type Error = InvalidFormat;

    fn try_from(data: &'a [u8]) -> std::result::Result<Self, Self::Error> {
        let len =
            word_at(data, 0).ok_or_else(|| InvalidFormat::new("lexicon is missing its length"))?;
        let last = usize::try_from(len)
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or_else(|| InvalidFormat::new("lexicon length overflows"))?;
        let payload_bytes = word_at(data, last)
            .ok_or_else(|| InvalidFormat::new("lexicon offsets run past the end"))?;
        let header_bytes = (last as u64 + 1) * WORD as u64;
        if header_bytes + payload_bytes != data.len() as u64 {
            return Err(InvalidFormat::new(format!(
                "lexicon payloads take {} bytes but {} are available",
                payload_bytes,
                data.len() as u64 - header_bytes
            )));
        }
        Ok(Self { data, len })
    }
}

impl<'a> LexiconSlice<'a> {
    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Checks if the lexicon is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, or `None` if it is out of bounds or its offsets are corrupt.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<&'a [u8]> {
        if index >= self.len {
            return None;
        }
        let position = usize::try_from(index).ok()?;
        let payloads = (usize::try_from(self.len).ok()? + 2) * WORD;
        let start = usize::try_from(word_at(self.data, position + 1)?).ok()?;
        let end = usize::try_from(word_at(self.data, position + 2)?).ok()?;
        self.data.get(payloads.checked_add(start)?..payloads.checked_add(end)?)
    }

    /// Iterates over all elements.
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let slice = *self;
        (0..self.len).map_while(move |index| slice.get(index))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: [&str; 6] = ["aardvark", "cat", "dog", "gnu", "mouse", "zebra"];

    #[test]
    fn test_layout() {
        let lexicon: Lexicon = vec!["ab", "", "c"].into_iter().collect();
        let mut bytes = Vec::new();
        lexicon.write(&mut bytes).unwrap();
        let expected: Vec<u8> = [3_u64, 0, 2, 2, 3]
            .iter()
            .flat_map(|w| w.to_le_bytes().to_vec())
            .chain(b"abc".iter().copied())
            .collect();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_element_access() {
        let lexicon: Lexicon = WORDS.iter().collect();
        let slice = lexicon.as_slice();
        assert!(!slice.is_empty());
        for (index, word) in WORDS.iter().enumerate() {
            assert_eq!(slice.get(index as u64), Some(word.as_bytes()));
        }
        assert!(slice.get(6).is_none());
        assert_eq!(
            slice.iter().collect::<Vec<_>>(),
            WORDS.iter().map(|w| w.as_bytes()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon: Lexicon = Vec::<String>::new().into_iter().collect();
        let mut bytes = Vec::new();
        lexicon.write(&mut bytes).unwrap();
        let slice = LexiconSlice::try_from(&bytes[..]).unwrap();
        assert!(slice.is_empty());
        assert_eq!(slice.iter().count(), 0);
    }

    #[test]
    fn test_corrupt_lexicon() {
        assert!(LexiconSlice::try_from(&[0_u8; 4][..]).is_err());
        let lexicon: Lexicon = WORDS.iter().collect();
        let mut bytes = Vec::new();
        lexicon.write(&mut bytes).unwrap();
        bytes.pop();
        assert!(LexiconSlice::try_from(&bytes[..]).is_err());
        bytes[0] = 200;
        assert!(LexiconSlice::try_from(&bytes[..]).is_err());
    }
}
