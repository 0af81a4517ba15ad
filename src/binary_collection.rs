use std::borrow::Borrow;
use std::convert::TryFrom;
use std::convert::TryInto;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

const ELEMENT_SIZE: usize = std::mem::size_of::<u32>();

/// Format marker stored as the single element of the first `.docs` sequence's length.
pub const DOCS_FORMAT_MARKER: u32 = 1;

/// Error raised when the bytes cannot be properly parsed into the collection format.
#[derive(Debug, Default)]
pub struct InvalidFormat(Option<String>);

impl InvalidFormat {
    /// Constructs an error with a message.
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self(Some(msg.into()))
    }
}

impl Error for InvalidFormat {}

impl fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid binary collection format")?;
        if let Some(msg) = &self.0 {
            write!(f, ": {}", msg)?;
        }
        Ok(())
    }
}

/// Encodes a length followed by a sequence of 4-byte unsigned integers into `writer`.
///
/// Every integer is written **little-endian**, regardless of the target; this is the
/// byte order PISA reads its uncompressed collections in.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::encode_u32_sequence;
/// # fn main() -> anyhow::Result<()> {
/// let mut buf: Vec<u8> = vec![];
/// let input = vec![4_u32, 98765];
/// encode_u32_sequence(&mut buf, 2, input)?;
///
/// assert_eq!(buf, &[
///     2_u8, 0, 0, 0,  // Sequence length
///     4, 0, 0, 0,     // First element
///     205, 129, 1, 0, // Second element
///     ]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Passes along any IO errors.
pub fn encode_u32_sequence<N, S, W>(writer: &mut W, len: u32, sequence: S) -> io::Result<()>
where
    N: Borrow<u32>,
    S: IntoIterator<Item = N>,
    W: Write,
{
    writer.write_all(&len.to_le_bytes())?;
    for element in sequence {
        writer.write_all(&element.borrow().to_le_bytes())?;
    }
    Ok(())
}

/// A series of sequences, each a 4-byte length followed by this many 4-byte values.
///
/// This is the layout of PISA's `.docs`, `.freqs`, and `.sizes` files.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::{encode_u32_sequence, BinaryCollection, InvalidFormat};
/// # use std::convert::TryFrom;
/// # fn main() -> Result<(), anyhow::Error> {
/// let mut buffer: Vec<u8> = Vec::new();
/// encode_u32_sequence(&mut buffer, 3, &[1, 2, 3])?;
/// encode_u32_sequence(&mut buffer, 1, &[4])?;
///
/// let collection = BinaryCollection::try_from(&buffer[..])?;
/// let elements: Result<Vec<_>, InvalidFormat> = collection
///     .map(|sequence| Ok(sequence?.iter().collect::<Vec<_>>()))
///     .collect();
/// assert_eq!(elements?, vec![vec![1_u32, 2, 3], vec![4]]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Default)]
pub struct BinaryCollection<'a> {
    bytes: &'a [u8],
}

impl<'a> TryFrom<&'a [u8]> for BinaryCollection<'a> {
    type Error = InvalidFormat;
    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        if bytes.len() % ELEMENT_SIZE == 0 {
            Ok(Self { bytes })
        } else {
            Err(InvalidFormat::new(format!(
                "byte length {} is not divisible by the element size ({})",
                bytes.len(),
                ELEMENT_SIZE
            )))
        }
    }
}

impl<'a> BinaryCollection<'a> {
    /// Returns `true` if all sequences have been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.bytes.is_empty()
    }

    fn next_sequence(&mut self) -> Result<BinarySequence<'a>, InvalidFormat> {
        let (length_bytes, rest) = self.bytes.split_at(ELEMENT_SIZE.min(self.bytes.len()));
        let length = length_bytes
            .try_into()
            .map(|bytes: [u8; ELEMENT_SIZE]| u32::from_le_bytes(bytes) as usize)
            .map_err(|_| InvalidFormat::new("missing sequence length"))?;
        let bytes = length
            .checked_mul(ELEMENT_SIZE)
            .and_then(|byte_len| rest.get(..byte_len))
            .ok_or_else(|| {
                InvalidFormat::new(format!(
                    "sequence of length {} runs past the end of the collection",
                    length
                ))
            })?;
        self.bytes = &rest[bytes.len()..];
        Ok(BinarySequence { bytes })
    }
}

impl<'a> Iterator for BinaryCollection<'a> {
    type Item = Result<BinarySequence<'a>, InvalidFormat>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            None
        } else {
            let sequence = self.next_sequence();
            if sequence.is_err() {
                self.bytes = &[];
            }
            Some(sequence)
        }
    }
}

/// A single binary sequence, **excluding** its length prefix.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::BinarySequence;
/// # use std::convert::TryFrom;
/// # fn main() -> Result<(), ciff_pisa::InvalidFormat> {
/// let bytes: [u8; 8] = [1, 0, 0, 0, 2, 0, 0, 0];
/// let sequence = BinarySequence::try_from(&bytes[..])?;
/// assert_eq!(sequence.len(), 2);
/// assert_eq!(sequence.get(1), Some(2));
/// assert_eq!(sequence.iter().collect::<Vec<_>>(), vec![1_u32, 2]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy)]
pub struct BinarySequence<'a> {
    bytes: &'a [u8],
}

impl<'a> TryFrom<&'a [u8]> for BinarySequence<'a> {
    type Error = InvalidFormat;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        if bytes.len() % ELEMENT_SIZE == 0 {
            Ok(Self { bytes })
        } else {
            Err(InvalidFormat::new("sequence bytes are not divisible by 4"))
        }
    }
}

fn decode(bytes: &[u8]) -> u32 {
    let mut value = [0_u8; ELEMENT_SIZE];
    value.copy_from_slice(bytes);
    u32::from_le_bytes(value)
}

impl<'a> BinarySequence<'a> {
    /// Returns the number of elements in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / ELEMENT_SIZE
    }

    /// Checks if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `index`-th element of the sequence or `None` if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        let offset = index.checked_mul(ELEMENT_SIZE)?;
        self.bytes.get(offset..offset + ELEMENT_SIZE).map(decode)
    }

    /// An iterator over all sequence elements.
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        self.bytes.chunks_exact(ELEMENT_SIZE).map(decode)
    }

    /// Returns the byte slice of the sequence. This **does not** include the length.
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Contents of a `.sizes` file: the document count followed by one length per document.
pub struct DocumentSizes<'a> {
    lengths: BinarySequence<'a>,
}

impl<'a> TryFrom<&'a [u8]> for DocumentSizes<'a> {
    type Error = InvalidFormat;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let mut collection = BinaryCollection::try_from(bytes)?;
        let lengths = collection
            .next()
            .ok_or_else(|| InvalidFormat::new("sizes collection is empty"))??;
        if !collection.is_exhausted() {
            return Err(InvalidFormat::new("unexpected data after document sizes"));
        }
        Ok(Self { lengths })
    }
}

impl<'a> DocumentSizes<'a> {
    /// Number of documents.
    #[must_use]
    pub fn num_documents(&self) -> u32 {
        self.lengths.len() as u32
    }

    /// Document lengths, indexed by docid.
    #[must_use]
    pub fn lengths(&self) -> BinarySequence<'a> {
        self.lengths
    }
}

/// Reads the `[1, N]` prefix of a `.docs` collection and returns `N`.
///
/// # Errors
///
/// Fails if the first sequence is missing or is not a single-element sequence.
pub fn read_document_count(documents: &mut BinaryCollection<'_>) -> Result<u32, InvalidFormat> {
    let prefix = documents
        .next()
        .ok_or_else(|| InvalidFormat::new("unable to read document count"))??;
    if prefix.len() as u32 != DOCS_FORMAT_MARKER {
        return Err(InvalidFormat::new(format!(
            "documents collection must start with a single-element sequence, found {} elements",
            prefix.len()
        )));
    }
    prefix
        .get(0)
        .ok_or_else(|| InvalidFormat::new("unable to read document count"))
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn to_bytes(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect()
    }

    #[test]
    fn test_binary_sequence() {
        let bytes = to_bytes(&(0_u32..10).collect::<Vec<_>>());
        let sequence = BinarySequence::try_from(&bytes[..]).unwrap();
        for n in 0..10 {
            assert_eq!(sequence.get(n).unwrap(), n as u32);
        }
        assert_eq!(sequence.get(10), None);
        assert_eq!(sequence.get(usize::MAX), None);
    }

    #[test]
    fn test_collection_length_not_divisible() {
        let bytes = [1_u8, 0, 0];
        assert!(BinaryCollection::try_from(&bytes[..]).is_err());
    }

    #[test]
    fn test_sequence_past_end() {
        let bytes = to_bytes(&[3, 1, 2]);
        let mut collection = BinaryCollection::try_from(&bytes[..]).unwrap();
        let err = collection.next().unwrap().err().unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid binary collection format: sequence of length 3 runs past the end of the collection"
        );
        assert!(collection.next().is_none());
    }

    #[test]
    fn test_document_sizes() {
        let empty_memory = Vec::<u8>::new();
        let sizes = DocumentSizes::try_from(&empty_memory[..]);
        assert_eq!(
            "Invalid binary collection format: sizes collection is empty",
            &format!("{}", sizes.err().unwrap())
        );

        let valid_memory = to_bytes(&[5, 1, 2, 3, 4, 5]);
        let sizes = DocumentSizes::try_from(&valid_memory[..]).unwrap();
        assert_eq!(sizes.num_documents(), 5);
        assert_eq!(sizes.lengths().iter().collect::<Vec<u32>>(), vec![1, 2, 3, 4, 5]);

        let trailing = to_bytes(&[1, 7, 0]);
        assert!(DocumentSizes::try_from(&trailing[..]).is_err());
    }

    #[test]
    fn test_read_document_count() {
        let bytes = to_bytes(&[1, 3, 1, 0]);
        let mut collection = BinaryCollection::try_from(&bytes[..]).unwrap();
        assert_eq!(read_document_count(&mut collection).unwrap(), 3);
        assert_eq!(collection.next().unwrap().unwrap().iter().collect::<Vec<_>>(), vec![0]);

        let bytes = to_bytes(&[2, 3, 4]);
        let mut collection = BinaryCollection::try_from(&bytes[..]).unwrap();
        assert!(read_document_count(&mut collection).is_err());
    }

    #[quickcheck]
    fn binary_collection_never_crashes(bytes: Vec<u8>) {
        let usable = bytes.len() - bytes.len() % 4;
        if let Ok(collection) = BinaryCollection::try_from(&bytes[..usable]) {
            for sequence in collection {
                if let Ok(sequence) = sequence {
                    let _ = sequence.iter().count();
                }
            }
        }
    }
}
