//! Varint length-delimited framing, the outer layer of every CIFF file.
//!
//! A frame is a base-128 varint holding the payload length, followed by exactly
//! that many payload bytes. Lengths are limited to 32 bits, so a prefix has at
//! most 5 bytes.

use std::convert::TryFrom;
use std::io::{self, BufRead, Read, Seek, SeekFrom, Write};

use protobuf::error::WireError;
use protobuf::{CodedInputStream, CodedOutputStream, ProtobufError};

use crate::{Error, Result};

const MAX_VARINT32_BYTES: u64 = 5;

fn stream_error(err: ProtobufError) -> Error {
    match err {
        ProtobufError::IoError(err) => Error::Io(err),
        other => Error::Protobuf(other),
    }
}

/// Encodes `value` as a base-128 varint (low groups first, high bit = continuation).
///
/// # Examples
///
/// ```
/// # use ciff_pisa::encode_varint;
/// # fn main() -> ciff_pisa::Result<()> {
/// let mut buf = Vec::new();
/// encode_varint(&mut buf, 300)?;
/// assert_eq!(buf, [0b1010_1100_u8, 0b0000_0010]);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Passes along any IO errors.
pub fn encode_varint<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    let mut out = CodedOutputStream::new(writer);
    out.write_raw_varint32(value)?;
    out.flush()?;
    Ok(())
}

/// Writes `payload` as one frame.
///
/// # Errors
///
/// Fails if the payload is longer than `u32::MAX` bytes or if writing fails.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        Error::invalid_record(format!("frame of {} bytes exceeds 32-bit length", payload.len()))
    })?;
    let mut out = CodedOutputStream::new(writer);
    out.write_raw_varint32(len)?;
    out.write_raw_bytes(payload)?;
    out.flush()?;
    Ok(())
}

/// Lazy reader of raw frames.
///
/// Reading stops cleanly at the end of input if no byte of a new prefix has been
/// read. Any error fuses the iterator.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::{write_frame, FrameReader};
/// # fn main() -> ciff_pisa::Result<()> {
/// let mut buf = Vec::new();
/// write_frame(&mut buf, b"cat")?;
/// write_frame(&mut buf, b"")?;
/// let frames = FrameReader::new(&buf[..]).collect::<ciff_pisa::Result<Vec<_>>>()?;
/// assert_eq!(frames, vec![b"cat".to_vec(), vec![]]);
/// # Ok(())
/// # }
/// ```
pub struct FrameReader<R> {
    reader: R,
    offset: u64,
    fused: bool,
}

impl<R: BufRead> FrameReader<R> {
    /// Wraps a buffered byte source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            fused: false,
        }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns `None` at a clean end of input.
    fn read_length(&mut self) -> Result<Option<u32>> {
        let start = self.offset;
        let mut input = CodedInputStream::from_buffered_reader(&mut self.reader);
        if input.eof().map_err(stream_error)? {
            return Ok(None);
        }
        let length = match input.read_raw_varint64() {
            Ok(length) => length,
            Err(ProtobufError::WireError(WireError::IncorrectVarint))
            | Err(ProtobufError::WireError(WireError::UnexpectedEof)) => {
                return Err(Error::InvalidVarint { offset: start })
            }
            Err(err) => return Err(stream_error(err)),
        };
        if input.pos() > MAX_VARINT32_BYTES {
            return Err(Error::InvalidVarint { offset: start });
        }
        self.offset += input.pos();
        u32::try_from(length)
            .map(Some)
            .map_err(|_| Error::InvalidVarint { offset: start })
    }

    fn read_frame(&mut self) -> Result<Option<Vec<u8>>> {
        let length = match self.read_length()? {
            Some(length) => length,
            None => return Ok(None),
        };
        let offset = self.offset;
        let mut payload = (&mut self.reader).take(u64::from(length));
        let result = CodedInputStream::from_buffered_reader(&mut payload).read_raw_bytes(length);
        let available = u64::from(length) - payload.limit();
        self.offset += available;
        match result {
            Ok(bytes) => Ok(Some(bytes)),
            Err(ProtobufError::IoError(err)) if err.kind() != io::ErrorKind::UnexpectedEof => {
                Err(Error::Io(err))
            }
            Err(_) if available < u64::from(length) => Err(Error::TruncatedFrame {
                offset,
                expected: u64::from(length),
                available,
            }),
            Err(err) => Err(stream_error(err)),
        }
    }
}

impl<R: BufRead + Seek> FrameReader<R> {
    /// Restarts reading from the beginning of the source.
    ///
    /// # Errors
    ///
    /// Passes along any IO errors.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.offset = 0;
        self.fused = false;
        Ok(())
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.read_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.fused = true;
                None
            }
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::proto;
    use protobuf::Message;
    use quickcheck_macros::quickcheck;
    use std::io::Cursor;

    fn frames(bytes: &[u8]) -> Vec<Result<Vec<u8>>> {
        FrameReader::new(bytes).collect()
    }

    #[test]
    fn test_empty_input_ends_cleanly() {
        assert!(frames(&[]).is_empty());
    }

    #[test]
    fn test_read_frames() -> Result<()> {
        let mut buf = Vec::new();
        write_frame(&mut buf, &[7; 200])?;
        write_frame(&mut buf, b"dog")?;
        assert_eq!(&buf[..2], &[200_u8, 1]);
        let mut reader = FrameReader::new(&buf[..]);
        assert_eq!(reader.next().unwrap()?, vec![7; 200]);
        assert_eq!(reader.offset(), 202);
        assert_eq!(reader.next().unwrap()?, b"dog".to_vec());
        assert!(reader.next().is_none());
        Ok(())
    }

    #[test]
    fn test_truncated_frame() {
        let result = frames(&[5, b'a', b'b']);
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(Error::TruncatedFrame {
                offset,
                expected,
                available,
            }) => {
                assert_eq!((*offset, *expected, *available), (1, 5, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_varint() {
        let result = frames(&[3, b'a', b'b', b'c', 0x80, 0x80]);
        assert_eq!(result.len(), 2);
        assert!(result[0].is_ok());
        assert!(matches!(result[1], Err(Error::InvalidVarint { offset: 4 })));
    }

    #[test]
    fn test_varint_overflow() {
        // u32::MAX is the largest length that fits.
        let mut max = Vec::new();
        encode_varint(&mut max, u32::MAX).unwrap();
        assert_eq!(max, [0xFF_u8, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert!(matches!(
            frames(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F])[0],
            Err(Error::InvalidVarint { offset: 0 })
        ));
        assert!(matches!(
            frames(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00])[0],
            Err(Error::InvalidVarint { offset: 0 })
        ));
    }

    #[test]
    fn test_huge_length_is_truncated() {
        let result = frames(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 1, 2]);
        assert!(matches!(
            result[0],
            Err(Error::TruncatedFrame {
                expected: 0xFFFF_FFFF,
                available: 2,
                ..
            })
        ));
    }

    fn doc_record(docid: i32, key: &str) -> proto::DocRecord {
        let mut record = proto::DocRecord::default();
        record.set_docid(docid);
        record.set_collection_docid(key.to_string());
        record.set_doclength(3);
        record
    }

    #[test]
    fn test_reads_length_delimited_messages() -> Result<()> {
        let records = vec![doc_record(0, "docA"), doc_record(300, &"x".repeat(200))];
        let mut buf = Vec::new();
        for record in &records {
            record.write_length_delimited_to_vec(&mut buf)?;
        }
        let decoded = FrameReader::new(&buf[..])
            .map(|frame| -> Result<proto::DocRecord> {
                Ok(proto::DocRecord::parse_from_bytes(&frame?)?)
            })
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(decoded, records);
        Ok(())
    }

    #[test]
    fn test_written_frames_are_length_delimited_messages() -> Result<()> {
        let record = doc_record(7, "docB");
        let mut buf = Vec::new();
        write_frame(&mut buf, &record.write_to_bytes()?)?;
        encode_varint(&mut buf, 0)?;
        let mut input = CodedInputStream::from_bytes(&buf);
        assert_eq!(input.read_message::<proto::DocRecord>()?, record);
        assert_eq!(input.read_raw_varint32()?, 0);
        assert!(input.eof()?);
        Ok(())
    }

    #[test]
    fn test_rewind() -> Result<()> {
        let mut buf = Vec::new();
        write_frame(&mut buf, b"a")?;
        write_frame(&mut buf, b"bc")?;
        let mut reader = FrameReader::new(Cursor::new(buf));
        let first: Vec<_> = reader.by_ref().collect::<Result<_>>()?;
        assert!(reader.next().is_none());
        reader.rewind()?;
        let second: Vec<_> = reader.collect::<Result<_>>()?;
        assert_eq!(first, second);
        Ok(())
    }

    #[quickcheck]
    fn varint_length_survives_framing(payloads: Vec<Vec<u8>>) -> bool {
        let mut buf = Vec::new();
        for payload in &payloads {
            write_frame(&mut buf, payload).unwrap();
        }
        let decoded: Vec<_> = FrameReader::new(&buf[..]).map(|f| f.unwrap()).collect();
        decoded == payloads
    }
}
