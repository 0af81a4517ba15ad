//! Decoding frames into [`CiffRecord`]s and back.

use std::convert::TryFrom;
use std::io::{BufRead, Write};

use protobuf::Message;

use crate::frame::{write_frame, FrameReader};
use crate::model::{CiffRecord, DocRecord, Header, PostingsList};
use crate::proto;
use crate::{Error, Result};

/// How the kind of each frame is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Standard CIFF v1: a header, then exactly as many postings lists and
    /// document records as the header declares, in that order.
    Positional,
    /// Each frame is a `TaggedRecord` envelope naming its kind, so postings
    /// lists and document records may interleave.
    Tagged,
}

impl Default for Framing {
    fn default() -> Self {
        Self::Positional
    }
}

const POSTINGS_LISTS: &str = "postings lists";
const DOCUMENTS: &str = "documents";

#[derive(Clone, Copy)]
struct Declared {
    postings_lists: u32,
    documents: u32,
}

/// Lazy reader of CIFF records.
///
/// The first item is always the header. At the end of the stream the number of
/// postings lists and document records read must match what the header declared.
pub struct RecordReader<R> {
    frames: FrameReader<R>,
    framing: Framing,
    declared: Option<Declared>,
    index: u64,
    postings_lists: u64,
    documents: u64,
    fused: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Reads standard (positional) CIFF.
    pub fn new(reader: R) -> Self {
        Self::with_framing(reader, Framing::Positional)
    }

    /// Reads records in the given framing.
    pub fn with_framing(reader: R, framing: Framing) -> Self {
        Self {
            frames: FrameReader::new(reader),
            framing,
            declared: None,
            index: 0,
            postings_lists: 0,
            documents: 0,
            fused: false,
        }
    }

    /// Byte offset of the underlying frame reader.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.frames.offset()
    }

    fn decode_positional(&self, frame: &[u8]) -> Result<CiffRecord> {
        let declared = match self.declared {
            None => {
                let header = proto::Header::parse_from_bytes(frame)?;
                return Ok(CiffRecord::Header(Header::try_from(header)?));
            }
            Some(declared) => declared,
        };
        if self.postings_lists < u64::from(declared.postings_lists) {
            let list = proto::PostingsList::parse_from_bytes(frame)?;
            Ok(CiffRecord::PostingsList(PostingsList::try_from(list)?))
        } else if self.documents < u64::from(declared.documents) {
            let record = proto::DocRecord::parse_from_bytes(frame)?;
            Ok(CiffRecord::DocRecord(DocRecord::try_from(record)?))
        } else {
            Err(Error::UnknownMessageKind { index: self.index })
        }
    }

    fn decode_tagged(&self, frame: &[u8]) -> Result<CiffRecord> {
        let mut tagged = proto::TaggedRecord::parse_from_bytes(frame)?;
        if tagged.has_header() {
            Ok(CiffRecord::Header(Header::try_from(tagged.take_header())?))
        } else if tagged.has_postings_list() {
            Ok(CiffRecord::PostingsList(PostingsList::try_from(
                tagged.take_postings_list(),
            )?))
        } else if tagged.has_doc_record() {
            Ok(CiffRecord::DocRecord(DocRecord::try_from(
                tagged.take_doc_record(),
            )?))
        } else {
            Err(Error::UnknownMessageKind { index: self.index })
        }
    }

    fn decode(&mut self, frame: &[u8]) -> Result<CiffRecord> {
        let record = match self.framing {
            Framing::Positional => self.decode_positional(frame)?,
            Framing::Tagged => self.decode_tagged(frame)?,
        };
        match (&record, self.declared) {
            (CiffRecord::Header(header), None) => {
                self.declared = Some(Declared {
                    postings_lists: header.num_postings_lists,
                    documents: header.num_docs,
                });
            }
            (CiffRecord::Header(_), Some(_)) => {
                return Err(Error::MisplacedHeader { index: self.index })
            }
            (_, None) => return Err(Error::MissingHeader),
            (CiffRecord::PostingsList(_), Some(_)) => self.postings_lists += 1,
            (CiffRecord::DocRecord(_), Some(_)) => self.documents += 1,
        }
        self.index += 1;
        Ok(record)
    }

    fn check_counts(&self) -> Result<()> {
        let declared = self.declared.ok_or(Error::MissingHeader)?;
        if u64::from(declared.postings_lists) != self.postings_lists {
            return Err(Error::HeaderCountMismatch {
                kind: POSTINGS_LISTS,
                declared: declared.postings_lists,
                actual: self.postings_lists,
            });
        }
        if u64::from(declared.documents) != self.documents {
            return Err(Error::HeaderCountMismatch {
                kind: DOCUMENTS,
                declared: declared.documents,
                actual: self.documents,
            });
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<CiffRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let result = match self.frames.next() {
            None => {
                self.fused = true;
                return self.check_counts().err().map(Err);
            }
            Some(frame) => frame.and_then(|frame| self.decode(&frame)),
        };
        if result.is_err() {
            self.fused = true;
        }
        Some(result)
    }
}

/// Encodes records as a framed CIFF stream.
///
/// The header must come first and only once. In positional framing a postings
/// list may not follow a document record, since a reader could not tell them apart.
pub struct RecordWriter<W> {
    writer: W,
    framing: Framing,
    index: u64,
    seen_documents: bool,
}

impl<W: Write> RecordWriter<W> {
    /// Writes standard (positional) CIFF.
    pub fn new(writer: W) -> Self {
        Self::with_framing(writer, Framing::Positional)
    }

    /// Writes records in the given framing.
    pub fn with_framing(writer: W, framing: Framing) -> Self {
        Self {
            writer,
            framing,
            index: 0,
            seen_documents: false,
        }
    }

    fn check_order(&mut self, record: &CiffRecord) -> Result<()> {
        match record {
            CiffRecord::Header(_) if self.index > 0 => {
                Err(Error::MisplacedHeader { index: self.index })
            }
            CiffRecord::Header(_) => Ok(()),
            _ if self.index == 0 => Err(Error::MissingHeader),
            CiffRecord::PostingsList(_)
                if self.seen_documents && self.framing == Framing::Positional =>
            {
                Err(Error::InterleavedRecords { index: self.index })
            }
            CiffRecord::PostingsList(_) => Ok(()),
            CiffRecord::DocRecord(_) => {
                self.seen_documents = true;
                Ok(())
            }
        }
    }

    fn payload(&self, record: &CiffRecord) -> Result<Vec<u8>> {
        let bytes = match (self.framing, record) {
            (Framing::Positional, CiffRecord::Header(header)) => {
                proto::Header::try_from(header)?.write_to_bytes()?
            }
            (Framing::Positional, CiffRecord::PostingsList(list)) => {
                proto::PostingsList::try_from(list)?.write_to_bytes()?
            }
            (Framing::Positional, CiffRecord::DocRecord(doc)) => {
                proto::DocRecord::try_from(doc)?.write_to_bytes()?
            }
            (Framing::Tagged, record) => {
                let mut tagged = proto::TaggedRecord::default();
                match record {
                    CiffRecord::Header(header) => {
                        tagged.set_header(proto::Header::try_from(header)?);
                    }
                    CiffRecord::PostingsList(list) => {
                        tagged.set_postings_list(proto::PostingsList::try_from(list)?);
                    }
                    CiffRecord::DocRecord(doc) => {
                        tagged.set_doc_record(proto::DocRecord::try_from(doc)?);
                    }
                }
                tagged.write_to_bytes()?
            }
        };
        Ok(bytes)
    }

    /// Encodes and writes one record.
    ///
    /// # Errors
    ///
    /// Fails on an ordering violation, on values the wire format cannot hold,
    /// or on IO errors.
    pub fn write(&mut self, record: &CiffRecord) -> Result<()> {
        self.check_order(record)?;
        let payload = self.payload(record)?;
        write_frame(&mut self.writer, &payload)?;
        self.index += 1;
        Ok(())
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Passes along any IO errors.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Posting;

    fn header(num_postings_lists: u32, num_docs: u32) -> Header {
        Header {
            version: 1,
            num_postings_lists,
            num_docs,
            ..Header::default()
        }
    }

    fn cat() -> PostingsList {
        PostingsList {
            term: "cat".into(),
            df: 2,
            cf: 3,
            postings: vec![
                Posting { docid_delta: 0, tf: 2 },
                Posting { docid_delta: 1, tf: 1 },
            ],
        }
    }

    fn doc(docid: u32, key: &str, length: u32) -> DocRecord {
        DocRecord {
            docid,
            collection_docid: key.into(),
            doclength: length,
        }
    }

    fn encode(framing: Framing, records: &[CiffRecord]) -> Result<Vec<u8>> {
        let mut writer = RecordWriter::with_framing(Vec::new(), framing);
        for record in records {
            writer.write(record)?;
        }
        Ok(writer.into_inner())
    }

    fn decode(framing: Framing, bytes: &[u8]) -> Result<Vec<CiffRecord>> {
        RecordReader::with_framing(bytes, framing).collect()
    }

    #[test]
    fn test_positional_stream() -> Result<()> {
        let records = vec![
            header(1, 2).into(),
            cat().into(),
            doc(0, "docA", 5).into(),
            doc(1, "docB", 3).into(),
        ];
        let bytes = encode(Framing::Positional, &records)?;
        assert_eq!(decode(Framing::Positional, &bytes)?, records);
        Ok(())
    }

    #[test]
    fn test_positional_matches_plain_protobuf_framing() -> Result<()> {
        let bytes = encode(Framing::Positional, &[header(0, 0).into()])?;
        let mut expected = Vec::new();
        let mut encoded = proto::Header::default();
        encoded.set_version(1);
        encoded.write_length_delimited_to_vec(&mut expected)?;
        assert_eq!(bytes, expected);
        Ok(())
    }

    #[test]
    fn test_tagged_stream_may_interleave() -> Result<()> {
        let records = vec![
            header(1, 2).into(),
            doc(0, "docA", 5).into(),
            cat().into(),
            doc(1, "docB", 3).into(),
        ];
        let bytes = encode(Framing::Tagged, &records)?;
        assert_eq!(decode(Framing::Tagged, &bytes)?, records);
        assert!(matches!(
            encode(Framing::Positional, &records),
            Err(Error::InterleavedRecords { index: 2 })
        ));
        Ok(())
    }

    #[test]
    fn test_missing_header() -> Result<()> {
        assert!(matches!(decode(Framing::Positional, &[]), Err(Error::MissingHeader)));
        let mut writer = RecordWriter::with_framing(Vec::new(), Framing::Tagged);
        assert!(matches!(writer.write(&cat().into()), Err(Error::MissingHeader)));

        let mut bytes = encode(Framing::Tagged, &[header(1, 0).into(), cat().into()])?;
        // Drop the header frame.
        let header_len = usize::from(bytes[0]) + 1;
        bytes.drain(..header_len);
        assert!(matches!(decode(Framing::Tagged, &bytes), Err(Error::MissingHeader)));
        Ok(())
    }

    #[test]
    fn test_misplaced_header() -> Result<()> {
        let mut bytes = encode(Framing::Tagged, &[header(0, 0).into()])?;
        let second = bytes.clone();
        bytes.extend(second);
        assert!(matches!(
            decode(Framing::Tagged, &bytes),
            Err(Error::MisplacedHeader { index: 1 })
        ));
        Ok(())
    }

    #[test]
    fn test_unknown_message_kind() -> Result<()> {
        // An envelope carrying an unknown field only.
        let mut bytes = encode(Framing::Tagged, &[header(0, 0).into()])?;
        write_frame(&mut bytes, &[0x20, 0x01])?;
        assert!(matches!(
            decode(Framing::Tagged, &bytes),
            Err(Error::UnknownMessageKind { index: 1 })
        ));

        // A frame past the counts declared by a positional header.
        let mut bytes = encode(
            Framing::Positional,
            &[header(0, 1).into(), doc(0, "docA", 5).into()],
        )?;
        let extra = encode(Framing::Positional, &[header(0, 0).into()])?;
        bytes.extend(extra);
        let result = decode(Framing::Positional, &bytes);
        assert!(matches!(result, Err(Error::UnknownMessageKind { index: 2 })));
        Ok(())
    }

    #[test]
    fn test_header_count_mismatch() -> Result<()> {
        let bytes = encode(Framing::Positional, &[header(1, 2).into(), cat().into()])?;
        assert!(matches!(
            decode(Framing::Positional, &bytes),
            Err(Error::HeaderCountMismatch {
                kind: DOCUMENTS,
                declared: 2,
                actual: 0
            })
        ));

        let bytes = encode(
            Framing::Tagged,
            &[header(2, 0).into(), cat().into()],
        )?;
        assert!(matches!(
            decode(Framing::Tagged, &bytes),
            Err(Error::HeaderCountMismatch {
                kind: POSTINGS_LISTS,
                declared: 2,
                actual: 1
            })
        ));
        Ok(())
    }

    #[test]
    fn test_reader_is_fused_after_error() {
        let mut reader = RecordReader::new(&[0x80_u8][..]);
        assert!(matches!(reader.next(), Some(Err(Error::InvalidVarint { offset: 0 }))));
        assert!(reader.next().is_none());
    }
}
