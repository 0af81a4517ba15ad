//! Error types for CIFF and PISA conversions.

use std::io;
use std::path::PathBuf;

use crate::binary_collection::InvalidFormat;

/// Every way a conversion can fail.
///
/// Errors are never downgraded to warnings: any variant aborts the conversion,
/// and no output file is moved into place.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O failure, propagated unchanged.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A frame payload is not a valid protobuf message of the expected kind.
    #[error("Protobuf error: {0}")]
    Protobuf(#[from] protobuf::ProtobufError),

    /// A JSON line could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A PISA binary collection is structurally corrupt.
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormat),

    /// The length prefix of a frame is unterminated or exceeds 32 bits.
    #[error("Invalid varint length prefix at byte offset {offset}")]
    InvalidVarint {
        /// Byte offset of the first byte of the prefix.
        offset: u64,
    },

    /// The stream ends before the declared frame length.
    #[error("Truncated frame at byte offset {offset}: expected {expected} bytes, found {available}")]
    TruncatedFrame {
        /// Byte offset of the first payload byte.
        offset: u64,
        /// Length declared by the prefix.
        expected: u64,
        /// Bytes actually left in the stream.
        available: u64,
    },

    /// A frame cannot be mapped to a header, postings list, or document record.
    #[error("Frame {index} does not match any CIFF message kind")]
    UnknownMessageKind {
        /// Zero-based frame index.
        index: u64,
    },

    /// The stream is empty or its first record is not a header.
    #[error("CIFF stream must start with a header")]
    MissingHeader,

    /// A header appears after the first record.
    #[error("Unexpected header at record {index}")]
    MisplacedHeader {
        /// Zero-based record index.
        index: u64,
    },

    /// A postings list follows document records, which positional framing cannot express.
    #[error("Postings list at record {index} follows document records and cannot be framed positionally")]
    InterleavedRecords {
        /// Zero-based record index.
        index: u64,
    },

    /// The header's declared counts disagree with the stream contents.
    #[error("Header declares {declared} {kind} but the stream contains {actual}")]
    HeaderCountMismatch {
        /// Which count: postings lists or documents.
        kind: &'static str,
        /// Count declared by the header.
        declared: u32,
        /// Count found in the stream.
        actual: u64,
    },

    /// Document records are not contiguous and zero-based.
    #[error("Document records must come in order: expected docid {expected}, found {found}")]
    OutOfOrderDocument {
        /// The next docid in sequence.
        expected: u32,
        /// The docid actually found.
        found: u32,
    },

    /// `.docs`, `.freqs`, `.sizes` and `.terms` do not describe the same index.
    #[error("PISA layout mismatch: {0}")]
    LayoutMismatch(String),

    /// `.sizes` and `.documents` disagree on the number of documents.
    #[error("Sizes declare {declared} documents but the documents file has {actual} lines")]
    LengthCountMismatch {
        /// Document count stored in `.sizes`.
        declared: u32,
        /// Number of lines in `.documents`.
        actual: u64,
    },

    /// The last line of a text file is not terminated by a newline.
    #[error("Line {line} is not terminated by a newline")]
    MissingNewline {
        /// Zero-based line number.
        line: u64,
    },

    /// A record carries a value that cannot be represented in the target format.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A PISA basename has no file name component.
    #[error("Invalid PISA basename: {}", .0.display())]
    InvalidPath(PathBuf),

    /// A converter was run without a required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_record<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRecord(msg.into())
    }

    pub(crate) fn layout_mismatch<S: Into<String>>(msg: S) -> Self {
        Self::LayoutMismatch(msg.into())
    }
}
