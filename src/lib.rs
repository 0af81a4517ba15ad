//! Lossless conversion between the Common Index File Format (CIFF) and PISA's
//! uncompressed inverted index.
//! Refer to [`osirrc/ciff`](https://github.com/osirrc/ciff) on Github
//! for more detailed information about the format.
//!
//! For more information about PISA's internal storage formats, see the
//! [documentation](https://pisa.readthedocs.io/en/latest/index.html).
//!
//! A CIFF file is a sequence of varint-length-prefixed protobuf messages: one
//! [`Header`], then the postings lists, then the document records. A PISA
//! index is five files sharing a basename, see [`PisaIndexPaths`].

#![warn(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::default_trait_access,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::copy_iterator
)]

use std::path::Path;

use indicatif::ProgressStyle;

mod proto;

mod error;
pub use error::{Error, Result};

mod binary_collection;
pub use binary_collection::{
    encode_u32_sequence, read_document_count, BinaryCollection, BinarySequence, DocumentSizes,
    InvalidFormat,
};

mod frame;
pub use frame::{encode_varint, write_frame, FrameReader};

mod model;
pub use model::{
    absolute_from_deltas, deltas_from_absolute, CiffRecord, DocRecord, Header, Posting,
    PostingsList,
};

mod codec;
pub use codec::{Framing, RecordReader, RecordWriter};

mod output;

mod pisa;
pub use pisa::{concat, write_line, Lines, PisaIndexPaths, PostingGroups};

mod lexicon;
pub use lexicon::{Lexicon, LexiconSlice};

mod to_pisa;
pub use to_pisa::CiffToPisa;

mod to_ciff;
pub use to_ciff::PisaToCiff;

mod jsonl;
pub use jsonl::{CiffToJsonl, JsonlToCiff};

const DEFAULT_PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Returns default progress style.
pub(crate) fn pb_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(DEFAULT_PROGRESS_TEMPLATE)
        .progress_chars("=> ")
}

/// Converts a CIFF index stored in `input` to a PISA "binary collection" (uncompressed inverted
/// index) with a basename `output`.
///
/// # Errors
///
/// Returns an error when:
/// - an IO error occurs,
/// - reading protobuf format fails,
/// - data format is valid but any ID, frequency, or a count is negative,
/// - document records are out of order.
pub fn ciff_to_pisa(input: &Path, output: &Path) -> Result<()> {
    CiffToPisa::default()
        .input_path(input)
        .output_paths(output)
        .convert()
}

/// Converts a PISA "binary collection" (uncompressed inverted index) with a basename
/// `collection_input` to a CIFF index stored in `output`.
///
/// # Errors
///
/// Returns an error when:
/// - an IO error occurs,
/// - the binary collection is corrupt or its files disagree with each other,
/// - `titles_input` does not have one line per document,
/// - writing protobuf format fails.
pub fn pisa_to_ciff(
    collection_input: &Path,
    terms_input: &Path,
    titles_input: &Path,
    output: &Path,
    description: &str,
) -> Result<()> {
    PisaToCiff::default()
        .description(description)
        .index_paths(collection_input)
        .terms_path(terms_input)
        .titles_path(titles_input)
        .output_path(output)
        .convert()
}
