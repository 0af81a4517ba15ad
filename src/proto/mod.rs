//! Protobuf messages generated from `proto/common-index-format-v1.proto` by `build.rs`.

#![allow(missing_docs, unused_qualifications, trivial_casts, clippy::all)]

mod common_index_format_v1;
pub use common_index_format_v1::{DocRecord, Header, Posting, PostingsList, TaggedRecord};
