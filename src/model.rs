//! Typed CIFF records.
//!
//! The protobuf schema stores every count as a signed integer. These types hold
//! the unsigned values a valid index can actually contain, so a negative count
//! or identifier fails at decoding time instead of deep inside a conversion.

use std::convert::TryFrom;
use std::fmt;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::proto;
use crate::{Error, Result};

fn unsigned<N: ToPrimitive + fmt::Display>(value: N, field: &str) -> Result<u32> {
    value.to_u32().ok_or_else(|| {
        Error::invalid_record(format!(
            "{} must be a non-negative 32-bit value: {}",
            field, value
        ))
    })
}

fn unsigned64<N: ToPrimitive + fmt::Display>(value: N, field: &str) -> Result<u64> {
    value
        .to_u64()
        .ok_or_else(|| Error::invalid_record(format!("{} must be non-negative: {}", field, value)))
}

fn signed<N: ToPrimitive + fmt::Display>(value: N, field: &str) -> Result<i32> {
    value
        .to_i32()
        .ok_or_else(|| Error::invalid_record(format!("{} does not fit in int32: {}", field, value)))
}

fn signed64<N: ToPrimitive + fmt::Display>(value: N, field: &str) -> Result<i64> {
    value
        .to_i64()
        .ok_or_else(|| Error::invalid_record(format!("{} does not fit in int64: {}", field, value)))
}

/// Index-level metadata, always the first record of a CIFF stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Format version.
    pub version: i32,
    /// Number of postings lists in this stream.
    pub num_postings_lists: u32,
    /// Number of document records in this stream.
    pub num_docs: u32,
    /// Number of postings lists in the whole index this stream was exported from.
    pub total_postings_lists: u32,
    /// Number of documents in the whole index.
    pub total_docs: u32,
    /// Sum of all document lengths.
    pub total_terms_in_collection: u64,
    /// Average document length.
    pub average_doclength: f64,
    /// Free-text description; empty when absent.
    #[serde(default)]
    pub description: String,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- CIFF HEADER -----")?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "No. Postings Lists: {}", self.num_postings_lists)?;
        writeln!(f, "Total Postings Lists: {}", self.total_postings_lists)?;
        writeln!(f, "No. Documents: {}", self.num_docs)?;
        writeln!(f, "Total Documents: {}", self.total_docs)?;
        writeln!(f, "Total Terms in Collection: {}", self.total_terms_in_collection)?;
        writeln!(f, "Average Document Length: {}", self.average_doclength)?;
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "-----------------------")
    }
}

impl TryFrom<proto::Header> for Header {
    type Error = Error;

    fn try_from(mut header: proto::Header) -> Result<Self> {
        Ok(Self {
            version: header.get_version(),
            num_postings_lists: unsigned(header.get_num_postings_lists(), "num_postings_lists")?,
            num_docs: unsigned(header.get_num_docs(), "num_docs")?,
            total_postings_lists: unsigned(
                header.get_total_postings_lists(),
                "total_postings_lists",
            )?,
            total_docs: unsigned(header.get_total_docs(), "total_docs")?,
            total_terms_in_collection: unsigned64(
                header.get_total_terms_in_collection(),
                "total_terms_in_collection",
            )?,
            average_doclength: header.get_average_doclength(),
            description: header.take_description(),
        })
    }
}

impl TryFrom<&Header> for proto::Header {
    type Error = Error;

    fn try_from(header: &Header) -> Result<Self> {
        let mut encoded = proto::Header::default();
        encoded.set_version(header.version);
        encoded.set_num_postings_lists(signed(header.num_postings_lists, "num_postings_lists")?);
        encoded.set_num_docs(signed(header.num_docs, "num_docs")?);
        encoded.set_total_postings_lists(signed(
            header.total_postings_lists,
            "total_postings_lists",
        )?);
        encoded.set_total_docs(signed(header.total_docs, "total_docs")?);
        encoded.set_total_terms_in_collection(signed64(
            header.total_terms_in_collection,
            "total_terms_in_collection",
        )?);
        encoded.set_average_doclength(header.average_doclength);
        encoded.set_description(header.description.clone());
        Ok(encoded)
    }
}

/// A single posting: the gap to the previous document in the list and the term frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Posting {
    /// Difference to the previous posting's docid; absolute for the first posting.
    pub docid_delta: u32,
    /// Number of occurrences of the term in the document.
    pub tf: u32,
}

/// All postings of one term.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostingsList {
    /// The term.
    pub term: String,
    /// Document frequency, equal to the number of postings.
    pub df: u64,
    /// Collection frequency, the sum of all term frequencies.
    pub cf: u64,
    /// Delta-encoded postings in increasing docid order.
    pub postings: Vec<Posting>,
}

impl PostingsList {
    /// Builds a list from absolute docids and the matching frequencies.
    ///
    /// # Errors
    ///
    /// Fails if the docids are not strictly increasing.
    pub fn from_absolute<D, F>(term: String, docids: D, frequencies: F) -> Result<Self>
    where
        D: IntoIterator<Item = u32>,
        F: IntoIterator<Item = u32>,
    {
        let deltas = deltas_from_absolute(docids)?;
        let postings: Vec<_> = deltas
            .into_iter()
            .zip(frequencies)
            .map(|(docid_delta, tf)| Posting { docid_delta, tf })
            .collect();
        let cf = postings.iter().map(|p| u64::from(p.tf)).sum();
        Ok(Self {
            term,
            df: postings.len() as u64,
            cf,
            postings,
        })
    }

    /// Resolves the deltas to absolute docids.
    ///
    /// # Errors
    ///
    /// Fails if a gap after the first posting is zero or the running sum overflows.
    pub fn absolute_docids(&self) -> Result<Vec<u32>> {
        absolute_from_deltas(self.postings.iter().map(|p| p.docid_delta)).map_err(|err| match err {
            Error::InvalidRecord(msg) => {
                Error::invalid_record(format!("term `{}`: {}", self.term, msg))
            }
            other => other,
        })
    }
}

impl TryFrom<proto::PostingsList> for PostingsList {
    type Error = Error;

    fn try_from(mut list: proto::PostingsList) -> Result<Self> {
        let postings = list
            .get_postings()
            .iter()
            .map(|p| {
                Ok(Posting {
                    docid_delta: unsigned(p.get_docid(), "posting docid")?,
                    tf: unsigned(p.get_tf(), "posting tf")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            df: unsigned64(list.get_df(), "df")?,
            cf: unsigned64(list.get_cf(), "cf")?,
            term: list.take_term(),
            postings,
        })
    }
}

impl TryFrom<&PostingsList> for proto::PostingsList {
    type Error = Error;

    fn try_from(list: &PostingsList) -> Result<Self> {
        let mut encoded = proto::PostingsList::default();
        encoded.set_term(list.term.clone());
        encoded.set_df(signed64(list.df, "df")?);
        encoded.set_cf(signed64(list.cf, "cf")?);
        for posting in &list.postings {
            let mut p = proto::Posting::default();
            p.set_docid(signed(posting.docid_delta, "posting docid")?);
            p.set_tf(signed(posting.tf, "posting tf")?);
            encoded.mut_postings().push(p);
        }
        Ok(encoded)
    }
}

/// Per-document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocRecord {
    /// Internal, zero-based document ID.
    pub docid: u32,
    /// External document identifier.
    pub collection_docid: String,
    /// Number of tokens in the document.
    pub doclength: u32,
}

impl TryFrom<proto::DocRecord> for DocRecord {
    type Error = Error;

    fn try_from(mut record: proto::DocRecord) -> Result<Self> {
        Ok(Self {
            docid: unsigned(record.get_docid(), "docid")?,
            doclength: unsigned(record.get_doclength(), "doclength")?,
            collection_docid: record.take_collection_docid(),
        })
    }
}

impl TryFrom<&DocRecord> for proto::DocRecord {
    type Error = Error;

    fn try_from(record: &DocRecord) -> Result<Self> {
        let mut encoded = proto::DocRecord::default();
        encoded.set_docid(signed(record.docid, "docid")?);
        encoded.set_collection_docid(record.collection_docid.clone());
        encoded.set_doclength(signed(record.doclength, "doclength")?);
        Ok(encoded)
    }
}

/// Any record of a CIFF stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CiffRecord {
    /// Index header.
    Header(Header),
    /// Postings of one term.
    PostingsList(PostingsList),
    /// One document's metadata.
    DocRecord(DocRecord),
}

impl From<Header> for CiffRecord {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}

impl From<PostingsList> for CiffRecord {
    fn from(list: PostingsList) -> Self {
        Self::PostingsList(list)
    }
}

impl From<DocRecord> for CiffRecord {
    fn from(record: DocRecord) -> Self {
        Self::DocRecord(record)
    }
}

/// Turns gaps into absolute docids. The first gap is taken as absolute.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::absolute_from_deltas;
/// # fn main() -> ciff_pisa::Result<()> {
/// assert_eq!(absolute_from_deltas(vec![3, 1, 4])?, vec![3, 4, 8]);
/// assert!(absolute_from_deltas(vec![3, 0]).is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails if any gap but the first is zero, or if a docid overflows `u32`.
pub fn absolute_from_deltas<I: IntoIterator<Item = u32>>(deltas: I) -> Result<Vec<u32>> {
    let mut docids = Vec::new();
    let mut previous: Option<u32> = None;
    for delta in deltas {
        let docid = match previous {
            None => delta,
            Some(_) if delta == 0 => {
                return Err(Error::invalid_record(format!(
                    "zero docid gap at posting {}",
                    docids.len()
                )))
            }
            Some(prev) => prev.checked_add(delta).ok_or_else(|| {
                Error::invalid_record(format!("docid overflow at posting {}", docids.len()))
            })?,
        };
        docids.push(docid);
        previous = Some(docid);
    }
    Ok(docids)
}

/// Turns strictly increasing absolute docids into gaps; the inverse of [`absolute_from_deltas`].
///
/// # Errors
///
/// Fails if the docids are not strictly increasing.
pub fn deltas_from_absolute<I: IntoIterator<Item = u32>>(docids: I) -> Result<Vec<u32>> {
    let mut deltas = Vec::new();
    let mut previous: Option<u32> = None;
    for docid in docids {
        let delta = match previous {
            None => docid,
            Some(prev) if docid > prev => docid - prev,
            Some(prev) => {
                return Err(Error::invalid_record(format!(
                    "docids must be strictly increasing: {} followed by {}",
                    prev, docid
                )))
            }
        };
        deltas.push(delta);
        previous = Some(docid);
    }
    Ok(deltas)
}
