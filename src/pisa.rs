//! PISA's uncompressed index: five sibling files sharing a basename.
//!
//! | suffix       | content                                                  |
//! |--------------|----------------------------------------------------------|
//! | `.docs`      | `[1, N]`, then per term `[len, docid_0, docid_1, ...]`   |
//! | `.freqs`     | per term `[len, tf_0, tf_1, ...]`                        |
//! | `.sizes`     | `[N, len(doc_0), len(doc_1), ...]`                       |
//! | `.terms`     | one term per line, line number = term ID                 |
//! | `.documents` | one external document key per line, line number = docid |
//!
//! Binary files are sequences of 32-bit little-endian unsigned integers.

use std::convert::TryFrom;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use memmap::Mmap;

use crate::binary_collection::{
    encode_u32_sequence, BinaryCollection, BinarySequence, DOCS_FORMAT_MARKER,
};
use crate::lexicon::Lexicon;
use crate::model::{DocRecord, PostingsList};
use crate::output::PendingFile;
use crate::{Error, Result};

/// Appends `suffix` to `path` without treating it as an extension.
///
/// # Examples
///
/// ```
/// # use ciff_pisa::concat;
/// # use std::path::Path;
/// assert_eq!(concat(Path::new("dir/coll.v1"), ".docs"), "dir/coll.v1.docs");
/// ```
pub fn concat<S: AsRef<OsStr>>(path: &Path, suffix: S) -> OsString {
    let mut path = path.as_os_str().to_owned();
    path.push(suffix);
    path
}

/// Paths of all files of a PISA index with a common basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PisaIndexPaths {
    /// `.docs`: docids of all postings lists.
    pub documents: PathBuf,
    /// `.freqs`: frequencies of all postings lists.
    pub frequencies: PathBuf,
    /// `.sizes`: document lengths.
    pub sizes: PathBuf,
    /// `.terms`: the term of each postings list.
    pub terms: PathBuf,
    /// `.documents`: the external key of each document.
    pub titles: PathBuf,
    /// `.termlex`: optional term lexicon.
    pub term_lexicon: PathBuf,
    /// `.doclex`: optional document lexicon.
    pub document_lexicon: PathBuf,
}

impl PisaIndexPaths {
    /// Resolves all paths for `basename`; `None` if it has no file name.
    #[must_use]
    pub fn from_base_path(basename: &Path) -> Option<Self> {
        basename.file_name()?;
        let path = |suffix: &str| PathBuf::from(concat(basename, suffix));
        Some(Self {
            documents: path(".docs"),
            frequencies: path(".freqs"),
            sizes: path(".sizes"),
            terms: path(".terms"),
            titles: path(".documents"),
            term_lexicon: path(".termlex"),
            document_lexicon: path(".doclex"),
        })
    }
}

/// Read-only contents of an input file.
pub(crate) enum FileBytes {
    Mapped(Mmap),
    Empty,
}

impl Deref for FileBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Empty => &[],
        }
    }
}

/// Memory-maps `path`. Empty files cannot be mapped and are returned as an empty slice.
pub(crate) fn map_file(path: &Path) -> Result<FileBytes> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(FileBytes::Empty);
    }
    // SAFETY: the mapping is read-only; inputs must not be modified during a conversion.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(FileBytes::Mapped(mmap))
}

/// Lazy lines of a newline-terminated text file, without their terminators.
///
/// There is no escaping: every byte other than `\n` belongs to the line, and the
/// last line must be terminated too.
pub struct Lines<R> {
    reader: R,
    line: u64,
    fused: bool,
}

impl<R: BufRead> Lines<R> {
    /// Reads lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            fused: false,
        }
    }
}

impl Lines<BufReader<File>> {
    /// Opens a text file.
    ///
    /// # Errors
    ///
    /// Passes along any IO errors.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let mut line = String::new();
        let result = match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.fused = true;
                return None;
            }
            Ok(_) if line.ends_with('\n') => {
                line.pop();
                self.line += 1;
                Ok(line)
            }
            Ok(_) => Err(Error::MissingNewline { line: self.line }),
            Err(err) => Err(err.into()),
        };
        if result.is_err() {
            self.fused = true;
        }
        Some(result)
    }
}

/// Writes `line` followed by exactly one `\n`.
///
/// # Errors
///
/// Fails if `line` contains a newline itself, or on IO errors.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    if line.contains('\n') {
        return Err(Error::invalid_record(format!(
            "{:?} contains a newline and cannot be stored in a text file",
            line
        )));
    }
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Co-iterates the postings lists of `.docs` and `.freqs`.
///
/// Yields one `(docids, frequencies)` pair per term; both files must hold the
/// same number of lists with equal lengths.
pub struct PostingGroups<'a> {
    documents: BinaryCollection<'a>,
    frequencies: BinaryCollection<'a>,
    index: usize,
}

impl<'a> PostingGroups<'a> {
    /// `documents` must already be past its `[1, N]` prefix.
    #[must_use]
    pub fn new(documents: BinaryCollection<'a>, frequencies: BinaryCollection<'a>) -> Self {
        Self {
            documents,
            frequencies,
            index: 0,
        }
    }

    fn pair(
        &mut self,
        documents: std::result::Result<BinarySequence<'a>, crate::InvalidFormat>,
        frequencies: std::result::Result<BinarySequence<'a>, crate::InvalidFormat>,
    ) -> Result<(BinarySequence<'a>, BinarySequence<'a>)> {
        let (documents, frequencies) = (documents?, frequencies?);
        if documents.len() != frequencies.len() {
            return Err(Error::layout_mismatch(format!(
                "postings list {} has {} documents but {} frequencies",
                self.index,
                documents.len(),
                frequencies.len()
            )));
        }
        self.index += 1;
        Ok((documents, frequencies))
    }

    fn exhaust(&mut self) {
        self.documents = BinaryCollection::default();
        self.frequencies = BinaryCollection::default();
    }
}

impl<'a> Iterator for PostingGroups<'a> {
    type Item = Result<(BinarySequence<'a>, BinarySequence<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match (self.documents.next(), self.frequencies.next()) {
            (None, None) => return None,
            (Some(documents), Some(frequencies)) => self.pair(documents, frequencies),
            (Some(_), None) => Err(Error::layout_mismatch(format!(
                "documents contain more postings lists than frequencies ({})",
                self.index
            ))),
            (None, Some(_)) => Err(Error::layout_mismatch(format!(
                "frequencies contain more postings lists than documents ({})",
                self.index
            ))),
        };
        if result.is_err() {
            self.exhaust();
        }
        Some(result)
    }
}

/// Term and document lexicons, built from the text lines once all records are in.
struct PendingLexicons {
    terms: Vec<String>,
    titles: Vec<String>,
    term_lexicon: PendingFile,
    document_lexicon: PendingFile,
}

/// Streams CIFF records into the five files of a PISA index, and optionally
/// into `.termlex` and `.doclex`.
///
/// All files are written under temporary names and only moved into place by
/// [`finish`](Self::finish). Document lengths are buffered because `.sizes`
/// starts with the document count.
pub(crate) struct PisaWriter {
    documents: PendingFile,
    frequencies: PendingFile,
    terms: PendingFile,
    titles: PendingFile,
    sizes: PendingFile,
    lengths: Vec<u32>,
    lexicons: Option<PendingLexicons>,
}

impl PisaWriter {
    pub(crate) fn create(paths: &PisaIndexPaths, generate_lexicons: bool) -> Result<Self> {
        let mut documents = PendingFile::create(&paths.documents)?;
        // The document count is patched in `finish`.
        encode_u32_sequence(&mut documents, DOCS_FORMAT_MARKER, [0_u32].iter())?;
        let lexicons = if generate_lexicons {
            Some(PendingLexicons {
                terms: Vec::new(),
                titles: Vec::new(),
                term_lexicon: PendingFile::create(&paths.term_lexicon)?,
                document_lexicon: PendingFile::create(&paths.document_lexicon)?,
            })
        } else {
            None
        };
        Ok(Self {
            documents,
            frequencies: PendingFile::create(&paths.frequencies)?,
            terms: PendingFile::create(&paths.terms)?,
            titles: PendingFile::create(&paths.titles)?,
            sizes: PendingFile::create(&paths.sizes)?,
            lengths: Vec::new(),
            lexicons,
        })
    }

    pub(crate) fn write_postings_list(&mut self, list: &PostingsList) -> Result<()> {
        let docids = list.absolute_docids()?;
        let length = u32::try_from(docids.len()).map_err(|_| {
            Error::invalid_record(format!("term `{}` has too many postings", list.term))
        })?;
        if list.df != u64::from(length) {
            return Err(Error::invalid_record(format!(
                "term `{}`: df is {} but the list has {} postings",
                list.term, list.df, length
            )));
        }
        encode_u32_sequence(&mut self.documents, length, &docids)?;
        encode_u32_sequence(
            &mut self.frequencies,
            length,
            list.postings.iter().map(|p| p.tf),
        )?;
        write_line(&mut self.terms, &list.term)?;
        if let Some(lexicons) = &mut self.lexicons {
            lexicons.terms.push(list.term.clone());
        }
        Ok(())
    }

    pub(crate) fn write_document(&mut self, record: &DocRecord) -> Result<()> {
        let expected = u32::try_from(self.lengths.len()).map_err(|_| {
            Error::invalid_record("more than 2^32 documents cannot be stored in PISA format")
        })?;
        if record.docid != expected {
            return Err(Error::OutOfOrderDocument {
                expected,
                found: record.docid,
            });
        }
        write_line(&mut self.titles, &record.collection_docid)?;
        self.lengths.push(record.doclength);
        if let Some(lexicons) = &mut self.lexicons {
            lexicons.titles.push(record.collection_docid.clone());
        }
        Ok(())
    }

    /// Writes `.sizes` and the lexicons, patches the `.docs` prefix, and moves
    /// all files into place.
    ///
    /// Files are renamed one at a time, so a failing rename can leave some of
    /// them replaced. `.docs` goes last: an index whose `.docs` is missing or
    /// older than its siblings was not completely written.
    pub(crate) fn finish(mut self) -> Result<u32> {
        let num_documents = self.lengths.len() as u32;
        encode_u32_sequence(&mut self.sizes, num_documents, &self.lengths)?;
        self.documents
            .seek(SeekFrom::Start(std::mem::size_of::<u32>() as u64))?;
        self.documents.write_all(&num_documents.to_le_bytes())?;
        if let Some(mut lexicons) = self.lexicons {
            log::info!("Building lexicons");
            let terms: Lexicon = lexicons.terms.iter().collect();
            terms.write(&mut lexicons.term_lexicon)?;
            let titles: Lexicon = lexicons.titles.iter().collect();
            titles.write(&mut lexicons.document_lexicon)?;
            lexicons.term_lexicon.commit()?;
            lexicons.document_lexicon.commit()?;
        }
        for file in [
            self.frequencies,
            self.terms,
            self.titles,
            self.sizes,
            self.documents,
        ] {
            file.commit()?;
        }
        Ok(num_documents)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::binary_collection::read_document_count;
    use crate::model::Posting;

    fn to_bytes(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect()
    }

    #[test]
    fn test_index_paths() {
        let paths = PisaIndexPaths::from_base_path(Path::new("/tmp/index/coll")).unwrap();
        assert_eq!(paths.documents, PathBuf::from("/tmp/index/coll.docs"));
        assert_eq!(paths.titles, PathBuf::from("/tmp/index/coll.documents"));
        assert_eq!(paths.term_lexicon, PathBuf::from("/tmp/index/coll.termlex"));
        assert!(PisaIndexPaths::from_base_path(Path::new("/")).is_none());
    }

    #[test]
    fn test_lines() {
        let lines: Vec<_> = Lines::new(&b"cat\n\ndog \r\n"[..])
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["cat", "", "dog \r"]);

        let mut lines = Lines::new(&b"cat\ndog"[..]);
        assert_eq!(lines.next().unwrap().unwrap(), "cat");
        assert!(matches!(
            lines.next(),
            Some(Err(Error::MissingNewline { line: 1 }))
        ));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_line_rejects_newlines() {
        let mut buf = Vec::new();
        write_line(&mut buf, "cat").unwrap();
        assert!(write_line(&mut buf, "two\nlines").is_err());
        assert_eq!(buf, b"cat\n");
    }

    #[test]
    fn test_writer_moves_files_in_on_finish() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let base = temp.path().join("coll");
        let paths = PisaIndexPaths::from_base_path(&base).unwrap();
        let mut writer = PisaWriter::create(&paths, true)?;
        writer.write_postings_list(&PostingsList {
            term: "cat".into(),
            df: 2,
            cf: 3,
            postings: vec![
                Posting { docid_delta: 0, tf: 2 },
                Posting { docid_delta: 1, tf: 1 },
            ],
        })?;
        for (docid, key) in ["docA", "docB"].iter().enumerate() {
            writer.write_document(&DocRecord {
                docid: docid as u32,
                collection_docid: (*key).to_string(),
                doclength: 4,
            })?;
        }
        let suffixes = [
            ".docs", ".freqs", ".sizes", ".terms", ".documents", ".termlex", ".doclex",
        ];
        for suffix in suffixes.iter() {
            assert!(!PathBuf::from(concat(&base, suffix)).exists());
        }
        assert_eq!(writer.finish()?, 2);
        for suffix in suffixes.iter() {
            assert!(PathBuf::from(concat(&base, suffix)).exists());
        }
        assert_eq!(std::fs::read(&paths.documents)?, to_bytes(&[1, 2, 2, 0, 1]));
        assert_eq!(std::fs::read(&paths.sizes)?, to_bytes(&[2, 4, 4]));
        Ok(())
    }

    #[test]
    fn test_posting_groups() -> Result<()> {
        let documents = to_bytes(&[1, 3, 2, 0, 2, 1, 1]);
        let frequencies = to_bytes(&[2, 4, 5, 1, 9]);
        let mut documents = BinaryCollection::try_from(&documents[..])?;
        assert_eq!(read_document_count(&mut documents)?, 3);
        let groups = PostingGroups::new(documents, BinaryCollection::try_from(&frequencies[..])?)
            .map(|group| {
                let (docids, freqs) = group?;
                Ok((docids.iter().collect(), freqs.iter().collect()))
            })
            .collect::<Result<Vec<(Vec<u32>, Vec<u32>)>>>()?;
        assert_eq!(groups, vec![(vec![0, 2], vec![4, 5]), (vec![1], vec![9])]);
        Ok(())
    }

    #[test]
    fn test_posting_groups_length_mismatch() -> Result<()> {
        let documents = to_bytes(&[2, 0, 2]);
        let frequencies = to_bytes(&[1, 4]);
        let mut groups = PostingGroups::new(
            BinaryCollection::try_from(&documents[..])?,
            BinaryCollection::try_from(&frequencies[..])?,
        );
        assert!(matches!(groups.next(), Some(Err(Error::LayoutMismatch(_)))));
        assert!(groups.next().is_none());
        Ok(())
    }

    #[test]
    fn test_posting_groups_count_mismatch() -> Result<()> {
        let documents = to_bytes(&[1, 0, 1, 1]);
        let frequencies = to_bytes(&[1, 4]);
        let mut groups = PostingGroups::new(
            BinaryCollection::try_from(&documents[..])?,
            BinaryCollection::try_from(&frequencies[..])?,
        );
        assert!(groups.next().unwrap().is_ok());
        assert!(matches!(groups.next(), Some(Err(Error::LayoutMismatch(_)))));
        Ok(())
    }
}
