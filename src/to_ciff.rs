use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressIterator};

use crate::binary_collection::{read_document_count, BinaryCollection, DocumentSizes};
use crate::codec::{Framing, RecordWriter};
use crate::model::{DocRecord, Header, PostingsList};
use crate::output::PendingFile;
use crate::pisa::{map_file, Lines, PisaIndexPaths, PostingGroups};
use crate::{pb_style, Error, Result};

/// PISA to CIFF converter.
///
/// # Examples
///
/// ```no_run
/// # use ciff_pisa::PisaToCiff;
/// # fn main() -> ciff_pisa::Result<()> {
/// PisaToCiff::default()
///     .description("My index")
///     .pisa_paths("pisa/coll")
///     .output_path("index.ciff")
///     .convert()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct PisaToCiff {
    documents_path: Option<PathBuf>,
    frequencies_path: Option<PathBuf>,
    sizes_path: Option<PathBuf>,
    terms_path: Option<PathBuf>,
    titles_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    description: String,
    framing: Framing,
    invalid_path: Option<PathBuf>,
}

impl PisaToCiff {
    /// Sets the CIFF header description.
    pub fn description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Sets `.docs`, `.freqs`, and `.sizes` paths from a basename.
    ///
    /// A basename without a file name makes [`convert`](Self::convert) fail
    /// with [`Error::InvalidPath`].
    pub fn index_paths<P: AsRef<Path>>(&mut self, base_path: P) -> &mut Self {
        if let Some(paths) = self.base_paths(base_path.as_ref()) {
            self.documents_path = Some(paths.documents);
            self.frequencies_path = Some(paths.frequencies);
            self.sizes_path = Some(paths.sizes);
        }
        self
    }

    /// Sets all five input paths from a basename, including `.terms` and `.documents`.
    ///
    /// A basename without a file name makes [`convert`](Self::convert) fail
    /// with [`Error::InvalidPath`].
    pub fn pisa_paths<P: AsRef<Path>>(&mut self, base_path: P) -> &mut Self {
        if let Some(paths) = self.base_paths(base_path.as_ref()) {
            self.documents_path = Some(paths.documents);
            self.frequencies_path = Some(paths.frequencies);
            self.sizes_path = Some(paths.sizes);
            self.terms_path = Some(paths.terms);
            self.titles_path = Some(paths.titles);
        }
        self
    }

    fn base_paths(&mut self, base_path: &Path) -> Option<PisaIndexPaths> {
        let paths = PisaIndexPaths::from_base_path(base_path);
        self.invalid_path = match paths {
            Some(_) => None,
            None => Some(base_path.to_path_buf()),
        };
        paths
    }

    /// Sets the path of the term file, one term per line.
    pub fn terms_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.terms_path = Some(path.into());
        self
    }

    /// Sets the path of the document titles file, one external key per line.
    pub fn titles_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.titles_path = Some(path.into());
        self
    }

    /// Sets the CIFF file to write.
    pub fn output_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets how frames are told apart. Defaults to [`Framing::Positional`].
    pub fn framing(&mut self, framing: Framing) -> &mut Self {
        self.framing = framing;
        self
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a path is missing or a basename has no file name,
    /// - an IO error occurs,
    /// - a binary file is structurally corrupt,
    /// - `.docs`, `.freqs`, `.sizes`, and `.terms` disagree on the number or
    ///   lengths of postings lists or on the number of documents,
    /// - `.documents` has a different number of lines than `.sizes` declares,
    /// - docids of a postings list do not increase or reach past the last document,
    /// - a value does not fit the CIFF wire format.
    pub fn convert(&self) -> Result<()> {
        if let Some(path) = &self.invalid_path {
            return Err(Error::InvalidPath(path.clone()));
        }
        let inputs = Inputs {
            documents: required(&self.documents_path, "documents path")?,
            frequencies: required(&self.frequencies_path, "frequencies path")?,
            sizes: required(&self.sizes_path, "sizes path")?,
            terms: required(&self.terms_path, "terms path")?,
            titles: required(&self.titles_path, "titles path")?,
        };
        let output = required(&self.output_path, "output path")?;
        convert(&inputs, output, &self.description, self.framing)
    }
}

fn required<'a>(path: &'a Option<PathBuf>, name: &'static str) -> Result<&'a Path> {
    path.as_deref().ok_or(Error::MissingArgument(name))
}

struct Inputs<'a> {
    documents: &'a Path,
    frequencies: &'a Path,
    sizes: &'a Path,
    terms: &'a Path,
    titles: &'a Path,
}

fn count_postings_lists(mut documents: BinaryCollection<'_>) -> Result<u32> {
    let mut count: u32 = 0;
    for sequence in documents.by_ref() {
        sequence?;
        count = count
            .checked_add(1)
            .ok_or_else(|| Error::invalid_record("more than 2^32 postings lists"))?;
    }
    Ok(count)
}

fn header(
    documents: BinaryCollection<'_>,
    sizes: &DocumentSizes<'_>,
    description: &str,
) -> Result<Header> {
    log::info!("Collecting postings list statistics");
    let num_postings_lists = count_postings_lists(documents)?;
    let num_docs = sizes.num_documents();
    let total_terms_in_collection: u64 = sizes.lengths().iter().map(u64::from).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_doclength = if num_docs == 0 {
        0.0
    } else {
        total_terms_in_collection as f64 / f64::from(num_docs)
    };
    Ok(Header {
        version: 1,
        num_postings_lists,
        num_docs,
        total_postings_lists: num_postings_lists,
        total_docs: num_docs,
        total_terms_in_collection,
        average_doclength,
        description: description.to_string(),
    })
}

fn convert(inputs: &Inputs<'_>, output: &Path, description: &str, framing: Framing) -> Result<()> {
    let documents_bytes = map_file(inputs.documents)?;
    let frequencies_bytes = map_file(inputs.frequencies)?;
    let sizes_bytes = map_file(inputs.sizes)?;

    let sizes = DocumentSizes::try_from(&sizes_bytes[..])?;
    let mut documents = BinaryCollection::try_from(&documents_bytes[..])?;
    let num_documents = read_document_count(&mut documents)?;
    if num_documents != sizes.num_documents() {
        return Err(Error::layout_mismatch(format!(
            "documents declare {} documents but sizes declare {}",
            num_documents,
            sizes.num_documents()
        )));
    }
    let frequencies = BinaryCollection::try_from(&frequencies_bytes[..])?;

    let header = header(documents, &sizes, description)?;
    let num_postings_lists = header.num_postings_lists;
    let mut out = RecordWriter::with_framing(PendingFile::create(output)?, framing);
    out.write(&header.into())?;

    log::info!("Writing postings");
    let progress = ProgressBar::new(u64::from(num_postings_lists));
    progress.set_style(pb_style());
    progress.set_draw_delta(u64::from(num_postings_lists) / 100);
    let mut terms = Lines::open(inputs.terms)?;
    for (index, group) in PostingGroups::new(documents, frequencies)
        .enumerate()
        .progress_with(progress)
    {
        let (docids, tfs) = group?;
        if let Some(last) = docids.len().checked_sub(1).and_then(|i| docids.get(i)) {
            if last >= num_documents {
                return Err(Error::layout_mismatch(format!(
                    "postings list {} refers to document {} but there are {} documents",
                    index, last, num_documents
                )));
            }
        }
        let term = terms.next().ok_or_else(|| {
            Error::layout_mismatch(format!(
                "terms file has {} lines but there are {} postings lists",
                index, num_postings_lists
            ))
        })??;
        out.write(&PostingsList::from_absolute(term, docids.iter(), tfs.iter())?.into())?;
    }
    if terms.next().transpose()?.is_some() {
        return Err(Error::layout_mismatch(format!(
            "terms file has more lines than the {} postings lists",
            num_postings_lists
        )));
    }

    log::info!("Writing document records");
    let mut titles = Lines::open(inputs.titles)?;
    for (docid, doclength) in sizes.lengths().iter().enumerate() {
        let docid = docid as u32;
        let collection_docid = match titles.next().transpose()? {
            Some(title) => title,
            None => {
                return Err(Error::LengthCountMismatch {
                    declared: num_documents,
                    actual: u64::from(docid),
                })
            }
        };
        out.write(
            &DocRecord {
                docid,
                collection_docid,
                doclength,
            }
            .into(),
        )?;
    }
    let mut extra: u64 = 0;
    while titles.next().transpose()?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        return Err(Error::LengthCountMismatch {
            declared: num_documents,
            actual: u64::from(num_documents) + extra,
        });
    }

    out.flush()?;
    out.into_inner().commit()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::binary_collection::encode_u32_sequence;
    use std::fs;
    use tempfile::TempDir;

    /// Writes the two-document, one-term "cat" index under `dir/coll`.
    fn write_cat_index(dir: &Path) -> Result<PathBuf> {
        let base = dir.join("coll");
        let mut docs = Vec::new();
        encode_u32_sequence(&mut docs, 1, &[2])?;
        encode_u32_sequence(&mut docs, 2, &[0, 1])?;
        let mut freqs = Vec::new();
        encode_u32_sequence(&mut freqs, 2, &[2, 1])?;
        let mut sizes = Vec::new();
        encode_u32_sequence(&mut sizes, 2, &[5, 3])?;
        fs::write(dir.join("coll.docs"), docs)?;
        fs::write(dir.join("coll.freqs"), freqs)?;
        fs::write(dir.join("coll.sizes"), sizes)?;
        fs::write(dir.join("coll.terms"), "cat\n")?;
        fs::write(dir.join("coll.documents"), "docA\ndocB\n")?;
        Ok(base)
    }

    fn convert_cat(dir: &Path) -> Result<()> {
        PisaToCiff::default()
            .pisa_paths(dir.join("coll"))
            .output_path(dir.join("out.ciff"))
            .convert()
    }

    #[test]
    fn test_missing_arguments() {
        assert!(matches!(
            PisaToCiff::default().index_paths("coll").convert(),
            Err(Error::MissingArgument("terms path"))
        ));
    }

    #[test]
    fn test_basename_without_file_name() {
        let result = PisaToCiff::default()
            .pisa_paths("/")
            .output_path("out.ciff")
            .convert();
        assert!(matches!(result, Err(Error::InvalidPath(path)) if path == Path::new("/")));
        let result = PisaToCiff::default()
            .index_paths("..")
            .terms_path("coll.terms")
            .titles_path("coll.documents")
            .output_path("out.ciff")
            .convert();
        assert!(matches!(result, Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_docid_past_last_document() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        let mut docs = Vec::new();
        encode_u32_sequence(&mut docs, 1, &[2])?;
        encode_u32_sequence(&mut docs, 2, &[0, 5])?;
        fs::write(temp.path().join("coll.docs"), docs)?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::LayoutMismatch(_))));
        assert!(!temp.path().join("out.ciff").exists());
        Ok(())
    }

    #[test]
    fn test_length_count_mismatch() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        fs::write(temp.path().join("coll.documents"), "docA\n")?;
        assert!(matches!(
            convert_cat(temp.path()),
            Err(Error::LengthCountMismatch {
                declared: 2,
                actual: 1
            })
        ));
        fs::write(temp.path().join("coll.documents"), "docA\ndocB\ndocC\ndocD\n")?;
        assert!(matches!(
            convert_cat(temp.path()),
            Err(Error::LengthCountMismatch {
                declared: 2,
                actual: 4
            })
        ));
        assert!(!temp.path().join("out.ciff").exists());
        Ok(())
    }

    #[test]
    fn test_layout_mismatch() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        let mut freqs = Vec::new();
        encode_u32_sequence(&mut freqs, 1, &[2])?;
        fs::write(temp.path().join("coll.freqs"), freqs)?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::LayoutMismatch(_))));
        Ok(())
    }

    #[test]
    fn test_terms_count_mismatch() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        fs::write(temp.path().join("coll.terms"), "cat\ndog\n")?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::LayoutMismatch(_))));
        fs::write(temp.path().join("coll.terms"), "")?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::LayoutMismatch(_))));
        Ok(())
    }

    #[test]
    fn test_document_count_disagreement() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        let mut sizes = Vec::new();
        encode_u32_sequence(&mut sizes, 3, &[5, 3, 1])?;
        fs::write(temp.path().join("coll.sizes"), sizes)?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::LayoutMismatch(_))));
        Ok(())
    }

    #[test]
    fn test_unsorted_docids() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        let mut docs = Vec::new();
        encode_u32_sequence(&mut docs, 1, &[2])?;
        encode_u32_sequence(&mut docs, 2, &[1, 0])?;
        fs::write(temp.path().join("coll.docs"), docs)?;
        assert!(matches!(convert_cat(temp.path()), Err(Error::InvalidRecord(_))));
        Ok(())
    }

    #[test]
    fn test_header_statistics() -> Result<()> {
        let temp = TempDir::new()?;
        write_cat_index(temp.path())?;
        let sizes_bytes = fs::read(temp.path().join("coll.sizes"))?;
        let docs_bytes = fs::read(temp.path().join("coll.docs"))?;
        let sizes = DocumentSizes::try_from(&sizes_bytes[..])?;
        let mut documents = BinaryCollection::try_from(&docs_bytes[..])?;
        read_document_count(&mut documents)?;
        let header = header(documents, &sizes, "toy")?;
        assert_eq!(header.num_postings_lists, 1);
        assert_eq!(header.num_docs, 2);
        assert_eq!(header.total_terms_in_collection, 8);
        assert!((header.average_doclength - 4.0).abs() < f64::EPSILON);
        assert_eq!(header.description, "toy");
        Ok(())
    }
}
