use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::codec::{Framing, RecordReader};
use crate::model::CiffRecord;
use crate::pisa::{PisaIndexPaths, PisaWriter};
use crate::{pb_style, Error, Result};

/// CIFF to PISA converter.
///
/// # Examples
///
/// ```no_run
/// # use ciff_pisa::CiffToPisa;
/// # fn main() -> ciff_pisa::Result<()> {
/// CiffToPisa::default()
///     .input_path("index.ciff")
///     .output_paths("pisa/coll")
///     .generate_lexicons(true)
///     .convert()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct CiffToPisa {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    framing: Framing,
    generate_lexicons: bool,
}

impl CiffToPisa {
    /// Sets the CIFF file to read.
    pub fn input_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the basename of the PISA files to write; e.g., `coll` produces `coll.docs`, etc.
    pub fn output_paths<P: Into<PathBuf>>(&mut self, base_path: P) -> &mut Self {
        self.output = Some(base_path.into());
        self
    }

    /// Sets how frames are told apart. Defaults to [`Framing::Positional`].
    pub fn framing(&mut self, framing: Framing) -> &mut Self {
        self.framing = framing;
        self
    }

    /// Also writes `.termlex` and `.doclex` lexicons. Off by default.
    pub fn generate_lexicons(&mut self, generate: bool) -> &mut Self {
        self.generate_lexicons = generate;
        self
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - an input or output path is missing or the output basename has no file name,
    /// - an IO error occurs,
    /// - the CIFF stream is malformed (framing, protobuf, missing or misplaced header,
    ///   counts differing from the header),
    /// - any ID, frequency, or count is negative, or docids in a list do not increase,
    /// - document records are not ordered `0, 1, 2, ...`,
    /// - a term or document key contains a newline.
    pub fn convert(&self) -> Result<()> {
        let input = self
            .input
            .as_deref()
            .ok_or(Error::MissingArgument("input path"))?;
        let output = self
            .output
            .as_deref()
            .ok_or(Error::MissingArgument("output path"))?;
        convert(input, output, self.framing, self.generate_lexicons)
    }
}

fn convert(input: &Path, output: &Path, framing: Framing, generate_lexicons: bool) -> Result<()> {
    let paths = PisaIndexPaths::from_base_path(output)
        .ok_or_else(|| Error::InvalidPath(output.to_path_buf()))?;
    let records = RecordReader::with_framing(BufReader::new(File::open(input)?), framing);
    let mut writer = PisaWriter::create(&paths, generate_lexicons)?;

    log::info!("Converting {} to PISA", input.display());
    write_records(records, &mut writer)?;
    let num_documents = writer.finish()?;
    log::info!("Wrote PISA index with {} documents", num_documents);
    Ok(())
}

/// Feeds every record to `writer`; the returned bar counts postings lists and documents.
fn write_records<R: BufRead>(
    records: RecordReader<R>,
    writer: &mut PisaWriter,
) -> Result<ProgressBar> {
    let mut progress = ProgressBar::hidden();
    for record in records {
        match record? {
            CiffRecord::Header(header) => {
                log::info!("\n{}", header);
                progress = ProgressBar::new(
                    u64::from(header.num_postings_lists) + u64::from(header.num_docs),
                );
                progress.set_style(pb_style());
                progress.set_draw_delta(1000);
            }
            CiffRecord::PostingsList(list) => {
                writer.write_postings_list(&list)?;
                progress.inc(1);
            }
            CiffRecord::DocRecord(document) => {
                writer.write_document(&document)?;
                progress.inc(1);
            }
        }
    }
    progress.finish();
    Ok(progress)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::RecordWriter;
    use crate::model::{DocRecord, Header, Posting, PostingsList};
    use std::fs::read;
    use tempfile::TempDir;

    fn write_ciff(path: &Path, framing: Framing, records: &[CiffRecord]) -> Result<()> {
        let mut writer = RecordWriter::with_framing(File::create(path)?, framing);
        for record in records {
            writer.write(record)?;
        }
        writer.flush()
    }

    fn header(num_postings_lists: u32, num_docs: u32) -> CiffRecord {
        Header {
            version: 1,
            num_postings_lists,
            num_docs,
            ..Header::default()
        }
        .into()
    }

    fn doc(docid: u32, length: u32) -> CiffRecord {
        DocRecord {
            docid,
            collection_docid: format!("doc{}", docid),
            doclength: length,
        }
        .into()
    }

    #[test]
    fn test_progress_counts_lists_and_documents() -> Result<()> {
        let temp = TempDir::new()?;
        let list = PostingsList {
            term: "cat".into(),
            df: 1,
            cf: 2,
            postings: vec![Posting { docid_delta: 1, tf: 2 }],
        };
        let mut bytes = Vec::new();
        {
            let mut out = RecordWriter::new(&mut bytes);
            for record in &[header(1, 2), list.into(), doc(0, 3), doc(1, 4)] {
                out.write(record)?;
            }
        }
        let paths = PisaIndexPaths::from_base_path(&temp.path().join("coll"))
            .ok_or_else(|| Error::InvalidPath(temp.path().to_path_buf()))?;
        let mut writer = PisaWriter::create(&paths, false)?;
        let progress = write_records(RecordReader::new(&bytes[..]), &mut writer)?;
        assert_eq!(progress.length(), 3);
        assert_eq!(progress.position(), 3);
        Ok(())
    }

    #[test]
    fn test_missing_arguments() {
        assert!(matches!(
            CiffToPisa::default().output_paths("coll").convert(),
            Err(Error::MissingArgument("input path"))
        ));
        assert!(matches!(
            CiffToPisa::default().input_path("x.ciff").convert(),
            Err(Error::MissingArgument("output path"))
        ));
    }

    #[test]
    fn test_out_of_order_documents_leave_no_output() -> Result<()> {
        let temp = TempDir::new()?;
        let input = temp.path().join("in.ciff");
        write_ciff(&input, Framing::Positional, &[header(0, 2), doc(1, 3), doc(0, 5)])?;
        let result = CiffToPisa::default()
            .input_path(&input)
            .output_paths(temp.path().join("coll"))
            .convert();
        assert!(matches!(
            result,
            Err(Error::OutOfOrderDocument {
                expected: 0,
                found: 1
            })
        ));
        assert_eq!(std::fs::read_dir(temp.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_inconsistent_df() -> Result<()> {
        let temp = TempDir::new()?;
        let input = temp.path().join("in.ciff");
        let list = PostingsList {
            term: "cat".into(),
            df: 3,
            cf: 1,
            postings: vec![Posting { docid_delta: 0, tf: 1 }],
        };
        write_ciff(&input, Framing::Positional, &[header(1, 1), list.into(), doc(0, 1)])?;
        let result = CiffToPisa::default()
            .input_path(&input)
            .output_paths(temp.path().join("coll"))
            .convert();
        assert!(matches!(result, Err(Error::InvalidRecord(_))));
        Ok(())
    }

    #[test]
    fn test_empty_index() -> Result<()> {
        let temp = TempDir::new()?;
        let input = temp.path().join("in.ciff");
        write_ciff(&input, Framing::Positional, &[header(0, 0)])?;
        let output = temp.path().join("coll");
        CiffToPisa::default()
            .input_path(&input)
            .output_paths(&output)
            .convert()?;
        assert_eq!(read(temp.path().join("coll.docs"))?, vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(read(temp.path().join("coll.sizes"))?, vec![0, 0, 0, 0]);
        assert!(read(temp.path().join("coll.freqs"))?.is_empty());
        assert!(read(temp.path().join("coll.terms"))?.is_empty());
        assert!(read(temp.path().join("coll.documents"))?.is_empty());
        Ok(())
    }
}
