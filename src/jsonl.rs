//! A human-readable rendition of a CIFF stream: one JSON object per record.
//!
//! ```text
//! {"type":"header","version":1,"num_postings_lists":1,...}
//! {"type":"postings_list","term":"cat","df":2,"cf":3,"postings":[{"docid_delta":0,"tf":2},...]}
//! {"type":"doc_record","docid":0,"collection_docid":"docA","doclength":5}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::codec::{Framing, RecordReader, RecordWriter};
use crate::model::CiffRecord;
use crate::output::PendingFile;
use crate::{Error, Result};

fn required<'a>(path: &'a Option<PathBuf>, name: &'static str) -> Result<&'a Path> {
    path.as_deref().ok_or(Error::MissingArgument(name))
}

/// CIFF to JSON lines converter.
#[derive(Debug, Default, Clone)]
pub struct CiffToJsonl {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    framing: Framing,
}

impl CiffToJsonl {
    /// Sets the CIFF file to read.
    pub fn input_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the JSON lines file to write.
    pub fn output_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the framing of the input. Defaults to [`Framing::Positional`].
    pub fn framing(&mut self, framing: Framing) -> &mut Self {
        self.framing = framing;
        self
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is missing, the CIFF stream is malformed,
    /// or an IO error occurs.
    pub fn convert(&self) -> Result<()> {
        let input = required(&self.input, "input path")?;
        let output = required(&self.output, "output path")?;
        let records = RecordReader::with_framing(BufReader::new(File::open(input)?), self.framing);
        let mut out = PendingFile::create(output)?;
        let mut count: u64 = 0;
        for record in records {
            serde_json::to_writer(&mut out, &record?)?;
            out.write_all(b"\n")?;
            count += 1;
        }
        out.commit()?;
        log::info!("Wrote {} records to {}", count, output.display());
        Ok(())
    }
}

/// JSON lines to CIFF converter.
///
/// Blank lines are skipped. Records are written in the order they appear,
/// so the usual ordering rules of the chosen framing apply.
#[derive(Debug, Default, Clone)]
pub struct JsonlToCiff {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    framing: Framing,
}

impl JsonlToCiff {
    /// Sets the JSON lines file to read.
    pub fn input_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the CIFF file to write.
    pub fn output_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the framing of the output. Defaults to [`Framing::Positional`].
    pub fn framing(&mut self, framing: Framing) -> &mut Self {
        self.framing = framing;
        self
    }

    /// Runs the conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is missing, a line is not a valid record,
    /// the records are out of order, or an IO error occurs.
    pub fn convert(&self) -> Result<()> {
        let input = required(&self.input, "input path")?;
        let output = required(&self.output, "output path")?;
        let reader = BufReader::new(File::open(input)?);
        let mut out = RecordWriter::with_framing(PendingFile::create(output)?, self.framing);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: CiffRecord = serde_json::from_str(&line)?;
            out.write(&record)?;
        }
        out.flush()?;
        out.into_inner().commit()?;
        log::info!("Wrote {}", output.display());
        Ok(())
    }
}
