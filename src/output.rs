//! Output files that only appear at their final path once complete.

use std::ffi::OsString;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A buffered file written next to `target` under a temporary name.
///
/// [`commit`](Self::commit) renames it onto `target`. Dropping it without
/// committing deletes it, so a failed conversion leaves no partial file behind.
pub(crate) struct PendingFile {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl PendingFile {
    pub(crate) fn create(target: &Path) -> io::Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut prefix = OsString::from(".");
        if let Some(name) = target.file_name() {
            prefix.push(name);
        }
        let file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)?;
        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub(crate) fn commit(self) -> io::Result<()> {
        let file = self.writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        file.persist(&self.target).map_err(|err| err.error)?;
        log::debug!("Wrote {}", self.target.display());
        Ok(())
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Seek for PendingFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.writer.seek(pos)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_commit_moves_into_place() -> io::Result<()> {
        let temp = TempDir::new()?;
        let target = temp.path().join("coll.docs");
        let mut file = PendingFile::create(&target)?;
        file.write_all(b"abcd")?;
        file.seek(SeekFrom::Start(1))?;
        file.write_all(b"X")?;
        assert!(!target.exists());
        file.commit()?;
        assert_eq!(std::fs::read(&target)?, b"aXcd");
        assert_eq!(std::fs::read_dir(temp.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_drop_leaves_nothing() -> io::Result<()> {
        let temp = TempDir::new()?;
        let target = temp.path().join("coll.terms");
        std::fs::write(&target, "old\n")?;
        {
            let mut file = PendingFile::create(&target)?;
            file.write_all(b"new\n")?;
        }
        assert_eq!(std::fs::read_to_string(&target)?, "old\n");
        assert_eq!(std::fs::read_dir(temp.path())?.count(), 1);
        Ok(())
    }
}
