use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Result};

/// Destination a formatted record is written to.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Which standard stream a [`ConsoleSink`] writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

#[derive(Debug, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        match self.stream {
            Stream::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
        }
    }
}

/// Append-mode file handle. The file is closed when the sink is dropped.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::Open { path: path.clone(), source })?;
        Ok(Self { path, file: Mutex::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = lock(&self.file);
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    }
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    pub fn clear(&self) {
        lock(&self.lines).clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        lock(&self.lines).push(line.to_string());
        Ok(())
    }
}

// Records are written whole, so a poisoned lock still guards consistent data.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_sink_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "existing\n").unwrap();

        let fixture = FileSink::open(&path).unwrap();
        fixture.write_line("first").unwrap();
        fixture.write_line("second").unwrap();
        drop(fixture);

        let actual = std::fs::read_to_string(&path).unwrap();
        let expected = "existing\nfirst\nsecond\n";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_file_sink_open_error_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");

        let actual = FileSink::open(&path).unwrap_err();
        assert!(matches!(&actual, Error::Open { path: p, .. } if p == &path));
        assert!(actual.to_string().contains("out.log"));
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let fixture = MemorySink::new();
        let other = fixture.clone();
        other.write_line("a").unwrap();
        assert_eq!(fixture.lines(), vec!["a".to_string()]);
        fixture.clear();
        assert!(other.lines().is_empty());
    }
}
