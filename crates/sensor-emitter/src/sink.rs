//! Output sinks for emitted readings.

use crate::error::EmitterError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Create the file, truncating any previous content.
    #[default]
    Overwrite,
    /// Create the file if missing and append after existing content.
    Append,
}

impl OutputMode {
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            Self::Append
        } else {
            Self::Overwrite
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwriting",
            Self::Append => "appending",
        }
    }
}

/// A writable destination that can report its current size.
pub trait ByteSink: Write {
    /// Total size of the destination in bytes, including earlier content.
    fn size_bytes(&self) -> io::Result<u64>;
}

impl ByteSink for Vec<u8> {
    fn size_bytes(&self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

/// File-backed output sink.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    mode: OutputMode,
    file: File,
}

impl OutputSink {
    /// Open `path` for writing in the given mode.
    ///
    /// Any failure here is reported as [`EmitterError::SinkUnavailable`]
    /// before generation starts.
    pub fn open<P: AsRef<Path>>(path: P, mode: OutputMode) -> Result<Self, EmitterError> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        match mode {
            OutputMode::Overwrite => options.write(true).create(true).truncate(true),
            OutputMode::Append => options.append(true).create(true),
        };

        let file = options
            .open(&path)
            .map_err(|source| EmitterError::SinkUnavailable {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, mode, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl ByteSink for OutputSink {
    fn size_bytes(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
}
