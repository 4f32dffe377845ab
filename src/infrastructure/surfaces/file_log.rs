//! Append-only file log
//!
//! Mirrors the compile log to a file that outlives the session. Existing
//! content is never truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::LogSurface;
use crate::domain::value_objects::CompileLogEntry;
use crate::error::TsautoResult;

pub struct FileLogSurface {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileLogSurface {
    /// Open `path` for appending, creating it and its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> TsautoResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSurface for FileLogSurface {
    fn append(&mut self, entry: &CompileLogEntry) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let written = writeln!(writer, "[{}] {}", entry.timestamp.to_rfc3339(), entry.text)
            .and_then(|_| writer.flush());
        if let Err(e) = written {
            tracing::warn!(path = %self.path.display(), error = %e, "could not write log file");
        }
    }

    fn release(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
