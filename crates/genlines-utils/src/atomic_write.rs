//! Streaming atomic file output.
//!
//! Lines are written through a 64 KiB buffer into a temporary file created
//! next to the target. [`AtomicFileWriter::commit`] flushes, fsyncs and renames
//! the temporary file over the target; dropping the writer without committing
//! removes the temporary file and leaves the target untouched.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::{self, BufWriter, Write};
use tempfile::NamedTempFile;
use tracing::debug;

#[cfg(target_os = "windows")]
use std::{thread, time::Duration};

/// Capacity of the write buffer in front of the temporary file.
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// What to do if the target exists when the temporary file is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacePolicy {
    /// Replace the existing file.
    Replace,
    /// Fail with [`io::ErrorKind::AlreadyExists`] and leave it alone.
    KeepExisting,
}

/// Result of a committed write
#[derive(Debug, Clone, Default)]
pub struct AtomicWriteResult {
    pub bytes_written: u64,
    /// Number of rename retries that occurred (Windows only)
    pub rename_retry_count: u32,
}

/// Writer that publishes its output only on [`commit`](Self::commit).
#[derive(Debug)]
pub struct AtomicFileWriter {
    target: Utf8PathBuf,
    writer: BufWriter<NamedTempFile>,
    bytes_written: u64,
}

impl AtomicFileWriter {
    /// Create the temporary file beside `target`, creating parent directories as needed.
    pub fn create(target: &Utf8Path) -> Result<Self> {
        let dir = parent_dir(target);
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create parent directory: {dir}"))?;

        let temp_file = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {dir}"))?;
        debug!(target_path = %target, temp_path = %temp_file.path().display(), "opened temporary output");

        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, temp_file),
            bytes_written: 0,
        })
    }

    #[must_use]
    pub fn target(&self) -> &Utf8Path {
        &self.target
    }

    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Append `line` followed by `\n`.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"))
            .with_context(|| "Failed to write to temporary file")?;
        self.bytes_written += line.len() as u64 + 1;
        Ok(())
    }

    /// Flush, fsync and rename the temporary file onto the target.
    ///
    /// With [`ReplacePolicy::KeepExisting`] a target created in the meantime
    /// is preserved; use [`is_already_exists`] to recognise that failure.
    pub fn commit(self, policy: ReplacePolicy) -> Result<AtomicWriteResult> {
        let temp_file = self
            .writer
            .into_inner()
            .map_err(io::IntoInnerError::into_error)
            .with_context(|| "Failed to flush temporary file")?;

        temp_file
            .as_file()
            .sync_all()
            .with_context(|| "Failed to fsync temporary file")?;

        let rename_retry_count = persist(temp_file, &self.target, policy)
            .with_context(|| format!("Failed to move output into place: {}", self.target))?;

        Ok(AtomicWriteResult {
            bytes_written: self.bytes_written,
            rename_retry_count,
        })
    }
}

/// Whether `err` was caused by the target already existing.
#[must_use]
pub fn is_already_exists(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::AlreadyExists)
}

fn parent_dir(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn persist_once(
    temp_file: NamedTempFile,
    target: &Utf8Path,
    policy: ReplacePolicy,
) -> Result<(), tempfile::PersistError> {
    match policy {
        ReplacePolicy::Replace => temp_file.persist(target).map(drop),
        ReplacePolicy::KeepExisting => temp_file.persist_noclobber(target).map(drop),
    }
}

/// Rename with bounded retries while another process holds the target open.
#[cfg(target_os = "windows")]
fn persist(mut temp_file: NamedTempFile, target: &Utf8Path, policy: ReplacePolicy) -> Result<u32> {
    const MAX_RETRIES: u32 = 5;
    const INITIAL_DELAY_MS: u64 = 10;

    let mut retry_count = 0;
    loop {
        match persist_once(temp_file, target, policy) {
            Ok(()) => return Ok(retry_count),
            Err(persist_error) => {
                let retryable = persist_error.error.kind() == io::ErrorKind::PermissionDenied;
                if !retryable || retry_count >= MAX_RETRIES {
                    return Err(anyhow::Error::from(persist_error.error));
                }
                thread::sleep(Duration::from_millis(INITIAL_DELAY_MS << retry_count));
                retry_count += 1;
                temp_file = persist_error.file;
            }
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn persist(temp_file: NamedTempFile, target: &Utf8Path, policy: ReplacePolicy) -> Result<u32> {
    persist_once(temp_file, target, policy)
        .map(|()| 0)
        .map_err(|e| anyhow::Error::from(e.error))
}
