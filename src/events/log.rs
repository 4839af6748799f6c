//! File-backed event log with size-based rotation.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::events::EventLog;

/// Append-only event log writing one timestamped line per event.
///
/// When the file grows past `max_bytes` it is renamed to `<path>.1`
/// (replacing the previous backup) and a fresh file is started.
pub struct FileEventLog {
    path: PathBuf,
    max_bytes: u64,
    file: Mutex<File>,
}

impl FileEventLog {
    /// Open (or create) the event log at `path`.
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = Self::open_append(&path)?;
        Ok(Self {
            path,
            max_bytes,
            file: Mutex::new(file),
        })
    }

    fn open_append(path: &Path) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Append one line, rotating first if the size budget is exceeded.
    /// Failures are reported through tracing and swallowed.
    fn append(&self, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = format!("[{}] {}\n", timestamp, message);

        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Ok(metadata) = guard.metadata() {
            if metadata.len() >= self.max_bytes {
                if let Err(e) = self.rotate(&mut guard) {
                    tracing::warn!(path = %self.path.display(), error = %e, "Event log rotation failed");
                }
            }
        }

        if let Err(e) = guard.write_all(line.as_bytes()) {
            tracing::warn!(path = %self.path.display(), error = %e, "Event log write failed");
        }
    }

    fn rotate(&self, file: &mut File) -> std::io::Result<()> {
        let backup = self.path.with_extension("log.1");
        std::fs::rename(&self.path, backup)?;
        *file = Self::open_append(&self.path)?;
        Ok(())
    }
}

impl EventLog for FileEventLog {
    fn log_status_change(&self, id: Uuid, old_code: &str, new_code: &str) {
        self.append(&format!(
            "Availability of source {} changed from {} to {}.",
            id, old_code, new_code
        ));
    }

    fn log_eviction(&self, id: Uuid, threshold: u32) {
        self.append(&format!(
            "Source {} exceeded {} consecutive failed checks and was removed.",
            id, threshold
        ));
    }
}

/// Event log that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventLog;

impl EventLog for NullEventLog {
    fn log_status_change(&self, _id: Uuid, _old_code: &str, _new_code: &str) {}

    fn log_eviction(&self, _id: Uuid, _threshold: u32) {}
}
