//! Guestbook entry store
//!
//! Owns the flat JSON entries file: read-all plus append with the
//! duplicate-submission check. Append serializes its whole read-check-write
//! span behind an exclusive per-file lock so racing submissions cannot lose
//! writes or interleave partial file contents.

mod lock;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

use crate::error::{ErrorKind, ServiceError};

/// One guestbook entry: the three required fields plus any extra
/// client-supplied fields, all passed through untouched.
pub type Entry = serde_json::Map<String, Value>;

/// On-disk shape of the entries file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuestbookFile {
    pub entries: Vec<Entry>,
}

/// File-backed entry store. Holds no per-file state beyond the shared lock
/// registry; the filename comes from the per-request config.
#[derive(Debug, Clone, Copy)]
pub struct EntryStore {
    lock_timeout: Duration,
}

impl EntryStore {
    pub const fn new(lock_timeout: Duration) -> Self {
        Self { lock_timeout }
    }

    /// Read the whole guestbook. `None` when the file does not exist yet.
    pub async fn read_all(&self, filename: &str) -> Result<Option<GuestbookFile>, ServiceError> {
        if !Path::new(filename).exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(filename)
            .await
            .map_err(|e| ErrorKind::Io(e.to_string()))?;
        let parsed: GuestbookFile =
            serde_json::from_str(&raw).map_err(|e| ErrorKind::CorruptStore(e.to_string()))?;
        Ok(Some(parsed))
    }

    /// Append one entry, rejecting duplicates unless allowed.
    ///
    /// The re-read, duplicate scan, and rewrite all run under the per-file
    /// lock; the guard drops on every exit path. Acquisition waits at most
    /// the configured timeout before failing with `StoreBusy`.
    pub async fn append(
        &self,
        filename: &str,
        entry: Entry,
        allow_duplicates: bool,
    ) -> Result<(), ServiceError> {
        let _guard = lock::acquire(filename, self.lock_timeout)
            .await
            .ok_or(ErrorKind::StoreBusy)?;

        let mut book = self.read_all(filename).await?.unwrap_or_default();
        if !allow_duplicates && has_duplicate(&book, &entry) {
            return Err(ErrorKind::DuplicateSubmission.into());
        }
        book.entries.push(entry);

        let json = serde_json::to_string_pretty(&book)
            .map_err(|e| ErrorKind::Io(e.to_string()))?;
        fs::write(filename, json)
            .await
            .map_err(|e| ErrorKind::Io(e.to_string()))?;
        Ok(())
    }
}

/// Duplicate means an existing entry whose `name` and `email` both exactly
/// string-match the incoming entry. Case-sensitive, no normalization.
fn has_duplicate(book: &GuestbookFile, entry: &Entry) -> bool {
    let (Some(name), Some(email)) = (field_str(entry, "name"), field_str(entry, "email")) else {
        return false;
    };
    book.entries
        .iter()
        .any(|e| field_str(e, "name") == Some(name) && field_str(e, "email") == Some(email))
}

fn field_str<'a>(entry: &'a Entry, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
