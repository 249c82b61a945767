//! The save-directory store for universe snapshots.
//!
//! [`UniverseStore`] is bound to one flat directory of `*.json` files
//! and consults it fresh on every operation: there is no in-memory
//! cache to keep coherent, and no locking. Concurrent saves to the same
//! filename race at the filesystem level; the last complete write wins.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;

use crate::error::{ListSkip, StoreError};
use crate::naming;
use crate::summary::UniverseSummary;

/// File-backed store for universe snapshots.
///
/// The save directory is injected at construction so callers (and
/// tests) decide where state lives; the store never computes a global
/// path of its own.
#[derive(Debug, Clone)]
pub struct UniverseStore {
    dir: PathBuf,
}

impl UniverseStore {
    /// Create a store bound to the given save directory.
    ///
    /// The directory is not touched until [`Self::ensure_dir`] or an
    /// operation runs.
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The save directory this store is bound to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the save directory (and any parents) if absent.
    ///
    /// Called once at startup so every later save has a directory to
    /// write into.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// List summaries for every readable save file, sorted by filename.
    ///
    /// Files that cannot be stat'd, read, or parsed as JSON are logged
    /// at `debug` with a typed [`ListSkip`] reason and omitted; one bad
    /// file never aborts the listing. A missing save directory yields
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] only if the directory itself cannot
    /// be enumerated.
    pub async fn list(&self) -> Result<Vec<UniverseSummary>, StoreError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut filenames = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.path().extension().and_then(OsStr::to_str) != Some("json") {
                continue;
            }
            if let Some(filename) = entry.file_name().to_str() {
                filenames.push(filename.to_owned());
            }
        }
        filenames.sort();

        let mut summaries = Vec::with_capacity(filenames.len());
        for filename in &filenames {
            match self.summarize(filename).await {
                Ok(summary) => summaries.push(summary),
                Err(skip) => {
                    tracing::debug!(filename = %filename, reason = %skip, "skipping save file in listing");
                }
            }
        }

        Ok(summaries)
    }

    /// Load the raw stored bytes for a universe, exactly as written.
    ///
    /// The content is never parsed or re-serialized, so a load returns
    /// byte-identical data even for files that are not valid JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] when the name sanitizes to
    /// nothing, [`StoreError::NotFound`] when no file exists, and
    /// [`StoreError::Io`] for any other read failure.
    pub async fn load(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let filename = naming::filename_for(name)
            .ok_or_else(|| StoreError::InvalidName(name.to_owned()))?;

        match fs::read(self.dir.join(&filename)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_owned()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Write a universe's bytes verbatim, creating or truncating the
    /// target file.
    ///
    /// A full overwrite, never a merge, and no JSON validity check:
    /// arbitrary bytes are accepted and stored as-is. The scoped write
    /// releases the file handle on every exit path, but nothing
    /// prevents a concurrent save to the same filename from racing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] when the name sanitizes to
    /// nothing (no file is created), or [`StoreError::Io`] when the
    /// write fails.
    pub async fn save(&self, name: &str, body: &[u8]) -> Result<(), StoreError> {
        let filename = naming::filename_for(name)
            .ok_or_else(|| StoreError::InvalidName(name.to_owned()))?;

        fs::write(self.dir.join(&filename), body).await?;

        tracing::debug!(filename, bytes = body.len(), "wrote universe save");
        Ok(())
    }

    /// Delete a universe's save file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] when the name sanitizes to
    /// nothing, [`StoreError::NotFound`] when no file exists, and
    /// [`StoreError::Io`] for any other removal failure.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let filename = naming::filename_for(name)
            .ok_or_else(|| StoreError::InvalidName(name.to_owned()))?;

        match fs::remove_file(self.dir.join(&filename)).await {
            Ok(()) => {
                tracing::debug!(filename, "deleted universe save");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_owned()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Build the summary for one save file, or a skip reason.
    async fn summarize(&self, filename: &str) -> Result<UniverseSummary, ListSkip> {
        let path = self.dir.join(filename);

        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| ListSkip::Stat(e.to_string()))?;
        let modified = metadata
            .modified()
            .map_err(|e| ListSkip::Stat(e.to_string()))?;

        let bytes = fs::read(&path)
            .await
            .map_err(|e| ListSkip::Unreadable(e.to_string()))?;
        let document: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ListSkip::InvalidJson(e.to_string()))?;

        Ok(UniverseSummary::from_stored(
            filename,
            &document,
            DateTime::<Utc>::from(modified),
            metadata.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> UniverseStore {
        UniverseStore::new(dir.path().to_path_buf())
    }

    #[tokio::test]
    async fn ensure_dir_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UniverseStore::new(dir.path().join("saves"));

        store.ensure_dir().await.unwrap();
        assert!(dir.path().join("saves").is_dir());
    }

    #[tokio::test]
    async fn save_then_load_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let payload = br#"{"tick": 3, "creatures": []}"#;
        store.save("Alpha World", payload).await.unwrap();

        let loaded = store.load("Alpha World").await.unwrap();
        assert_eq!(loaded, payload);
    }

    #[tokio::test]
    async fn invalid_name_is_rejected_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let result = store.save("!!!", b"{}").await;
        assert!(matches!(result, Err(StoreError::InvalidName(_))));

        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.next().is_none());
    }

    #[tokio::test]
    async fn colliding_names_overwrite_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("My World", b"first").await.unwrap();
        store.save("My_World", b"second").await.unwrap();

        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 1);
        assert_eq!(store.load("My World").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn delete_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("Doomed", b"{}").await.unwrap();
        store.delete("Doomed").await.unwrap();

        assert!(matches!(
            store.load("Doomed").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_of_missing_universe_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(matches!(
            store.delete("Never Saved").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("!!!").await,
            Err(StoreError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn list_is_sorted_and_skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save("Beta", br#"{"tick": 5, "maxGeneration": 2, "creatures": [{}, {}]}"#)
            .await
            .unwrap();
        store.save("Alpha", br#"{"creatures": [{}]}"#).await.unwrap();
        std::fs::write(dir.path().join("broken.json"), "not json {").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let summaries = store.list().await.unwrap();
        let filenames: Vec<&str> = summaries.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(filenames, vec!["Alpha.json", "Beta.json"]);

        assert_eq!(summaries.first().unwrap().population, 1);
        let beta = summaries.last().unwrap();
        assert_eq!(beta.tick, 5);
        assert_eq!(beta.generation, 2);
        assert_eq!(beta.population, 2);
        assert!(beta.file_size > 0);

        // The malformed file is still loadable byte-for-byte.
        let raw = store.load("broken").await.unwrap();
        assert_eq!(raw, b"not json {");
    }

    #[tokio::test]
    async fn list_of_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = UniverseStore::new(dir.path().join("nowhere"));

        assert!(store.list().await.unwrap().is_empty());
    }
}
