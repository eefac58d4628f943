// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Append-only record store backed by a single JSON file.
//!
//! The slot holds a JSON-encoded array of [`FormRecord`] objects. It is read
//! and parsed on demand and written back whole after each append. An absent
//! or corrupt slot is treated as empty, never as an error: every read path
//! must leave the caller with a usable (possibly empty) record list.
//!
//! Concurrent writers (several app instances on the same slot) race on the
//! read-modify-write cycle; the last writer wins and earlier appends in the
//! same window are lost. Accepted limitation, no locking.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::record::FormRecord;

/// File name of the storage slot inside the app storage directory.
const SLOT_FILE_NAME: &str = "form_records.json";

/// Handle to the single named storage slot.
#[derive(Clone, Debug)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Store reading and writing the given slot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform's per-app storage directory, falling back to
    /// the working directory when none is available.
    pub fn at_default_location() -> Self {
        let dir = eframe::storage_dir("FormVault").unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(SLOT_FILE_NAME))
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored records in insertion order.
    ///
    /// A missing, unreadable, or malformed slot yields an empty list.
    pub fn load(&self) -> Vec<FormRecord> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Append a record to the slot.
    ///
    /// The record is normalized (email lower-cased) and the whole sequence is
    /// written back in a single overwrite. Duplicates are retained.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot file cannot be written.
    pub fn append(&self, record: FormRecord) -> Result<()> {
        let mut records = self.load();
        records.push(record.normalized());
        self.write_all(&records)
    }

    /// Remove the slot entirely. External reset path; a subsequent
    /// [`RecordStore::load()`] returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing slot file cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to clear record store at {:?}", self.path)
            }),
        }
    }

    fn write_all(&self, records: &[FormRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory {:?}", parent)
            })?;
        }
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write record store at {:?}", self.path))
    }
}
