//! File-backed prompt store: CRUD, search, import, and export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{HubError, Result};

use super::record::PromptRecord;

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Record written; timestamps stamped.
    Saved,
    /// A record with this name exists and overwrite was not requested.
    /// Nothing was written; the caller decides whether to confirm and retry.
    Declined,
}

/// Outcome of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Outcome of a text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported,
    NotFound,
}

/// Result of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of records written.
    pub imported: usize,
    /// One message per skipped entry (invalid structure or name collision).
    pub skipped: Vec<String>,
}

/// CRUD + search + import/export over one library directory.
#[derive(Debug, Clone)]
pub struct PromptStore {
    library_dir: PathBuf,
}

impl PromptStore {
    /// Open (creating if necessary) a store over a library directory.
    pub fn open(library_dir: impl Into<PathBuf>) -> Result<Self> {
        let library_dir = library_dir.into();
        fs::create_dir_all(&library_dir)?;
        Ok(Self { library_dir })
    }

    /// The directory this store operates against.
    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.library_dir.join(format!("{name}.json"))
    }

    /// All record names, lexicographically sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&self.library_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
                .collect(),
            Err(e) => {
                tracing::warn!(dir = %self.library_dir.display(), error = %e, "cannot list library");
                Vec::new()
            }
        };
        names.sort();
        names
    }

    /// Load a record by name. `Ok(None)` is the normal not-found outcome;
    /// an unreadable or invalid file is a [`HubError::MalformedRecord`].
    pub fn load(&self, name: &str) -> Result<Option<PromptRecord>> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let record: PromptRecord =
            serde_json::from_str(&content).map_err(|e| HubError::MalformedRecord {
                path: path.clone(),
                message: e.to_string(),
            })?;
        record.validate().map_err(|message| HubError::MalformedRecord {
            path: path.clone(),
            message,
        })?;
        Ok(Some(record))
    }

    /// Save a record. With `overwrite=false` an existing name yields
    /// [`SaveOutcome::Declined`] and nothing is written — the store never
    /// silently overwrites; callers confirm and retry with `overwrite=true`.
    ///
    /// On success `modified` is stamped with the current time and `created`
    /// is stamped only if previously unset.
    pub fn save(&self, record: &mut PromptRecord, overwrite: bool) -> Result<SaveOutcome> {
        record.validate().map_err(|message| HubError::InvalidRecord {
            name: record.name.clone(),
            message,
        })?;

        let path = self.record_path(&record.name);
        if path.exists() && !overwrite {
            return Ok(SaveOutcome::Declined);
        }

        let now = Utc::now();
        if record.created.is_none() {
            record.created = Some(now);
        }
        record.modified = Some(now);

        let content = serde_json::to_string_pretty(record).map_err(|e| {
            HubError::InvalidRecord {
                name: record.name.clone(),
                message: e.to_string(),
            }
        })?;

        // Atomic write: temp file then rename, so a crash mid-write never
        // leaves a truncated record behind.
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content + "\n")?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(name = %record.name, "saved prompt record");
        Ok(SaveOutcome::Saved)
    }

    /// Delete a record. Irreversible; the caller obtains confirmation
    /// first. Deleting a missing name is [`DeleteOutcome::NotFound`], not a
    /// fault.
    pub fn delete(&self, name: &str) -> Result<DeleteOutcome> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(DeleteOutcome::NotFound);
        }
        fs::remove_file(&path)?;
        tracing::debug!(name, "deleted prompt record");
        Ok(DeleteOutcome::Deleted)
    }

    /// Names whose record matches the query (case-insensitive substring on
    /// name, category, or any tag), in `list()` order. Corrupt files are
    /// skipped with a warning, never abort the traversal.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.list()
            .into_iter()
            .filter(|name| match self.load(name) {
                Ok(Some(record)) => record.matches(query),
                Ok(None) => false,
                Err(e) => {
                    tracing::warn!(name, error = %e, "skipping unreadable record");
                    false
                }
            })
            .collect()
    }

    /// Export a record as plain text to `destination`.
    pub fn export_text(&self, name: &str, destination: &Path) -> Result<ExportOutcome> {
        let Some(record) = self.load(name)? else {
            return Ok(ExportOutcome::NotFound);
        };
        fs::write(destination, record.to_export_text())?;
        Ok(ExportOutcome::Exported)
    }

    /// Import records from a JSON file holding either a single record
    /// object or an array of them.
    ///
    /// Each entry is validated structurally; an invalid entry is skipped
    /// with a warning, not a fatal error. Name collisions are never
    /// overwritten silently — they are skipped and reported.
    pub fn import(&self, source: &Path) -> Result<ImportReport> {
        let content = fs::read_to_string(source)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| HubError::ImportParseError {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;

        let entries = match value {
            serde_json::Value::Array(items) => items,
            other => vec![other],
        };

        let mut report = ImportReport::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let mut record: PromptRecord = match serde_json::from_value(entry) {
                Ok(record) => record,
                Err(e) => {
                    let message = format!("entry {}: invalid record: {e}", index + 1);
                    tracing::warn!("{message}");
                    report.skipped.push(message);
                    continue;
                }
            };

            match self.save(&mut record, false) {
                Ok(SaveOutcome::Saved) => report.imported += 1,
                Ok(SaveOutcome::Declined) => {
                    let message = format!("'{}' already exists, skipped", record.name);
                    tracing::warn!("{message}");
                    report.skipped.push(message);
                }
                Err(e) => {
                    let message = format!("'{}': {e}", record.name);
                    tracing::warn!("{message}");
                    report.skipped.push(message);
                }
            }
        }

        Ok(report)
    }
}
