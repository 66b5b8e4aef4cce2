//! Model checkpoint inventory.
//!
//! Read-only listing of the checkpoint files under `models/checkpoints`,
//! used by the model management view. A missing or unreadable directory is
//! an empty inventory, not an error.

use std::fs;

use crate::error::{HubError, Result};
use crate::paths::{HubPaths, CHECKPOINT_EXTENSION};

/// One checkpoint file on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointFile {
    /// File name including extension.
    pub file_name: String,
    pub size_gb: f64,
    /// Coarse classification derived from the file name.
    pub kind: &'static str,
}

/// List checkpoint files, sorted by file name.
pub fn list_checkpoints(paths: &HubPaths) -> Vec<CheckpointFile> {
    let dir = paths.checkpoints_dir();
    let mut files: Vec<CheckpointFile> = match fs::read_dir(&dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext == CHECKPOINT_EXTENSION)
            })
            .filter_map(|p| {
                let file_name = p.file_name()?.to_string_lossy().into_owned();
                let size_gb = fs::metadata(&p)
                    .map(|m| m.len() as f64 / f64::from(1u32 << 30))
                    .unwrap_or(0.0);
                let kind = classify(&file_name);
                Some(CheckpointFile {
                    file_name,
                    size_gb,
                    kind,
                })
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    files
}

/// Total size of an inventory in GB.
pub fn total_size_gb(files: &[CheckpointFile]) -> f64 {
    files.iter().map(|f| f.size_gb).sum()
}

/// Outcome of a checkpoint removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Delete one checkpoint file by name. Irreversible; the caller obtains
/// confirmation first. A missing file is [`RemoveOutcome::NotFound`], not a
/// fault.
pub fn remove_checkpoint(paths: &HubPaths, file_name: &str) -> Result<RemoveOutcome> {
    if file_name.contains(['/', '\\']) {
        return Err(HubError::InvalidRecord {
            name: file_name.to_string(),
            message: "checkpoint name must not contain path separators".into(),
        });
    }

    let path = paths.checkpoints_dir().join(file_name);
    if !path.is_file() {
        return Ok(RemoveOutcome::NotFound);
    }
    fs::remove_file(&path)?;
    tracing::debug!(file_name, "removed checkpoint");
    Ok(RemoveOutcome::Removed)
}

fn classify(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.contains("xl") {
        "SDXL"
    } else if lower.contains("v1-5") || lower.contains("v15") {
        "SD 1.5"
    } else {
        "SD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_checkpoints_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        assert!(list_checkpoints(&paths).is_empty());
    }

    #[test]
    fn lists_only_checkpoint_files_sorted() {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        fs::create_dir_all(paths.checkpoints_dir()).unwrap();
        for name in ["zzz.safetensors", "aaa.safetensors", "notes.txt"] {
            fs::write(paths.checkpoints_dir().join(name), b"data").unwrap();
        }

        let files = list_checkpoints(&paths);
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["aaa.safetensors", "zzz.safetensors"]);
    }

    #[test]
    fn classification_from_file_name() {
        assert_eq!(classify("sd_xl_base_1.0.safetensors"), "SDXL");
        assert_eq!(classify("v1-5-pruned.safetensors"), "SD 1.5");
        assert_eq!(classify("anything-v3.safetensors"), "SD");
    }

    #[test]
    fn remove_checkpoint_twice_is_removed_then_not_found() {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        fs::create_dir_all(paths.checkpoints_dir()).unwrap();
        fs::write(paths.checkpoints_dir().join("old.safetensors"), b"data").unwrap();

        assert_eq!(
            remove_checkpoint(&paths, "old.safetensors").unwrap(),
            RemoveOutcome::Removed
        );
        assert_eq!(
            remove_checkpoint(&paths, "old.safetensors").unwrap(),
            RemoveOutcome::NotFound
        );
    }

    #[test]
    fn remove_checkpoint_rejects_path_separators() {
        let dir = TempDir::new().unwrap();
        let paths = HubPaths::new(dir.path());
        assert!(remove_checkpoint(&paths, "../escape.safetensors").is_err());
    }

    #[test]
    fn total_size_sums() {
        let files = vec![
            CheckpointFile {
                file_name: "a".into(),
                size_gb: 1.5,
                kind: "SD",
            },
            CheckpointFile {
                file_name: "b".into(),
                size_gb: 2.5,
                kind: "SDXL",
            },
        ];
        assert_eq!(total_size_gb(&files), 4.0);
    }
}
