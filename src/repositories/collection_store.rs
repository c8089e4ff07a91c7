// src/repositories/collection_store.rs
//
// Collection persistence as a JSON array on disk.
//
// RULES:
// - An empty collection is never written
// - Filenames always end in `.json`
// - Writes go through a temp file + rename, so readers never see a partial file

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::domain::Record;
use crate::error::{AppError, AppResult};

pub const COLLECTION_EXTENSION: &str = ".json";

pub trait CollectionStore: Send + Sync {
    /// Write `records` to `filename` (normalized), replacing any existing file.
    /// Returns the path actually written.
    fn save(&self, records: &[Record], filename: &str) -> AppResult<PathBuf>;

    /// Read the records stored at `filename` (normalized), in file order.
    fn load(&self, filename: &str) -> AppResult<Vec<Record>>;
}

/// Appends `.json` unless the name already ends with exactly that suffix.
pub fn normalize_filename(filename: &str) -> String {
    if filename.ends_with(COLLECTION_EXTENSION) {
        filename.to_string()
    } else {
        format!("{}{}", filename, COLLECTION_EXTENSION)
    }
}

pub struct JsonCollectionStore {
    base_dir: Option<PathBuf>,
}

impl JsonCollectionStore {
    /// Store resolving relative names against the working directory
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Store resolving relative names against `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, filename: &str) -> AppResult<PathBuf> {
        if filename.trim().is_empty() {
            return Err(AppError::Validation(
                "Filename cannot be empty".to_string(),
            ));
        }

        let path = PathBuf::from(normalize_filename(filename));
        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        })
    }

    fn write_atomically(path: &Path, records: &[Record]) -> AppResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = Self::temp_file_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, records).map_err(std::io::Error::from)?;
        tmp.write_all(b"\n")?;

        // An overwritten file keeps its mode
        if let Ok(existing) = fs::metadata(path) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }

        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }

    // Same mode a plain create would get (0666 less umask), not tempfile's 0600.
    #[cfg(unix)]
    fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
        use std::os::unix::fs::PermissionsExt;

        tempfile::Builder::new()
            .permissions(fs::Permissions::from_mode(0o666))
            .tempfile_in(dir)
    }

    #[cfg(not(unix))]
    fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
        NamedTempFile::new_in(dir)
    }
}

impl Default for JsonCollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionStore for JsonCollectionStore {
    fn save(&self, records: &[Record], filename: &str) -> AppResult<PathBuf> {
        if records.is_empty() {
            return Err(AppError::Validation(
                "Cannot save an empty collection".to_string(),
            ));
        }

        let path = self.resolve(filename)?;
        Self::write_atomically(&path, records)?;

        info!("Saved {} records to {}", records.len(), path.display());
        Ok(path)
    }

    fn load(&self, filename: &str) -> AppResult<Vec<Record>> {
        let path = self.resolve(filename)?;
        if !path.is_file() {
            return Err(AppError::NotFound(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let records: Vec<Record> = serde_json::from_str(&content).map_err(|e| {
            AppError::Parse(format!("Invalid collection file {}: {}", path.display(), e))
        })?;

        info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}
