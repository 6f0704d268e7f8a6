//! Directory-backed store: one pretty-printed JSON document per record
//!
//! Records live at `<dir>/<id>.json`. Writes go through a temp file in the
//! same directory and are renamed into place, so a crash never leaves a
//! half-written document behind. Files that fail to parse are skipped by
//! `list` and reported by `get`.

use super::{
    new_id, newest_first, now_millis, NewVisualization, Saved, Visualization,
    VisualizationStore, VisualizationSummary,
};
use crate::errors::StoreError;
use std::fs;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "opened visualization store");
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for `id`, or `None` if the id could not have been issued by us
    fn record_path(&self, id: &str) -> Option<PathBuf> {
        let well_formed = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        well_formed.then(|| self.dir.join(format!("{id}.{EXTENSION}")))
    }

    fn read_record(path: &Path) -> Result<Visualization, StoreError> {
        let file = fs::File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn write_record(&self, path: &Path, viz: &Visualization) -> Result<(), StoreError> {
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(temp.as_file_mut(), viz)?;
        temp.as_file_mut().write_all(b"\n")?;
        temp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl VisualizationStore for FileStore {
    fn create(&mut self, record: NewVisualization) -> Result<Saved, StoreError> {
        record.validate()?;
        let viz = Visualization {
            id: new_id(),
            algorithm: record.algorithm,
            array: record.array,
            steps: record.steps,
            created_at: now_millis(),
        };
        let path = self
            .record_path(&viz.id)
            .ok_or_else(|| StoreError::not_found(viz.id.clone()))?;
        self.write_record(&path, &viz)?;
        tracing::info!(id = %viz.id, algorithm = %viz.algorithm, steps = viz.steps.len(), "saved visualization");
        Ok(Saved {
            id: viz.id,
            algorithm: viz.algorithm,
            created_at: viz.created_at,
        })
    }

    fn list(&self, limit: usize) -> Result<Vec<VisualizationSummary>, StoreError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            match Self::read_record(&path) {
                Ok(viz) => summaries.push(viz.summary()),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable record");
                }
            }
        }
        Ok(newest_first(summaries, limit))
    }

    fn get(&self, id: &str) -> Result<Visualization, StoreError> {
        let path = self
            .record_path(id)
            .filter(|p| p.is_file())
            .ok_or_else(|| StoreError::not_found(id))?;
        Self::read_record(&path)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let path = self
            .record_path(id)
            .filter(|p| p.is_file())
            .ok_or_else(|| StoreError::not_found(id))?;
        fs::remove_file(&path)?;
        tracing::info!(id, "deleted visualization");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_rejects_traversal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.record_path("../etc/passwd").is_none());
        assert!(store.record_path("").is_none());
        assert_eq!(
            store.record_path("abc123"),
            Some(dir.path().join("abc123.json"))
        );
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }
}
