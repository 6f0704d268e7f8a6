// In-process store, lost when the process exits

use super::{
    new_id, newest_first, now_millis, NewVisualization, Saved, Visualization,
    VisualizationStore, VisualizationSummary,
};
use crate::errors::StoreError;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, Visualization>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VisualizationStore for MemoryStore {
    fn create(&mut self, record: NewVisualization) -> Result<Saved, StoreError> {
        record.validate()?;
        let viz = Visualization {
            id: new_id(),
            algorithm: record.algorithm,
            array: record.array,
            steps: record.steps,
            created_at: now_millis(),
        };
        let saved = Saved {
            id: viz.id.clone(),
            algorithm: viz.algorithm,
            created_at: viz.created_at,
        };
        self.records.insert(viz.id.clone(), viz);
        Ok(saved)
    }

    fn list(&self, limit: usize) -> Result<Vec<VisualizationSummary>, StoreError> {
        let summaries = self.records.values().map(Visualization::summary).collect();
        Ok(newest_first(summaries, limit))
    }

    fn get(&self, id: &str) -> Result<Visualization, StoreError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
