use std::path::{Path, PathBuf};

use crate::types::StudentRecord;

/// Anything that can hand the query pipeline a read-only snapshot of the
/// current record collection.
pub trait RecordSource: Send + Sync {
    fn snapshot(&self) -> anyhow::Result<Vec<StudentRecord>>;
}

impl RecordSource for Vec<StudentRecord> {
    fn snapshot(&self) -> anyhow::Result<Vec<StudentRecord>> { Ok(self.clone()) }
}

/// Records exported by the host as a JSON array (camelCase fields; `cgpa`
/// is accepted for `score`). Re-read on every snapshot.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl RecordSource for JsonFileSource {
    fn snapshot(&self) -> anyhow::Result<Vec<StudentRecord>> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", self.path.display(), e))?;
        let records: Vec<StudentRecord> = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse '{}': {}", self.path.display(), e))?;
        Ok(records)
    }
}
