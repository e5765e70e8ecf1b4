use crate::error::{Result, SprsError};
use crate::types::assessment::AssessmentResults;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Latest assessment snapshot in a history directory. Snapshots are
/// date-stamped JSON files, so the lexically last filename is the newest.
pub fn latest_assessment(history_dir: &Path) -> Option<PathBuf> {
    let mut snapshots: Vec<PathBuf> = WalkDir::new(history_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "json"))
        .collect();
    snapshots.sort();
    snapshots.pop()
}

/// Read and parse an assessment document through the validated parse step.
pub fn load_assessment(path: &Path) -> Result<AssessmentResults> {
    if !path.exists() {
        return Err(SprsError::AssessmentNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    if !value.is_object() {
        return Err(SprsError::InvalidAssessment(format!(
            "expected a JSON object: {}",
            path.display()
        )));
    }

    let assessment = AssessmentResults::from_value(&value);
    info!(
        "loaded assessment {} with {} controls ({} dropped)",
        path.display(),
        assessment.controls.len(),
        assessment.dropped_records
    );
    Ok(assessment)
}
