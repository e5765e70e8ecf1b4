use crate::types::poam::PoamData;
use crate::types::weights::{WeightTable, WeightsDocument};
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_WEIGHTS_FILE: &str = "data/sprs_weights.toml";
pub const DEFAULT_POAM_FILE: &str = "data/poam.toml";

/// Load the control weight table. A missing, unreadable, or malformed
/// document degrades to an empty table: every control then scores with the
/// default weight of 1 and a derived family. Never a hard error.
pub fn load_weight_table(path: Option<&Path>) -> WeightTable {
    let source = path.unwrap_or_else(|| Path::new(DEFAULT_WEIGHTS_FILE));
    if !source.exists() {
        warn!(
            "weights file {} not found; scoring with default weights",
            source.display()
        );
        return WeightTable::default();
    }

    let content = match std::fs::read_to_string(source) {
        Ok(content) => content,
        Err(error) => {
            warn!(
                "weights file {} unreadable ({error}); scoring with default weights",
                source.display()
            );
            return WeightTable::default();
        }
    };

    match toml::from_str::<WeightsDocument>(&content) {
        Ok(document) => {
            let table = WeightTable::from_document(document);
            info!("loaded {} control weights from {}", table.len(), source.display());
            table
        }
        Err(error) => {
            warn!(
                "weights file {} malformed ({error}); scoring with default weights",
                source.display()
            );
            WeightTable::default()
        }
    }
}

/// Load the POA&M snapshot, defaulting to an empty item list on any
/// failure. Absence of the file is the normal no-remediation case.
pub fn load_poam(path: Option<&Path>) -> PoamData {
    let source = path.unwrap_or_else(|| Path::new(DEFAULT_POAM_FILE));
    if !source.exists() {
        return PoamData::default();
    }

    let content = match std::fs::read_to_string(source) {
        Ok(content) => content,
        Err(error) => {
            warn!(
                "poam file {} unreadable ({error}); scoring without credit",
                source.display()
            );
            return PoamData::default();
        }
    };

    match toml::from_str::<PoamData>(&content) {
        Ok(data) => data,
        Err(error) => {
            warn!(
                "poam file {} malformed ({error}); scoring without credit",
                source.display()
            );
            PoamData::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_weights_file_yields_empty_table() {
        let dir = TempDir::new().expect("temp dir should be created");
        let table = load_weight_table(Some(&dir.path().join("absent.toml")));
        assert!(table.is_empty());
        assert_eq!(table.weight_for("3.5.3"), 1);
    }

    #[test]
    fn malformed_weights_file_yields_empty_table() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("weights.toml");
        fs::write(&path, "weights = 'not a list").expect("weights file should write");
        assert!(load_weight_table(Some(&path)).is_empty());
    }

    #[test]
    fn weights_file_round_trips() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("weights.toml");
        fs::write(
            &path,
            r#"
[[weights]]
control_id = "3.5.3"
weight = 5
family = "IA"
rationale = "MFA is a high-value deduction"
"#,
        )
        .expect("weights file should write");

        let table = load_weight_table(Some(&path));
        assert_eq!(table.weight_for("3.5.3"), 5);
        assert_eq!(
            table.get("3.5.3").map(|entry| entry.rationale.as_str()),
            Some("MFA is a high-value deduction")
        );
    }

    #[test]
    fn missing_poam_file_yields_empty_items() {
        let dir = TempDir::new().expect("temp dir should be created");
        let data = load_poam(Some(&dir.path().join("absent.toml")));
        assert!(data.poam_items.is_empty());
    }

    #[test]
    fn malformed_poam_file_yields_empty_items() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("poam.toml");
        fs::write(&path, "[[poam_items").expect("poam file should write");
        assert!(load_poam(Some(&path)).poam_items.is_empty());
    }
}
