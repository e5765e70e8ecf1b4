use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_FAMILY_SEPARATOR: &str = ".";
pub const UNASSIGNED_FAMILY: &str = "UNASSIGNED";
pub const DEFAULT_WEIGHT: u32 = 1;

/// On-disk shape of the weights document.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsDocument {
    #[serde(default = "default_separator")]
    pub family_separator: String,
    #[serde(default)]
    pub weights: Vec<RawWeightEntry>,
}

fn default_separator() -> String {
    DEFAULT_FAMILY_SEPARATOR.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWeightEntry {
    #[serde(default)]
    pub control_id: String,
    pub weight: Option<u32>,
    pub family: Option<String>,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Debug, Clone)]
pub struct ControlWeightEntry {
    pub weight: u32,
    pub family: String,
    pub rationale: String,
}

/// Read-only deduction weight lookup keyed by trimmed control id.
///
/// The table also carries the separator used to derive a family code from a
/// control id when neither the table nor the assessment supplies one. The
/// separator is a documented convention of the weights file, not a hard-coded
/// rule.
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: HashMap<String, ControlWeightEntry>,
    family_separator: String,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            family_separator: default_separator(),
        }
    }
}

impl WeightTable {
    pub fn from_document(document: WeightsDocument) -> Self {
        let separator = if document.family_separator.is_empty() {
            default_separator()
        } else {
            document.family_separator
        };

        let mut entries = HashMap::new();
        for raw in document.weights {
            let control_id = raw.control_id.trim().to_string();
            if control_id.is_empty() {
                continue;
            }
            let family = match raw.family.as_deref().map(str::trim) {
                Some(family) if !family.is_empty() => family.to_uppercase(),
                _ => derive_family(&control_id, &separator),
            };
            entries.insert(
                control_id,
                ControlWeightEntry {
                    weight: raw.weight.unwrap_or(DEFAULT_WEIGHT).max(1),
                    family,
                    rationale: raw.rationale,
                },
            );
        }

        Self {
            entries,
            family_separator: separator,
        }
    }

    pub fn get(&self, control_id: &str) -> Option<&ControlWeightEntry> {
        self.entries.get(control_id.trim())
    }

    /// Unknown controls deduct the default weight of 1.
    pub fn weight_for(&self, control_id: &str) -> u32 {
        self.get(control_id)
            .map(|entry| entry.weight)
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Family resolution order: per-control override, then the table entry,
    /// then derivation from the control id.
    pub fn family_for(&self, control_id: &str, explicit: Option<&str>) -> String {
        if let Some(family) = explicit.map(str::trim).filter(|family| !family.is_empty()) {
            return family.to_uppercase();
        }
        if let Some(entry) = self.get(control_id) {
            return entry.family.clone();
        }
        derive_family(control_id.trim(), &self.family_separator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn derive_family(control_id: &str, separator: &str) -> String {
    let head = control_id
        .split(separator)
        .next()
        .unwrap_or_default()
        .trim();
    if head.is_empty() {
        UNASSIGNED_FAMILY.to_string()
    } else {
        head.to_uppercase()
    }
}
