use serde::Deserialize;

/// POA&M snapshot as loaded from disk. Only the fields that feed SPRS
/// credit are modeled; the rest of the remediation record stays with the
/// report tooling that owns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoamData {
    #[serde(default)]
    pub poam_items: Vec<PoamItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PoamItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub control_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub sprs_credit: bool,
}

impl PoamItem {
    /// An item earns partial credit while its remediation is still live.
    pub fn grants_credit(&self) -> bool {
        if !self.sprs_credit {
            return false;
        }
        !matches!(
            self.status.trim().to_lowercase().as_str(),
            "completed" | "cancelled"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_poam_document() {
        let data: PoamData = toml::from_str(
            r#"
[[poam_items]]
id = "POAM-001"
control_id = "3.5.3"
status = "in_progress"
sprs_credit = true
"#,
        )
        .expect("poam document should parse");

        assert_eq!(data.poam_items.len(), 1);
        assert!(data.poam_items[0].grants_credit());
    }

    #[test]
    fn completed_and_cancelled_items_grant_no_credit() {
        for status in ["completed", "cancelled", "Completed"] {
            let item = PoamItem {
                control_id: "3.5.3".to_string(),
                status: status.to_string(),
                sprs_credit: true,
                ..PoamItem::default()
            };
            assert!(!item.grants_credit(), "status {status} should not credit");
        }
    }

    #[test]
    fn credit_flag_defaults_to_false() {
        let data: PoamData = toml::from_str(
            r#"
[[poam_items]]
id = "POAM-002"
control_id = "3.1.1"
status = "in_progress"
"#,
        )
        .expect("poam document should parse");
        assert!(!data.poam_items[0].grants_credit());
    }
}
