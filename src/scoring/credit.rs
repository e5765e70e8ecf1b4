use crate::types::poam::PoamData;
use std::collections::HashSet;

/// Control ids currently eligible for partial SPRS credit, derived fresh
/// from a POA&M snapshot each scoring run.
#[derive(Debug, Clone, Default)]
pub struct CreditSet {
    controls: HashSet<String>,
}

impl CreditSet {
    pub fn from_poam(poam: &PoamData) -> Self {
        let mut controls = HashSet::new();
        for item in &poam.poam_items {
            if !item.grants_credit() {
                continue;
            }
            let control_id = item.control_id.trim();
            if !control_id.is_empty() {
                controls.insert(control_id.to_string());
            }
        }
        Self { controls }
    }

    pub fn contains(&self, control_id: &str) -> bool {
        self.controls.contains(control_id.trim())
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
