use crate::types::breakdown::Breakdown;

pub fn to_json(breakdown: &Breakdown) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::breakdown::BASELINE_SCORE;

    #[test]
    fn json_breakdown_exposes_contract_fields() {
        let breakdown = Breakdown::baseline();
        let rendered = to_json(&breakdown).expect("json should serialize");
        assert!(rendered.contains(&format!("\"total_score\": {BASELINE_SCORE}")));
        assert!(rendered.contains("\"baseline_score\": 110"));
        assert!(rendered.contains("\"by_family\""));
        assert!(rendered.contains("\"poam_adjustments\""));
        assert!(rendered.contains("\"items_with_credit\": 0"));
    }
}
