use crate::types::breakdown::Breakdown;

pub fn to_markdown(breakdown: &Breakdown) -> String {
    let mut output = String::new();
    output.push_str("# SPRS Breakdown\n\n");
    output.push_str(&format!(
        "Total score: {} / {}\n\n",
        breakdown.total_score, breakdown.baseline_score
    ));
    output.push_str(&format!(
        "Total deductions: {}\n\n",
        breakdown.total_deductions
    ));

    output.push_str("## Family Rollup\n\n");
    if breakdown.by_family.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Family | Total | Passing | Failing | Deduction points |\n");
        output.push_str("| --- | --- | --- | --- | --- |\n");
        for (family, rollup) in &breakdown.by_family {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                family,
                rollup.controls_total,
                rollup.controls_passing,
                rollup.controls_failing,
                rollup.deduction_points
            ));
        }
        output.push('\n');
    }

    output.push_str("## Deductions\n\n");
    if breakdown.deductions.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for deduction in &breakdown.deductions {
            let credit = if deduction.poam_credit {
                format!(" (POA&M credit, -{} effective)", deduction.effective_deduction)
            } else {
                String::new()
            };
            output.push_str(&format!("- {}{}\n", deduction.plain_language, credit));
        }
        output.push('\n');
    }

    output.push_str("## POA&M Adjustments\n\n");
    output.push_str(&format!(
        "- items with credit: {}\n- total credit: {}\n\n",
        breakdown.poam_adjustments.items_with_credit, breakdown.poam_adjustments.total_credit
    ));

    output.push_str("## Recommendations\n\n");
    if breakdown.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &breakdown.recommendations {
            output.push_str(&format!(
                "- {} (effort: {}): {}\n",
                recommendation.control_id,
                recommendation.effort_estimate.as_str(),
                recommendation.impact_description
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::breakdown::{Deduction, Effort, FamilyRollup, Recommendation};

    fn sample_breakdown() -> Breakdown {
        let mut breakdown = Breakdown::baseline();
        breakdown.total_score = 104;
        breakdown.total_deductions = 6;
        breakdown.by_family.insert(
            "IA".to_string(),
            FamilyRollup {
                controls_total: 1,
                controls_passing: 0,
                controls_failing: 1,
                deduction_points: 3,
            },
        );
        breakdown.deductions.push(Deduction {
            control_id: "3.5.3".to_string(),
            control_title: "MFA".to_string(),
            family: "IA".to_string(),
            weight: 5,
            plain_language: "Control 3.5.3 (MFA) is not fully implemented: -5 points".to_string(),
            poam_credit: true,
            effective_deduction: 3,
            status: "fail".to_string(),
        });
        breakdown.poam_adjustments.items_with_credit = 1;
        breakdown.poam_adjustments.total_credit = 2;
        breakdown.recommendations.push(Recommendation {
            control_id: "3.5.3".to_string(),
            control_title: "MFA".to_string(),
            weight: 5,
            effort_estimate: Effort::High,
            impact_description: "Implementing control 3.5.3 can recover up to 5 SPRS points."
                .to_string(),
        });
        breakdown
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_breakdown());
        assert!(rendered.contains("# SPRS Breakdown"));
        assert!(rendered.contains("Total score: 104 / 110"));
        assert!(rendered.contains("## Family Rollup"));
        assert!(rendered.contains("| IA | 1 | 0 | 1 | 3 |"));
        assert!(rendered.contains("(POA&M credit, -3 effective)"));
        assert!(rendered.contains("- 3.5.3 (effort: high)"));
    }

    #[test]
    fn clean_breakdown_renders_none_markers() {
        let rendered = to_markdown(&Breakdown::baseline());
        assert!(rendered.contains("Total score: 110 / 110"));
        assert!(rendered.contains("- none"));
    }
}
