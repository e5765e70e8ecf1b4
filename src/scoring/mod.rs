pub mod credit;

use crate::scoring::credit::CreditSet;
use crate::types::assessment::AssessmentResults;
use crate::types::breakdown::{
    Breakdown, Deduction, Effort, FamilyRollup, PoamAdjustments, Recommendation, BASELINE_SCORE,
    MIN_SCORE,
};
use crate::types::weights::WeightTable;
use std::collections::BTreeMap;
use tracing::debug;

/// Plain-language deduction summary. The wording is scanned by downstream
/// narrative and glossary tooling, so it must stay stable.
pub fn format_deduction(control_id: &str, weight: u32, control_title: Option<&str>) -> String {
    let title = control_title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(|title| format!(" ({title})"))
        .unwrap_or_default();
    format!("Control {control_id}{title} is not fully implemented: -{weight} points")
}

/// The scoring engine: a pure function of an assessment snapshot plus the
/// injected weight table and credit set. No caching, no I/O, no shared
/// state between calls.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: WeightTable,
    credits: CreditSet,
}

impl Scorer {
    pub fn new(weights: WeightTable, credits: CreditSet) -> Self {
        Self { weights, credits }
    }

    /// Swap in freshly loaded configuration (tests, config changes).
    pub fn reload(&mut self, weights: WeightTable, credits: CreditSet) {
        self.weights = weights;
        self.credits = credits;
    }

    pub fn score(&self, assessment: &AssessmentResults) -> i32 {
        self.compute_breakdown(assessment).total_score
    }

    /// Single pass over the assessed controls, input order preserved for
    /// the deductions list. Never fails: a missing or empty controls list
    /// yields a baseline breakdown.
    pub fn compute_breakdown(&self, assessment: &AssessmentResults) -> Breakdown {
        if assessment.controls.is_empty() {
            return Breakdown::baseline();
        }

        let mut by_family: BTreeMap<String, FamilyRollup> = BTreeMap::new();
        let mut deductions: Vec<Deduction> = Vec::new();
        let mut recommendations: Vec<Recommendation> = Vec::new();

        for control in &assessment.controls {
            let family = self
                .weights
                .family_for(&control.control_id, control.family_override.as_deref());
            let weight = self.weights.weight_for(&control.control_id);

            let rollup = by_family.entry(family.clone()).or_default();
            rollup.controls_total += 1;

            if control.status.is_pass() {
                rollup.controls_passing += 1;
                continue;
            }
            if control.status.is_skipped() {
                // not_applicable counts toward the family total only
                continue;
            }

            rollup.controls_failing += 1;

            let poam_credit = self.credits.contains(&control.control_id);
            let effective_deduction = if poam_credit {
                weight.div_ceil(2)
            } else {
                weight
            };
            rollup.deduction_points += effective_deduction;

            debug!(
                control_id = %control.control_id,
                weight,
                poam_credit,
                effective_deduction,
                "control deduction"
            );

            deductions.push(Deduction {
                control_id: control.control_id.clone(),
                control_title: control.control_title.clone(),
                family,
                weight,
                plain_language: format_deduction(
                    &control.control_id,
                    weight,
                    Some(control.control_title.as_str()),
                ),
                poam_credit,
                effective_deduction,
                status: control.status.as_str().to_string(),
            });

            recommendations.push(Recommendation {
                control_id: control.control_id.clone(),
                control_title: control.control_title.clone(),
                weight,
                effort_estimate: Effort::from_weight(weight),
                impact_description: format!(
                    "Implementing control {} can recover up to {} SPRS points.",
                    control.control_id, weight
                ),
            });
        }

        let total_deductions: u32 = deductions
            .iter()
            .map(|deduction| deduction.effective_deduction)
            .sum();
        let total_credit: u32 = deductions
            .iter()
            .map(|deduction| deduction.weight - deduction.effective_deduction)
            .sum();
        let items_with_credit = deductions
            .iter()
            .filter(|deduction| deduction.poam_credit)
            .count() as u32;

        let total_score =
            (BASELINE_SCORE - total_deductions as i32).clamp(MIN_SCORE, BASELINE_SCORE);

        // stable sort keeps discovery order for equal weights
        recommendations.sort_by(|a, b| b.weight.cmp(&a.weight));

        Breakdown {
            total_score,
            baseline_score: BASELINE_SCORE,
            total_deductions,
            by_family,
            deductions,
            poam_adjustments: PoamAdjustments {
                items_with_credit,
                total_credit,
            },
            recommendations,
        }
    }
}
