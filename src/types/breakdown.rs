use serde::Serialize;
use std::collections::BTreeMap;

pub const BASELINE_SCORE: i32 = 110;

/// Documented floor of the scoring scheme (baseline minus the maximum
/// possible deduction across all weighted controls). Fixed constant.
pub const MIN_SCORE: i32 = -203;

/// One point penalty for a non-passing, applicable control.
#[derive(Debug, Clone, Serialize)]
pub struct Deduction {
    pub control_id: String,
    pub control_title: String,
    pub family: String,
    pub weight: u32,
    pub plain_language: String,
    pub poam_credit: bool,
    pub effective_deduction: u32,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FamilyRollup {
    pub controls_total: u32,
    pub controls_passing: u32,
    pub controls_failing: u32,
    pub deduction_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn from_weight(weight: u32) -> Self {
        if weight >= 5 {
            Effort::High
        } else if weight >= 3 {
            Effort::Medium
        } else {
            Effort::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub control_id: String,
    pub control_title: String,
    pub weight: u32,
    pub effort_estimate: Effort,
    pub impact_description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PoamAdjustments {
    pub items_with_credit: u32,
    pub total_credit: u32,
}

/// Full scoring result handed verbatim to report and dashboard generators.
/// Field names are part of the downstream contract.
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub total_score: i32,
    pub baseline_score: i32,
    pub total_deductions: u32,
    pub by_family: BTreeMap<String, FamilyRollup>,
    pub deductions: Vec<Deduction>,
    pub poam_adjustments: PoamAdjustments,
    pub recommendations: Vec<Recommendation>,
}

impl Breakdown {
    /// Breakdown for an empty controls list: baseline score, nothing else.
    pub fn baseline() -> Self {
        Self {
            total_score: BASELINE_SCORE,
            baseline_score: BASELINE_SCORE,
            total_deductions: 0,
            by_family: BTreeMap::new(),
            deductions: Vec::new(),
            poam_adjustments: PoamAdjustments::default(),
            recommendations: Vec::new(),
        }
    }
}
