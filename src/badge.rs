use crate::types::assessment::AssessmentResults;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::path::Path;

/// Total used for the badge denominator when the assessment carries no
/// applicable controls (the full NIST 800-171 control count).
pub const FALLBACK_CONTROLS_TOTAL: u32 = 110;

/// Payload consumed by the README badge endpoint. The field set and color
/// names are part of the downstream contract.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeData {
    pub sprs_score: i32,
    pub sprs_color: &'static str,
    pub last_assessment: String,
    pub controls_passing: u32,
    pub controls_total: u32,
    pub generated_at: String,
}

pub fn build_badge_data(
    assessment: &AssessmentResults,
    total_score: i32,
    source: Option<&Path>,
    now: DateTime<Utc>,
) -> BadgeData {
    let (controls_passing, controls_total) = applicable_counts(assessment);
    // badge displays 0..=110 even though the raw score can go negative
    let sprs_score = total_score.clamp(0, 110);

    BadgeData {
        sprs_score,
        sprs_color: sprs_color(sprs_score),
        last_assessment: last_assessment_date(assessment, source, now),
        controls_passing,
        controls_total,
        generated_at: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }
}

fn sprs_color(score: i32) -> &'static str {
    if score >= 100 {
        "green"
    } else if score >= 80 {
        "yellow"
    } else {
        "red"
    }
}

fn applicable_counts(assessment: &AssessmentResults) -> (u32, u32) {
    let applicable: Vec<_> = assessment
        .controls
        .iter()
        .filter(|control| !control.status.is_skipped())
        .collect();
    let total = applicable.len() as u32;
    if total == 0 {
        return (0, FALLBACK_CONTROLS_TOTAL);
    }
    let passing = applicable
        .iter()
        .filter(|control| control.status.is_pass())
        .count() as u32;
    (passing, total)
}

fn last_assessment_date(
    assessment: &AssessmentResults,
    source: Option<&Path>,
    now: DateTime<Utc>,
) -> String {
    let timestamp = assessment.timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.date_naive().to_string();
    }

    if let Some(stem) = source
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
    {
        if NaiveDate::parse_from_str(stem, "%Y-%m-%d").is_ok() {
            return stem.to_string();
        }
    }

    now.date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::credit::CreditSet;
    use crate::scoring::Scorer;
    use crate::types::assessment::{ControlRecord, ControlStatus};
    use crate::types::weights::WeightTable;
    use chrono::TimeZone;

    fn control(control_id: &str, status: &str) -> ControlRecord {
        ControlRecord {
            control_id: control_id.to_string(),
            status: ControlStatus::parse(status),
            control_title: String::new(),
            family_override: Some("AC".to_string()),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 12, 0, 0).single().expect("timestamp should be valid")
    }

    fn badge_for(assessment: &AssessmentResults, source: Option<&Path>) -> BadgeData {
        let scorer = Scorer::new(WeightTable::default(), CreditSet::default());
        build_badge_data(assessment, scorer.score(assessment), source, fixed_now())
    }

    #[test]
    fn color_thresholds() {
        assert_eq!(sprs_color(110), "green");
        assert_eq!(sprs_color(100), "green");
        assert_eq!(sprs_color(99), "yellow");
        assert_eq!(sprs_color(80), "yellow");
        assert_eq!(sprs_color(79), "red");
        assert_eq!(sprs_color(0), "red");
    }

    #[test]
    fn counts_exclude_not_applicable() {
        let assessment = AssessmentResults {
            timestamp: "2026-02-15T00:00:00Z".to_string(),
            controls: vec![
                control("3.1.1", "pass"),
                control("3.1.2", "fail"),
                control("3.1.3", "not_applicable"),
            ],
            ..AssessmentResults::default()
        };

        let badge = badge_for(&assessment, None);
        assert_eq!(badge.controls_passing, 1);
        assert_eq!(badge.controls_total, 2);
        assert_eq!(badge.last_assessment, "2026-02-15");
    }

    #[test]
    fn empty_assessment_falls_back_to_full_control_count() {
        let assessment = AssessmentResults::default();
        let badge = badge_for(&assessment, None);
        assert_eq!(badge.controls_passing, 0);
        assert_eq!(badge.controls_total, FALLBACK_CONTROLS_TOTAL);
        assert_eq!(badge.sprs_score, 110);
        assert_eq!(badge.sprs_color, "green");
    }

    #[test]
    fn date_falls_back_to_source_stem_then_today() {
        let assessment = AssessmentResults {
            timestamp: "not a timestamp".to_string(),
            ..AssessmentResults::default()
        };

        let badge = badge_for(&assessment, Some(Path::new("history/2026-01-31.json")));
        assert_eq!(badge.last_assessment, "2026-01-31");

        let badge = badge_for(&assessment, Some(Path::new("history/latest.json")));
        assert_eq!(badge.last_assessment, "2026-02-20");
    }

    #[test]
    fn negative_scores_display_as_zero_and_red() {
        let mut controls = Vec::new();
        for index in 0..150 {
            controls.push(control(&format!("3.1.{index}"), "fail"));
        }
        let assessment = AssessmentResults {
            controls,
            ..AssessmentResults::default()
        };

        let badge = badge_for(&assessment, None);
        assert_eq!(badge.sprs_score, 0);
        assert_eq!(badge.sprs_color, "red");
    }
}
