use serde_json::Value;
use tracing::warn;

/// Normalized status of one assessed control.
///
/// Unknown status strings are coerced to `Fail` at the parse boundary:
/// an unrecognized result is treated as non-compliant rather than silently
/// passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    Pass,
    Fail,
    NotAssessed,
    Error,
    Partial,
    NotApplicable,
}

impl ControlStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pass" => ControlStatus::Pass,
            "not_assessed" => ControlStatus::NotAssessed,
            "error" => ControlStatus::Error,
            "partial" => ControlStatus::Partial,
            "not_applicable" => ControlStatus::NotApplicable,
            _ => ControlStatus::Fail,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlStatus::Pass => "pass",
            ControlStatus::Fail => "fail",
            ControlStatus::NotAssessed => "not_assessed",
            ControlStatus::Error => "error",
            ControlStatus::Partial => "partial",
            ControlStatus::NotApplicable => "not_applicable",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ControlStatus::Pass)
    }

    /// Applicable to the assessment but excluded from pass/fail counting.
    pub fn is_skipped(&self) -> bool {
        matches!(self, ControlStatus::NotApplicable)
    }
}

#[derive(Debug, Clone)]
pub struct ControlRecord {
    pub control_id: String,
    pub status: ControlStatus,
    pub control_title: String,
    pub family_override: Option<String>,
}

/// Typed assessment snapshot produced by the validated parse step.
/// Records the scoring engine would have to skip are dropped here, with a
/// diagnostic, so the engine only ever sees well-formed controls.
#[derive(Debug, Clone, Default)]
pub struct AssessmentResults {
    pub assessment_id: String,
    pub timestamp: String,
    pub controls: Vec<ControlRecord>,
    pub dropped_records: usize,
}

impl AssessmentResults {
    pub fn from_value(value: &Value) -> Self {
        let assessment_id = string_field(value, "assessment_id");
        let timestamp = string_field(value, "timestamp");

        let mut controls = Vec::new();
        let mut dropped_records = 0usize;

        match value.get("controls") {
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    match parse_control(item) {
                        Some(record) => controls.push(record),
                        None => {
                            dropped_records += 1;
                            warn!(index, "dropping malformed assessment control record");
                        }
                    }
                }
            }
            Some(_) => {
                warn!("assessment 'controls' field is not a list; scoring zero controls");
            }
            None => {
                warn!("assessment document has no 'controls' field; scoring zero controls");
            }
        }

        Self {
            assessment_id,
            timestamp,
            controls,
            dropped_records,
        }
    }
}

fn parse_control(item: &Value) -> Option<ControlRecord> {
    let record = item.as_object()?;

    let control_id = record
        .get("control_id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())?
        .to_string();

    let status = ControlStatus::parse(
        record
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default(),
    );

    let control_title = record
        .get("control_title")
        .or_else(|| record.get("title"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let family_override = record
        .get("family")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|family| !family.is_empty())
        .map(str::to_string);

    Some(ControlRecord {
        control_id,
        status,
        control_title,
        family_override,
    })
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
