use crate::error::Result;
use crate::types::breakdown::Breakdown;

/// Deduction rows as CSV for spreadsheet-driven remediation tracking.
pub fn to_csv(breakdown: &Breakdown) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = ::csv::Writer::from_writer(&mut buffer);
        writer.write_record([
            "control_id",
            "control_title",
            "family",
            "weight",
            "poam_credit",
            "effective_deduction",
            "status",
        ])?;
        for deduction in &breakdown.deductions {
            let weight = deduction.weight.to_string();
            let poam_credit = deduction.poam_credit.to_string();
            let effective_deduction = deduction.effective_deduction.to_string();
            writer.write_record([
                deduction.control_id.as_str(),
                deduction.control_title.as_str(),
                deduction.family.as_str(),
                weight.as_str(),
                poam_credit.as_str(),
                effective_deduction.as_str(),
                deduction.status.as_str(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
