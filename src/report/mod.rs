pub mod csv;
pub mod json;
pub mod md;

use crate::error::{Result, SprsError};
use crate::types::breakdown::Breakdown;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
}

pub fn render(breakdown: &Breakdown, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(breakdown).map_err(SprsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(breakdown)),
        OutputFormat::Csv => csv::to_csv(breakdown),
    }
}
