use thiserror::Error;

#[derive(Error, Debug)]
pub enum SprsError {
    #[error("assessment file not found: {0}")]
    AssessmentNotFound(String),

    #[error("no assessment snapshots found in: {0}")]
    EmptyHistory(String),

    #[error("invalid assessment document: {0}")]
    InvalidAssessment(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SprsError>;
