use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    /// Catalog is empty or lacks a required column. Fatal to plan generation.
    #[error("Invalid food catalog: {0}")]
    InvalidCatalog(String),

    /// Profile values that would make BMI/BMR meaningless.
    #[error("Invalid patient profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
