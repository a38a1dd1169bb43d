use thiserror::Error;

/// Error type covering text acquisition, analysis validation, and result export.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Neither or both of a file path and a URL were given for a text.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or fetching the text source failed. Carries the failing
    /// source identifier so the message names the file or URL.
    #[error("Error while getting data from {source_id}: {cause}")]
    Source {
        source_id: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// N-gram range bounds outside `n_start >= 1` and `n_end <= 10`.
    #[error("Invalid n-gram range [{n_start}, {n_end}): n_start must be >= 1 and n_end <= 10")]
    InvalidNgramRange { n_start: usize, n_end: usize },

    /// A field rejected its value at construction time.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
