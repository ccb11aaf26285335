//! Error types for TaxiHist
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Main error type for TaxiHist operations
#[derive(Error, Debug)]
pub enum HistError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Monthly extract file missing from the data directory
    #[error("Missing extract '{file}' in {dir}")]
    MissingExtract { file: String, dir: String },

    /// Column not found in a monthly extract
    #[error("Column '{column}' not found in {file}")]
    ColumnNotFound { column: String, file: String },

    /// Month name outside the known January..December set
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for TaxiHist operations
pub type Result<T> = std::result::Result<T, HistError>;

/// UI-friendly error message formatting
impl HistError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            HistError::FileIo(e) => format!("File error: {}", e),
            HistError::Polars(e) => format!("Data error: {}", e),
            HistError::MissingExtract { file, dir } => {
                format!("No extract file '{}' in {}", file, dir)
            }
            HistError::ColumnNotFound { column, file } => {
                format!("Column '{}' not found in {}", column, file)
            }
            HistError::UnknownMonth(name) => format!("Unknown month '{}'", name),
            HistError::Json(e) => format!("JSON error: {}", e),
            HistError::Custom(msg) => msg.clone(),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            HistError::FileIo(_) => "File Error",
            HistError::Polars(_) => "Data Error",
            HistError::MissingExtract { .. } => "Missing Extract",
            HistError::ColumnNotFound { .. } => "Column Not Found",
            HistError::UnknownMonth(_) => "Unknown Month",
            HistError::Json(_) => "JSON Error",
            HistError::Custom(_) => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HistError::ColumnNotFound {
            column: "trip_distance".to_string(),
            file: "df_01_19.csv".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Column 'trip_distance' not found in df_01_19.csv"
        );
        assert_eq!(err.title(), "Column Not Found");

        let err = HistError::MissingExtract {
            file: "df_02_20.csv".to_string(),
            dir: "./data".to_string(),
        };
        assert_eq!(err.user_message(), "No extract file 'df_02_20.csv' in ./data");
        assert_eq!(err.title(), "Missing Extract");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let hist_err: HistError = io_err.into();
        assert!(matches!(hist_err, HistError::FileIo(_)));
    }
}
