use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Output,
    Configuration,
    Processing,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Input,
            EtlError::SerializationError(_) => ErrorCategory::Parse,
            EtlError::CsvError(_) => ErrorCategory::Output,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not read or write a file: {}", e),
            EtlError::SerializationError(e) => {
                format!("Input is not a valid JSON array of venue objects: {}", e)
            }
            EtlError::CsvError(e) => format!("Could not produce the CSV output: {}", e),
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            EtlError::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input file exists and is readable",
            ErrorCategory::Parse => "Make sure the input is a JSON array of objects",
            ErrorCategory::Output => "Check that the working directory is writable",
            ErrorCategory::Configuration => "Pass the input file path as the only argument",
            ErrorCategory::Processing => "Re-run with RUST_LOG=venue_flatten=debug for details",
        }
    }

    /// Process exit status for this error; never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
