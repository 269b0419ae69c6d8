use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },
}

impl AccountError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AccountError::IoError(e) => format!("Could not read or write a file: {}", e),
            AccountError::SerializationError(_) => "Could not render the account snapshot".to_string(),
            AccountError::ConfigValidationError { field, .. } => {
                format!("The configuration could not be parsed ({})", field)
            }
            AccountError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AccountError::InvalidOperation { input, .. } => {
                format!("Could not understand operation '{}'", input)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AccountError::IoError(_) => "Check that the file exists and is readable",
            AccountError::SerializationError(_) => "Run again without --json",
            AccountError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            AccountError::InvalidConfigValueError { .. } => "Fix the setting and run again",
            AccountError::InvalidOperation { .. } => {
                "Write operations as deposit:<amount> or withdraw:<amount>"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
