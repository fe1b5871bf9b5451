use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid participant record on line {line}: {message}")]
    RosterError { line: u64, message: String },

    #[error("Participant list cannot be matched: {message}")]
    InfeasibleRoster { message: String },

    #[error("No valid assignment found after {attempts} attempts")]
    RetryLimitReached { attempts: u64 },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Mail delivery failed: {message}")]
    MailError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Matching,
    Delivery,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::MissingConfigError { .. }
            | SantaError::TemplateError { .. } => ErrorCategory::Configuration,
            SantaError::CsvError(_) | SantaError::RosterError { .. } => ErrorCategory::Input,
            SantaError::InfeasibleRoster { .. } | SantaError::RetryLimitReached { .. } => {
                ErrorCategory::Matching
            }
            SantaError::MailError { .. } => ErrorCategory::Delivery,
            SantaError::IoError(_) | SantaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Matching => match self {
                // 換個種子重跑可能就會成功
                SantaError::RetryLimitReached { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Delivery => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::CsvError(_) | SantaError::RosterError { .. } => {
                "Check the participant file: id,name,gender,excluded_id,email,wishlist per line"
            }
            SantaError::IoError(_) => "Make sure the file exists and is readable",
            SantaError::SerializationError(_) => "Try the plain text report format instead",
            SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::MissingConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            SantaError::InfeasibleRoster { .. } => {
                "Remove some exclusions or add participants so everyone has a valid recipient"
            }
            SantaError::RetryLimitReached { .. } => {
                "Raise matching.max_attempts or leave it unset to retry without limit"
            }
            SantaError::TemplateError { .. } => "Check the mail template file",
            SantaError::MailError { .. } => {
                "Verify the mail host and credentials, or use --dry-run to print the results"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::IoError(e) => format!("Could not access a file: {}", e),
            SantaError::RosterError { line, message } => {
                format!("Participant list line {} is invalid: {}", line, message)
            }
            SantaError::InfeasibleRoster { .. } => {
                "The exclusions make it impossible to give everyone a recipient".to_string()
            }
            SantaError::MailError { .. } => {
                "Some notifications could not be delivered".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_limit_is_recoverable() {
        let err = SantaError::RetryLimitReached { attempts: 10 };
        assert_eq!(err.category(), ErrorCategory::Matching);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_roster_error_message_names_line() {
        let err = SantaError::RosterError {
            line: 4,
            message: "id is not a number".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("line 4"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = SantaError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
