use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML rendering error: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PkgError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PkgError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PkgError::IoError(_) => ErrorCategory::Io,
            PkgError::SerializationError(_) | PkgError::TomlRenderError(_) => {
                ErrorCategory::Serialization
            }
            PkgError::ConfigValidationError { .. } | PkgError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A missing or unreadable manifest aborts the build outright.
            PkgError::IoError(_) => ErrorSeverity::Critical,
            PkgError::SerializationError(_) | PkgError::TomlRenderError(_) => ErrorSeverity::High,
            PkgError::ConfigValidationError { .. } | PkgError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PkgError::IoError(_) => {
                "Check that the descriptor and manifest files exist and are readable"
            }
            PkgError::SerializationError(_) | PkgError::TomlRenderError(_) => {
                "Inspect the computed metadata for values that cannot be serialized"
            }
            PkgError::ConfigValidationError { .. } => "Fix the package descriptor and re-run",
            PkgError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and re-run"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PkgError::IoError(e) => format!("File operation failed: {}", e),
            PkgError::SerializationError(e) => format!("Could not render metadata: {}", e),
            PkgError::TomlRenderError(e) => format!("Could not render metadata as TOML: {}", e),
            PkgError::ConfigValidationError { field, message } => {
                format!("Descriptor problem in {}: {}", field, message)
            }
            PkgError::InvalidConfigValueError { field, value, reason } => {
                format!("Bad value '{}' for {}: {}", value, field, reason)
            }
        }
    }
}
