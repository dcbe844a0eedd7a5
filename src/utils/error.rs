use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Failed to deploy war file after {attempts} times of retry.")]
    DeploymentError { attempts: u32 },

    #[error("Upload rejected by server with status {status}: {body}")]
    UploadRejected { status: u16, body: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Artifact,
    Transport,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status used by the binaries.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DeployError {
    pub fn validation(message: impl Into<String>) -> Self {
        DeployError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::ValidationError { .. } => ErrorCategory::Artifact,
            DeployError::DeploymentError { .. }
            | DeployError::UploadRejected { .. }
            | DeployError::ApiError(_) => ErrorCategory::Transport,
            DeployError::IoError(_) => ErrorCategory::System,
            DeployError::ConfigError { .. }
            | DeployError::ConfigValidationError { .. }
            | DeployError::InvalidConfigValueError { .. }
            | DeployError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Artifact | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DeployError::ValidationError { .. } => {
                "Build the project first, or point --war-file at an existing .war archive".to_string()
            }
            DeployError::DeploymentError { .. } => {
                "Check that the app is running and reachable, then run the deployment again"
                    .to_string()
            }
            DeployError::UploadRejected { status, .. } if *status == 401 || *status == 403 => {
                "Verify the publishing credentials for the target app".to_string()
            }
            DeployError::UploadRejected { .. } | DeployError::ApiError(_) => {
                "Check the SCM endpoint and network connectivity".to_string()
            }
            DeployError::IoError(_) => "Check file permissions and available disk space".to_string(),
            DeployError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            DeployError::ConfigError { .. }
            | DeployError::ConfigValidationError { .. }
            | DeployError::InvalidConfigValueError { .. } => {
                "Review the deployment configuration".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Artifact => format!("Artifact problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Transport => format!("Deployment failed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
