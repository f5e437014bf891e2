use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Need at least 2 participants to draw assignments, found {found}")]
    InsufficientParticipants { found: usize },

    #[error("No valid assignment found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("Assignments for pool '{pool}' in {year} already exist")]
    AlreadyGenerated { pool: String, year: i32 },
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Data,
    Draw,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
            Self::ValidationError { .. }
            | Self::InsufficientParticipants { .. }
            | Self::AlreadyGenerated { .. } => ErrorCategory::Data,
            Self::GenerationExhausted { .. } => ErrorCategory::Draw,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重複抽籤不會破壞任何已存在的結果
            Self::AlreadyGenerated { .. } => ErrorSeverity::Low,
            Self::GenerationExhausted { .. } => ErrorSeverity::Medium,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. }
            | Self::InsufficientParticipants { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InsufficientParticipants { found } => format!(
                "A pool needs at least 2 people before assignments can be drawn (found {})",
                found
            ),
            Self::GenerationExhausted { .. } => {
                "Could not find a valid assignment with the current exclusions".to_string()
            }
            Self::AlreadyGenerated { pool, year } => format!(
                "Pool '{}' already has assignments for {}, nothing was changed",
                pool, year
            ),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Missing configuration field: {}", field)
            }
            Self::ValidationError { message } => format!("Pool definition problem: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InsufficientParticipants { .. } => {
                "Add more participants to the pool and run the draw again".to_string()
            }
            Self::GenerationExhausted { .. } => {
                "Review the exclusions and relax some of them, or raise --max-attempts".to_string()
            }
            Self::AlreadyGenerated { .. } => {
                "Remove the existing assignment file first if you really want to redraw".to_string()
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. } => {
                "Fix the pool definition file and run the draw again".to_string()
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                "Check file permissions and free disk space, then retry".to_string()
            }
        }
    }
}
