use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not read input or write output: {}", e),
            AppError::ConfigReadError { path, .. } => {
                format!("Config file '{}' could not be opened", path)
            }
            AppError::ConfigParseError(_) => "Config file is not valid TOML".to_string(),
            AppError::InvalidConfigValue { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::IoError(_) => "Check that stdin and stdout are not closed".to_string(),
            AppError::ConfigReadError { .. } => {
                "Check the --config path and file permissions".to_string()
            }
            AppError::ConfigParseError(e) => format!("Fix the TOML syntax: {}", e),
            AppError::InvalidConfigValue { reason, .. } => reason.clone(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::IoError(_) => 3,
            AppError::ConfigReadError { .. }
            | AppError::ConfigParseError(_)
            | AppError::InvalidConfigValue { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
