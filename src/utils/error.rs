use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalingError {
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScalingError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, message } => {
                format!("{} is not acceptable: {}", field, message)
            }
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Check '{}' in your configuration: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScalingError>;
