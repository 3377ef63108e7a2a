use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendcloudError {
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("could not find a matching service point in SendCloud")]
    NoSuitableServicePointFound,

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("SendCloud API error (status {status}): {message}")]
    ApiError {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SendcloudError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// True for the errors raised before any request left the process.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

pub type Result<T> = std::result::Result<T, SendcloudError>;
