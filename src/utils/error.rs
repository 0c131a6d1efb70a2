use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request type")]
    InvalidRequest,

    #[error("Data not found")]
    NotFound,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream returned status {status} for {url}")]
    UpstreamStatusError { status: u16, url: String },

    #[error("Unexpected upstream payload: {message}")]
    PayloadError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GatewayError {
    pub fn payload(message: impl Into<String>) -> Self {
        Self::PayloadError {
            message: message.into(),
        }
    }

    /// 對應到回傳給呼叫端的 HTTP 狀態碼
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 回應 body 中的 message 欄位
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest | Self::NotFound => self.to_string(),
            other => format!("An internal server error occurred: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
