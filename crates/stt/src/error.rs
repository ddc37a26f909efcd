use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use thiserror::Error;
use voxrelay_core::{ErrorBody, HttpError};

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription stage errors
///
/// Validation failures map to 4xx; every downstream failure maps to 500
/// with the stringified error as the message.
#[derive(Debug, Error)]
pub enum SttError {
    /// The multipart form has no `file` field
    #[error("No file part")]
    MissingFile,

    /// The `api_key` form field is absent or empty
    #[error("No API key provided")]
    MissingApiKey,

    /// The request body could not be read as a form
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The upload exceeds the configured body limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Network or connection error reaching the transcription API
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Transcription API answered with a non-success status
    #[error("Transcription API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Transcription API answered with a body we could not decode
    #[error("Malformed transcription response: {0}")]
    MalformedResponse(String),

    /// Local failure before the request left the process
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl SttError {
    /// Whether the caller, not the upstream, is at fault
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFile | Self::MissingApiKey | Self::InvalidRequest(_) | Self::PayloadTooLarge(_)
        )
    }
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::MissingApiKey | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ConnectionError(_)
            | Self::ProviderApiError { .. }
            | Self::MalformedResponse(_)
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingFile | Self::MissingApiKey | Self::InvalidRequest(_) | Self::PayloadTooLarge(_) => {
                "invalid_request_error"
            }
            Self::ConnectionError(_) => "connection_error",
            Self::ProviderApiError { .. } | Self::MalformedResponse(_) => "api_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for SttError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            tracing::debug!(error_type = self.error_type(), "rejecting transcription request: {self}");
        } else {
            tracing::error!(error_type = self.error_type(), "transcription failed: {self}");
        }

        (self.status_code(), Json(ErrorBody::from_error(&self))).into_response()
    }
}
