use http::StatusCode;
use thiserror::Error;
use voxrelay_core::HttpError;

/// Errors from the completion stage
///
/// All of them are downstream failures and surface as 500.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network or connection error reaching the chat API
    #[error("Connection error: {0}")]
    Connection(String),

    /// Chat API answered with a non-success status
    #[error("Completion API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Chat API answered with a body we could not decode
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// Local failure before the request left the process
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError for LlmError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Connection(_) => "connection_error",
            Self::Upstream { .. } | Self::MalformedResponse(_) => "api_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
