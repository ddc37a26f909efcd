use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;
use stt::SttError;
use thiserror::Error;
use voxrelay_core::HttpError;
use voxrelay_llm::LlmError;

/// Transcript kept when the completion stage fails and the config asks for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialTranscript {
    pub transcription: String,
    pub transcription_time: f64,
}

/// Failure of one `/transcribe` run
#[derive(Debug, Error)]
pub enum RelayError {
    /// Validation or upstream failure of the transcription stage
    #[error(transparent)]
    Transcription(#[from] SttError),

    /// Upstream failure of the completion stage
    #[error("{source}")]
    Completion {
        source: LlmError,
        partial: Option<PartialTranscript>,
    },
}

impl HttpError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Transcription(e) => e.status_code(),
            Self::Completion { source, .. } => source.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Transcription(e) => e.error_type(),
            Self::Completion { source, .. } => source.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Transcription(e) => e.client_message(),
            Self::Completion { source, .. } => source.client_message(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionErrorBody {
    error: String,
    #[serde(flatten)]
    partial: Option<PartialTranscript>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            Self::Transcription(e) => e.into_response(),
            Self::Completion { source, partial } => {
                tracing::error!(
                    error_type = source.error_type(),
                    transcript_kept = partial.is_some(),
                    "completion failed: {source}"
                );

                let body = CompletionErrorBody {
                    error: source.client_message(),
                    partial,
                };

                (source.status_code(), Json(body)).into_response()
            }
        }
    }
}
