use axum::extract::{FromRequest, Multipart, Request, multipart::MultipartError};
use secrecy::SecretString;

use crate::{
    error::SttError,
    types::{AudioUpload, TranscriptionRequest},
};

/// Extractor for the `/transcribe` multipart form
///
/// Recognised fields are `file`, `model`, `language` and `api_key`; any
/// other field is skipped. The file check runs before the API key check.
pub struct ExtractMultipart(pub TranscriptionRequest);

impl<S> FromRequest<S> for ExtractMultipart
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        // A body without form parts cannot carry a file
        if !is_multipart {
            return Err(SttError::MissingFile);
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut audio: Option<AudioUpload> = None;
        let mut model: Option<String> = None;
        let mut language: Option<String> = None;
        let mut api_key: Option<String> = None;

        while let Some(field) = multipart.next_field().await.map_err(field_error)? {
            let field_name = field.name().unwrap_or_default().to_string();

            match field_name.as_str() {
                "file" => {
                    // Only a part with a filename is an upload; a plain text `file` field is not
                    let Some(filename) = field.file_name().map(str::to_string) else {
                        tracing::trace!("skipping `file` field without a filename");
                        continue;
                    };
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(field_error)?;

                    audio = Some(AudioUpload {
                        bytes: bytes.to_vec(),
                        filename: Some(filename),
                        content_type,
                    });
                }
                "model" => model = non_empty(field.text().await.map_err(field_error)?),
                "language" => language = non_empty(field.text().await.map_err(field_error)?),
                "api_key" => api_key = non_empty(field.text().await.map_err(field_error)?),
                other => {
                    tracing::trace!(field = other, "skipping unknown form field");
                }
            }
        }

        let audio = audio.ok_or(SttError::MissingFile)?;
        let api_key = api_key.map(SecretString::from).ok_or(SttError::MissingApiKey)?;

        tracing::debug!(
            bytes = audio.bytes.len(),
            model = model.as_deref().unwrap_or("<default>"),
            language = language.as_deref().unwrap_or("<default>"),
            "parsed transcription form"
        );

        Ok(Self(TranscriptionRequest {
            audio,
            model,
            language,
            api_key,
        }))
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn field_error(error: MultipartError) -> SttError {
    if error.status() == http::StatusCode::PAYLOAD_TOO_LARGE {
        SttError::PayloadTooLarge(error.body_text())
    } else {
        SttError::InvalidRequest(format!("Failed to read multipart field: {}", error.body_text()))
    }
}
