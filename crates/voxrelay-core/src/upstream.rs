use serde::Deserialize;

#[derive(Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamError,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UpstreamError {
    Detailed { message: String },
    Plain(String),
}

/// Pull the human-readable message out of an upstream error body
///
/// OpenAI-compatible APIs answer with `{"error": {"message": "..."}}`;
/// anything else is passed through as-is.
pub fn upstream_error_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(UpstreamErrorBody {
            error: UpstreamError::Detailed { message } | UpstreamError::Plain(message),
        }) => message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
