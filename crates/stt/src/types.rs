use secrecy::SecretString;

/// Audio file received from the browser
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio data, forwarded untouched
    pub bytes: Vec<u8>,
    /// Filename sent by the client, if any (informational only)
    pub filename: Option<String>,
    /// Content type sent by the client, if any
    pub content_type: Option<String>,
}

/// A validated `/transcribe` request
#[derive(Debug)]
pub struct TranscriptionRequest {
    pub audio: AudioUpload,
    /// Model override; the configured default applies when absent
    pub model: Option<String>,
    /// Language override (ISO 639-1); the configured default applies when absent
    pub language: Option<String>,
    /// Caller-supplied upstream key, used for this request only
    pub api_key: SecretString,
}

/// Text returned by the transcription API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub text: String,
}
