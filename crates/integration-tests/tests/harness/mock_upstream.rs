//! Mock OpenAI-compatible backend for integration tests
//!
//! Serves `/v1/audio/transcriptions` and `/v1/chat/completions` on a random
//! port and records what voxrelay sent.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};

/// How the mock answers each stage
#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub transcript: String,
    pub transcription_delay: Duration,
    /// Reject transcription with this status and message
    pub transcription_failure: Option<(StatusCode, String)>,
    /// Return a 200 whose body is not a transcription
    pub transcription_malformed: bool,
    pub reply: String,
    /// Reject completion with this status and message
    pub completion_failure: Option<(StatusCode, String)>,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            transcript: "turn on the kitchen lights".to_owned(),
            transcription_delay: Duration::ZERO,
            transcription_failure: None,
            transcription_malformed: false,
            reply: "Sure, the kitchen lights are on.".to_owned(),
            completion_failure: None,
        }
    }
}

/// What the transcription endpoint received
#[derive(Debug, Clone, Default)]
pub struct CapturedTranscription {
    pub authorization: Option<String>,
    pub filename: Option<String>,
    pub audio: Vec<u8>,
    pub fields: HashMap<String, String>,
}

/// What the chat endpoint received
#[derive(Debug, Clone)]
pub struct CapturedCompletion {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockState {
    behavior: MockBehavior,
    transcription_calls: AtomicU32,
    completion_calls: AtomicU32,
    last_transcription: Mutex<Option<CapturedTranscription>>,
    last_completion: Mutex<Option<CapturedCompletion>>,
}

/// A running mock upstream
pub struct MockUpstream {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockUpstream {
    /// Start a mock that answers both stages successfully
    pub async fn start() -> Self {
        Self::start_with(MockBehavior::default()).await
    }

    /// Start a mock with custom behavior
    pub async fn start_with(behavior: MockBehavior) -> Self {
        let state = Arc::new(MockState {
            behavior,
            transcription_calls: AtomicU32::new(0),
            completion_calls: AtomicU32::new(0),
            last_transcription: Mutex::new(None),
            last_completion: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", post(handle_transcription))
            .route("/v1/chat/completions", post(handle_completion))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    /// Base URL to configure as `base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn transcription_calls(&self) -> u32 {
        self.state.transcription_calls.load(Ordering::SeqCst)
    }

    pub fn completion_calls(&self) -> u32 {
        self.state.completion_calls.load(Ordering::SeqCst)
    }

    pub fn last_transcription(&self) -> Option<CapturedTranscription> {
        self.state.last_transcription.lock().unwrap().clone()
    }

    pub fn last_completion(&self) -> Option<CapturedCompletion> {
        self.state.last_completion.lock().unwrap().clone()
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (
        status,
        axum::Json(json!({
            "error": {
                "message": message,
                "type": "invalid_request_error"
            }
        })),
    )
        .into_response()
}

async fn handle_transcription(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    state.transcription_calls.fetch_add(1, Ordering::SeqCst);

    let mut captured = CapturedTranscription {
        authorization: authorization(&headers),
        ..CapturedTranscription::default()
    };

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        if name == "file" {
            captured.filename = field.file_name().map(ToOwned::to_owned);
            captured.audio = field.bytes().await.unwrap().to_vec();
        } else {
            let value = field.text().await.unwrap();
            captured.fields.insert(name, value);
        }
    }

    *state.last_transcription.lock().unwrap() = Some(captured);

    let behavior = &state.behavior;

    if !behavior.transcription_delay.is_zero() {
        tokio::time::sleep(behavior.transcription_delay).await;
    }

    if let Some((status, message)) = &behavior.transcription_failure {
        return error_body(*status, message);
    }

    if behavior.transcription_malformed {
        return axum::Json(json!({ "segments": [] })).into_response();
    }

    axum::Json(json!({
        "text": behavior.transcript,
        "x_groq": { "id": "req_mock" }
    }))
    .into_response()
}

async fn handle_completion(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    state.completion_calls.fetch_add(1, Ordering::SeqCst);

    *state.last_completion.lock().unwrap() = Some(CapturedCompletion {
        authorization: authorization(&headers),
        body: body.clone(),
    });

    if let Some((status, message)) = &state.behavior.completion_failure {
        return error_body(*status, message);
    }

    let model = body["model"].as_str().unwrap_or("unknown").to_owned();

    axum::Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": state.behavior.reply
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 8,
            "total_tokens": 20
        }
    }))
    .into_response()
}
