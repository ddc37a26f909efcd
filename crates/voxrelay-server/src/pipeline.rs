use serde::Serialize;
use stt::{Transcriber, TranscriptionRequest};
use voxrelay_config::Config;
use voxrelay_core::timed;
use voxrelay_llm::Completer;

use crate::error::{PartialTranscript, RelayError};

/// JSON body of a successful `/transcribe` call
///
/// The shape depends on whether the completion stage is enabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RelayResponse {
    /// Transcription only
    Transcript { text: String, transcription_time: f64 },
    /// Transcription followed by a chat completion
    Completed {
        transcription: String,
        transcription_time: f64,
        llm_response: String,
        llm_time: f64,
    },
}

/// Second stage of the pipeline
#[derive(Debug, Clone)]
struct CompletionStage {
    completer: Completer,
    keep_transcript_on_failure: bool,
}

/// Transcription followed by an optional completion
///
/// Holds configuration only; every run builds its own upstream clients.
#[derive(Debug, Clone)]
pub struct Pipeline {
    transcriber: Transcriber,
    completion: Option<CompletionStage>,
}

impl Pipeline {
    pub fn from_config(config: &Config) -> Self {
        let completion = config.completion.enabled.then(|| CompletionStage {
            completer: Completer::from_config(&config.completion),
            keep_transcript_on_failure: config.completion.keep_transcript_on_failure,
        });

        Self {
            transcriber: Transcriber::from_config(&config.stt),
            completion,
        }
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Run the pipeline for one request
    ///
    /// # Errors
    ///
    /// Returns the first stage failure. A completion failure discards the
    /// transcript unless `keep_transcript_on_failure` is set.
    pub async fn run(&self, request: TranscriptionRequest) -> Result<RelayResponse, RelayError> {
        let api_key = request.api_key.clone();

        let transcription = timed(self.transcriber.transcribe(request)).await;
        let transcription_time = transcription.seconds();
        let text = transcription.value?.text;

        tracing::info!(elapsed = transcription_time, chars = text.len(), "transcription stage finished");

        let Some(stage) = &self.completion else {
            return Ok(RelayResponse::Transcript {
                text,
                transcription_time,
            });
        };

        let completion = timed(stage.completer.complete(&text, api_key)).await;
        let llm_time = completion.seconds();

        match completion.value {
            Ok(reply) => {
                tracing::info!(elapsed = llm_time, chars = reply.text.len(), "completion stage finished");

                Ok(RelayResponse::Completed {
                    transcription: text,
                    transcription_time,
                    llm_response: reply.text,
                    llm_time,
                })
            }
            Err(source) => {
                let partial = stage.keep_transcript_on_failure.then(|| PartialTranscript {
                    transcription: text,
                    transcription_time,
                });

                Err(RelayError::Completion { source, partial })
            }
        }
    }
}
