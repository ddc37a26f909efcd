//! Completion stage: forwards a transcript to an OpenAI-compatible chat API

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod protocol;

pub use client::{Completer, Completion};
pub use error::LlmError;
