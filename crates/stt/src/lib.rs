#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod request;
mod types;

pub use client::{Transcriber, WhisperClient};
pub use error::{Result, SttError};
pub use request::ExtractMultipart;
pub use types::{AudioUpload, Transcription, TranscriptionRequest};
