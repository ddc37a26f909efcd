#![allow(dead_code)]

pub mod config;
pub mod mock_upstream;
pub mod server;

/// Audio bytes used as the upload in tests
pub const AUDIO: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt fake-audio-payload";

/// Build a `/transcribe` form from optional parts
pub fn transcribe_form(file: Option<&[u8]>, api_key: Option<&str>) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();

    if let Some(bytes) = file {
        form = form.part(
            "file",
            reqwest::multipart::Part::bytes(bytes.to_vec())
                .file_name("recording.webm")
                .mime_str("audio/webm")
                .unwrap(),
        );
    }

    if let Some(key) = api_key {
        form = form.text("api_key", key.to_owned());
    }

    form
}

/// URL of a local port that nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1")
}
