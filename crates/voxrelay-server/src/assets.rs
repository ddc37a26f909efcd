use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use http::{StatusCode, header};

/// A UI file served from the asset root
struct Asset {
    file: &'static str,
    content_type: &'static str,
}

const INDEX: Asset = Asset {
    file: "index.html",
    content_type: "text/html; charset=utf-8",
};

const STYLES: Asset = Asset {
    file: "styles.css",
    content_type: "text/css; charset=utf-8",
};

const SCRIPT: Asset = Asset {
    file: "script.js",
    content_type: "application/javascript",
};

#[derive(Clone)]
struct AssetState {
    root: Arc<PathBuf>,
}

/// Routes for the browser UI: `/`, `/styles.css`, `/script.js`
///
/// Files are read from disk on every request and returned byte-for-byte.
pub fn asset_router(root: PathBuf) -> Router {
    if !root.is_dir() {
        tracing::warn!(root = %root.display(), "asset root is not a directory, UI routes will return 404");
    }

    let state = AssetState { root: Arc::new(root) };

    Router::new()
        .route("/", get(|State(state): State<AssetState>| async move { serve(&state, &INDEX).await }))
        .route("/styles.css", get(|State(state): State<AssetState>| async move { serve(&state, &STYLES).await }))
        .route("/script.js", get(|State(state): State<AssetState>| async move { serve(&state, &SCRIPT).await }))
        .with_state(state)
}

async fn serve(state: &AssetState, asset: &Asset) -> Response {
    let path = state.root.join(asset.file);

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, asset.content_type)], bytes).into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to read asset");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
