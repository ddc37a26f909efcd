use std::path::PathBuf;

use serde::Deserialize;

/// Location of the browser UI files served by the front door
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory holding `index.html`, `styles.css` and `script.js`
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { root: default_root() }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("web")
}
