//! JSON tool configuration for the `gaussian-blur` binary.
//!
//! ```json
//! {
//!   "engine": { "strategy": "separable", "parallel": true },
//!   "report_json": "out/report.json"
//! }
//! ```
//!
//! Every field is optional; command-line flags take precedence.
use crate::convolve::EngineOptions;
use crate::error::{BlurError, BlurResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlurToolConfig {
    pub engine: EngineOptions,
    /// Where to write the JSON run report, if anywhere.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> BlurResult<BlurToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| BlurError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| BlurError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
