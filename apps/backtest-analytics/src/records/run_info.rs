//! Run metadata normalization.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ArtifactError;
use crate::models::RunInfo;

use super::{RUN_INFO_FILE, read_snapshot};

/// Free-form metadata from `run_info.json`, `{}` when missing or not an object.
#[must_use]
pub fn normalize_run_info(run_dir: &Path) -> RunInfo {
    match read_snapshot::<Value>(run_dir, RUN_INFO_FILE) {
        Some(Value::Object(map)) => map.into_iter().collect(),
        Some(_) => {
            let e = ArtifactError::NotAnObject(run_dir.join(RUN_INFO_FILE));
            debug!(error = %e, "Run metadata ignored");
            RunInfo::new()
        }
        None => RunInfo::new(),
    }
}
