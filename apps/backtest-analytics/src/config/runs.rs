//! Run discovery configuration.

use serde::{Deserialize, Serialize};

use crate::run::{DEFAULT_LOGS_DIR, DEFAULT_RUN_PREFIX};

/// Where run directories live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunsConfig {
    /// Logs directory, relative to the base directory.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    /// Prefix shared by run directory names.
    #[serde(default = "default_run_prefix")]
    pub run_prefix: String,
}

impl Default for RunsConfig {
    fn default() -> Self {
        Self {
            logs_dir: default_logs_dir(),
            run_prefix: default_run_prefix(),
        }
    }
}

fn default_logs_dir() -> String {
    DEFAULT_LOGS_DIR.to_string()
}

fn default_run_prefix() -> String {
    DEFAULT_RUN_PREFIX.to_string()
}
