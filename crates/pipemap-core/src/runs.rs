//! Run-history inputs.
//!
//! Run records are supplied by an external run-tracking subsystem. Every
//! record receives a node regardless of whether anything references it.

use serde::{Deserialize, Serialize};

/// A single historical execution run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunInfo {
    /// Unique run id (node ids are prefixed, so this may collide with
    /// module or contract ids without harm).
    pub id: String,
    /// Status string recorded for the run (e.g. "ok", "failed").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Filesystem path of the run's artifacts.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Start time of the run, if recorded.
    #[serde(rename = "startTime", default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
}

/// The full run history handed to the build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunState {
    /// Runs in recording order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<RunInfo>,
}
