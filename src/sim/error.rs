//! 场景加载与构建错误

use std::path::PathBuf;

use thiserror::Error;

use super::scenario::SCENARIO_SCHEMA_VERSION;
use crate::net::RouterError;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported schema_version {0} (expected {expected})", expected = SCENARIO_SCHEMA_VERSION)]
    UnsupportedSchema(u32),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("duplicate parcel id {0}")]
    DuplicateParcel(String),

    #[error("parcel {parcel} has unknown origin {origin}")]
    UnknownOrigin { parcel: String, origin: String },
}
