use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ScenarioError;
use crate::queue::QueueKind;

pub const SCENARIO_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub defaults: Option<ScenarioDefaults>,
    pub centers: Vec<CenterSpec>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    #[serde(default)]
    pub parcels: Vec<ParcelSpec>,
    /// Upper bound on simulated ticks; the run also stops once the network drains.
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefaults {
    #[serde(default)]
    pub queue: Option<QueueKind>,
    #[serde(default)]
    pub monitored: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterSpec {
    pub id: String,
    #[serde(default)]
    pub queue: Option<QueueKind>,
    #[serde(default)]
    pub monitored: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
    pub weight: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelSpec {
    pub id: String,
    pub deadline: i64,
    #[serde(default)]
    pub size: u32,
    pub origin: String,
    pub destination: String,
    /// Tick at which the parcel enters the network at `origin`.
    #[serde(default)]
    pub at: u64,
}

impl ScenarioSpec {
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        let spec: ScenarioSpec = serde_json::from_str(raw)?;
        if spec.schema_version != SCENARIO_SCHEMA_VERSION {
            return Err(ScenarioError::UnsupportedSchema(spec.schema_version));
        }
        Ok(spec)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Queue kind for a center, falling back to scenario defaults, then FIFO.
    pub fn queue_for(&self, center: &CenterSpec) -> QueueKind {
        center
            .queue
            .or_else(|| self.defaults.as_ref().and_then(|d| d.queue))
            .unwrap_or_default()
    }

    pub fn monitored_for(&self, center: &CenterSpec) -> bool {
        center
            .monitored
            .or_else(|| self.defaults.as_ref().and_then(|d| d.monitored))
            .unwrap_or(true)
    }
}
