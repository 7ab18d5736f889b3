use serde::{Deserialize, Serialize};

use crate::models::metadata::Metadata;

/// A scheduled or pending workload. The device request it carries (count,
/// per-card memory and clock minima) is interpreted by the host's fit
/// filter, not by this crate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Pod {
    pub metadata: Metadata,
    pub spec: PodSpec,
}

/// Desired state
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PodSpec {
    pub node_name: String,
}

impl Default for PodSpec {
    fn default() -> Self {
        PodSpec {
            node_name: "".to_string(),
        }
    }
}
