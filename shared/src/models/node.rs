use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pod::Pod;

/// Represents a node in the cluster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub id: Uuid,
    pub name: String,
    pub status: NodeStatus,
    pub addr: String,
    pub last_heartbeat: DateTime<Utc>,
}

/// Status of a node in the cluster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum NodeStatus {
    Ready,
    Running,
    Stopped,
}

/// A node plus the pods already bound to it, supplied fresh by the host
/// for each scoring call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NodeInfo {
    pub node: Node,
    pub pods: Vec<Pod>,
}

impl Default for Node {
    fn default() -> Self {
        let id = Uuid::new_v4();
        Node {
            id,
            name: format!("node-{}", id),
            status: NodeStatus::Ready,
            addr: "".to_string(),
            last_heartbeat: Utc::now(),
        }
    }
}
