pub mod device;
pub mod metadata;
pub mod node;
pub mod pod;

pub use device::{Card, ClusterMaxima, DeviceStatus};
pub use metadata::Metadata;
pub use node::{Node, NodeInfo, NodeStatus};
pub use pod::{Pod, PodSpec};
