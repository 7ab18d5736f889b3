use serde::Deserialize;

/// Contribution weight of each score term. One immutable table per
/// deployment; the scoring logic never hard-codes a weight.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub bandwidth: u64,
    pub clock: u64,
    pub core: u64,
    pub power: u64,
    pub free_memory: u64,
    pub total_memory: u64,
    /// Node-wide free memory headroom term.
    pub actual: u64,
    /// Pending allocation discount term.
    pub allocate: u64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        MetricWeights {
            bandwidth: 1,
            clock: 1,
            core: 1,
            power: 1,
            free_memory: 2,
            total_memory: 1,
            actual: 2,
            allocate: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = MetricWeights::default();
        assert_eq!(w.bandwidth, 1);
        assert_eq!(w.free_memory, 2);
        assert_eq!(w.actual, 2);
        assert_eq!(w.allocate, 3);
    }

    #[test]
    fn test_partial_table_falls_back_to_defaults() {
        let w: MetricWeights = serde_json::from_str(r#"{"free_memory": 5}"#).unwrap();
        assert_eq!(w.free_memory, 5);
        assert_eq!(w.allocate, 3);
    }
}
