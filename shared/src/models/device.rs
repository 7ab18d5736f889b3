use serde::{Deserialize, Serialize};

/// One accelerator card as reported by the node's device status source.
/// Immutable snapshot for the duration of a scoring call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub bandwidth: u64,
    pub clock: u64,
    pub core: u64,
    pub power: u64,
    pub free_memory: u64,
    pub total_memory: u64,
}

/// Aggregate device state of one node. The memory sums are maintained by
/// the status source and are never recomputed here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub card_list: Vec<Card>,
    pub free_memory_sum: u64,
    pub total_memory_sum: u64,
}

/// Largest observed value of each card metric across the whole cluster.
/// Collected once per scheduling cycle and shared read-only across every
/// node scoring call in that cycle.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMaxima {
    pub max_bandwidth: u64,
    pub max_clock: u64,
    pub max_core: u64,
    pub max_power: u64,
    pub max_free_memory: u64,
    pub max_total_memory: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_status_wire_shape() {
        // camelCase payload as published by the device status source
        let raw = r#"{
            "cardList": [
                {
                    "bandwidth": 732,
                    "clock": 1530,
                    "core": 5120,
                    "power": 300,
                    "freeMemory": 12000,
                    "totalMemory": 16000
                }
            ],
            "freeMemorySum": 12000,
            "totalMemorySum": 16000
        }"#;

        let status: DeviceStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.card_list.len(), 1);
        assert_eq!(status.card_list[0].free_memory, 12000);
        assert_eq!(status.total_memory_sum, 16000);
    }

    #[test]
    fn test_cluster_maxima_wire_shape() {
        let raw = r#"{
            "maxBandwidth": 900,
            "maxClock": 1800,
            "maxCore": 6912,
            "maxPower": 400,
            "maxFreeMemory": 24000,
            "maxTotalMemory": 24000
        }"#;

        let maxima: ClusterMaxima = serde_json::from_str(raw).unwrap();
        assert_eq!(maxima.max_clock, 1800);
        assert_eq!(maxima.max_total_memory, 24000);
    }
}
