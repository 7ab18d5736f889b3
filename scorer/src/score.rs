use shared::models::{Card, ClusterMaxima, DeviceStatus, NodeInfo, Pod};

use crate::cycle::CycleState;
use crate::error::ScoreError;
use crate::filter::FitFilter;
use crate::weights::MetricWeights;

/// Pod label carrying the memory already promised to a scheduled pod.
pub const MEMORY_ALLOCATION_LABEL: &str = "scv/memory";

/// Multi-factor node scorer. Pure computation over inputs fetched by the
/// host; one instance may score many nodes concurrently.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: MetricWeights,
}

impl Scorer {
    pub fn new(weights: MetricWeights) -> Self {
        Scorer { weights }
    }

    /// Score one candidate node: basic card score plus the allocation
    /// pressure and actual utilization terms. Higher is better.
    pub fn score(
        &self,
        cycle: &CycleState,
        filter: &dyn FitFilter,
        status: &DeviceStatus,
        pod: &Pod,
        node: &NodeInfo,
    ) -> Result<u64, ScoreError> {
        let maxima = cycle.maxima()?;
        let basic = self.basic_score(maxima, filter, status, pod);
        let allocate = self.allocate_score(status, node);
        let actual = self.actual_score(status);

        tracing::debug!(node=%node.node.name, basic, allocate, actual, "Scored node");

        // term ranges keep this far from u64::MAX, but it must never wrap
        basic
            .checked_add(allocate)
            .and_then(|sum| sum.checked_add(actual))
            .ok_or(ScoreError::Overflow)
    }

    /// Sum of card scores over every card satisfying the request thresholds.
    /// Cards do not compete: every qualifying card adds to the node total.
    pub fn basic_score(
        &self,
        maxima: &ClusterMaxima,
        filter: &dyn FitFilter,
        status: &DeviceStatus,
        pod: &Pod,
    ) -> u64 {
        let Some(count) = filter.fits_count(pod, status) else {
            return 0;
        };
        let (Some(memory), Some(clock)) = (
            filter.fits_memory(count, pod, status),
            filter.fits_clock(count, pod, status),
        ) else {
            return 0;
        };

        status
            .card_list
            .iter()
            .filter(|card| card.free_memory >= memory && card.clock >= clock)
            .map(|card| self.card_score(maxima, card))
            .sum()
    }

    /// Weighted sum of per-metric ratios, each banded to 0-100 against the
    /// cluster maximum. Coarse banding is intentional: heterogeneous units
    /// become comparable and the total stays within a predictable magnitude.
    pub fn card_score(&self, maxima: &ClusterMaxima, card: &Card) -> u64 {
        let w = &self.weights;
        ratio(card.bandwidth, maxima.max_bandwidth) * w.bandwidth
            + ratio(card.clock, maxima.max_clock) * w.clock
            + ratio(card.core, maxima.max_core) * w.core
            + ratio(card.power, maxima.max_power) * w.power
            + ratio(card.free_memory, maxima.max_free_memory) * w.free_memory
            + ratio(card.total_memory, maxima.max_total_memory) * w.total_memory
    }

    /// Node-wide free memory headroom, independent of per-card structure.
    pub fn actual_score(&self, status: &DeviceStatus) -> u64 {
        ratio(status.free_memory_sum, status.total_memory_sum) * self.weights.actual
    }

    /// Discount for memory already promised to pods bound to the node but
    /// not yet reflected in the device status.
    pub fn allocate_score(&self, status: &DeviceStatus, node: &NodeInfo) -> u64 {
        let allocated: u64 = node.pods.iter().map(declared_allocation).sum();

        // pending allocations can momentarily exceed the reported total;
        // saturate instead of underflowing
        if status.total_memory_sum == 0 || status.total_memory_sum < allocated {
            return 0;
        }

        (status.total_memory_sum - allocated) * 100 / status.total_memory_sum
            * self.weights.allocate
    }
}

/// Memory declared by one already-scheduled pod. A malformed label counts
/// as zero rather than failing the whole node.
fn declared_allocation(pod: &Pod) -> u64 {
    let Some(raw) = pod.metadata.label(MEMORY_ALLOCATION_LABEL) else {
        return 0;
    };
    match raw.parse::<u64>() {
        Ok(memory) => memory,
        Err(_) => {
            tracing::warn!(
                pod=%pod.metadata.name,
                value=%raw,
                "Ignoring malformed memory allocation label"
            );
            0
        }
    }
}

/// 0-100 band of `value` against the cluster maximum. A zero maximum means
/// the metric was never observed anywhere this cycle; it contributes 0.
fn ratio(value: u64, max: u64) -> u64 {
    if max == 0 { 0 } else { value * 100 / max }
}
