//! Generic weighted allocation scoring, independent of the card model.
//! Works over named resource quantities so a host can reuse it for any
//! resource shape it tracks.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Upper bound of a single-resource allocation score.
pub const MAX_RESOURCE_SCORE: i64 = 100;

const DEFAULT_WEIGHT: i64 = 1;

/// Named resource quantities, e.g. "cpu" -> millicores.
pub type ResourceList = BTreeMap<String, i64>;

/// Resource name to weight mapping for the weighted variant.
///
/// Weights below one are never honored: unmapped, zero and negative
/// entries all fall back to the default of 1.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceWeights(BTreeMap<String, i64>);

impl ResourceWeights {
    pub fn new(map: BTreeMap<String, i64>) -> Self {
        ResourceWeights(map)
    }

    pub fn weight(&self, resource: &str) -> i64 {
        match self.0.get(resource) {
            Some(&w) if w >= DEFAULT_WEIGHT => w,
            _ => DEFAULT_WEIGHT,
        }
    }
}

/// Allocation ratio of one resource on a 0-100 scale. The more of the
/// capacity is requested, the higher the score; a zero capacity or a
/// request beyond capacity scores 0.
pub fn most_allocated_score(requested: i64, capacity: i64) -> i64 {
    if capacity <= 0 || requested < 0 || requested > capacity {
        return 0;
    }
    requested * MAX_RESOURCE_SCORE / capacity
}

/// Weighted average of per-resource allocation scores over every requested
/// resource. Resources missing from `allocatable` score 0; an empty
/// request scores 0.
pub fn weighted_allocation_score(
    requested: &ResourceList,
    allocatable: &ResourceList,
    weights: &ResourceWeights,
) -> i64 {
    let mut score_sum = 0i64;
    let mut weight_sum = 0i64;

    for (resource, &amount) in requested {
        let capacity = allocatable.get(resource).copied().unwrap_or(0);
        let weight = weights.weight(resource);
        score_sum += most_allocated_score(amount, capacity) * weight;
        weight_sum += weight;
    }

    if weight_sum == 0 {
        return 0;
    }
    score_sum / weight_sum
}
